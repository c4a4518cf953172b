//! HOUSEI dashboard terminal UI.

pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod layout;
pub mod logging;
pub mod modal;
pub mod nav;
pub mod notifications;
pub mod projection;
pub mod state;
pub mod theme;
pub mod views;
pub mod widgets;
