//! Reusable widget components.

pub mod detail;
pub mod filter;
pub mod progress;
pub mod status;
pub mod syntax;
pub mod tree;

pub use detail::DetailPanel;
pub use filter::{FilterBar, FilterOption};
pub use progress::ProgressBar;
pub use status::StatusBadge;
pub use syntax::SyntaxHighlighter;
pub use tree::{TreeItem, TreeStyle, TreeWidget};
