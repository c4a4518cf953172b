//! Responsive layout classification.
//!
//! Widths are in pixels. The terminal reports columns, so callers convert
//! with the configured cell width before classifying.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Widths below this are mobile and force the sidebar closed.
    pub mobile_below: u32,
    /// Widths at or above this force the sidebar open.
    pub desktop_from: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_below: 768,
            desktop_from: 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub is_mobile: bool,
    pub sidebar_collapsed: bool,
}

impl Breakpoints {
    /// Between the two breakpoints the previous collapse state is kept, so
    /// the sidebar only moves when a boundary is crossed.
    pub fn classify(&self, width: u32, prior_collapsed: bool) -> Viewport {
        let sidebar_collapsed = if width < self.mobile_below {
            true
        } else if width >= self.desktop_from {
            false
        } else {
            prior_collapsed
        };
        Viewport {
            width,
            is_mobile: width < self.mobile_below,
            sidebar_collapsed,
        }
    }
}

/// Classify with the default 768/1024 breakpoints.
pub fn classify(width: u32, prior_collapsed: bool) -> Viewport {
    Breakpoints::default().classify(width, prior_collapsed)
}

/// Pixel width of a terminal `columns` wide.
pub fn columns_to_px(columns: u16, cell_width_px: u16) -> u32 {
    u32::from(columns) * u32::from(cell_width_px)
}

/// Live layout state, re-derived on mount and on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub breakpoints: Breakpoints,
    pub viewport: Viewport,
}

impl LayoutState {
    pub fn new(breakpoints: Breakpoints, width: u32) -> Self {
        Self {
            breakpoints,
            viewport: breakpoints.classify(width, false),
        }
    }

    /// Returns true when the device class or collapse state changed.
    pub fn resize(&mut self, width: u32) -> bool {
        let next = self
            .breakpoints
            .classify(width, self.viewport.sidebar_collapsed);
        let changed = next.is_mobile != self.viewport.is_mobile
            || next.sidebar_collapsed != self.viewport.sidebar_collapsed;
        self.viewport = next;
        if changed {
            tracing::info!(
                width,
                is_mobile = next.is_mobile,
                sidebar_collapsed = next.sidebar_collapsed,
                "Layout reclassified"
            );
        }
        changed
    }

    /// Mobile always keeps the sidebar collapsed, so the toggle is ignored there.
    pub fn toggle_sidebar(&mut self) {
        if self.viewport.is_mobile {
            return;
        }
        self.viewport.sidebar_collapsed = !self.viewport.sidebar_collapsed;
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.viewport.sidebar_collapsed
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_classify_is_pure(width in 0u32..4000, prior in any::<bool>()) {
            prop_assert_eq!(classify(width, prior), classify(width, prior));
        }

        #[test]
        fn prop_band_preserves_prior(width in 768u32..1024, prior in any::<bool>()) {
            prop_assert_eq!(classify(width, prior).sidebar_collapsed, prior);
        }

        #[test]
        fn prop_outside_band_ignores_prior(width in prop_oneof![0u32..768, 1024u32..5000]) {
            prop_assert_eq!(classify(width, true), classify(width, false));
        }
    }
}
