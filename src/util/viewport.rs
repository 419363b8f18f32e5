//! Viewport classification.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Which layout policy a viewport width selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    /// One section at a time, hash kept in sync.
    Desktop,
    /// Every visible section stacked into one scrolling page.
    Mobile,
}

impl ViewportClass {
    /// Classify `width`; widths at or below `mobile_max_width` are mobile.
    pub fn from_width(width: f64, mobile_max_width: f64) -> Self {
        if width <= mobile_max_width { Self::Mobile } else { Self::Desktop }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}
