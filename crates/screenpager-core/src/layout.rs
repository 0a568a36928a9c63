//! Host-facing measurement and placement types.
//!
//! The pager does not measure its screens. The host hands it an exact
//! viewport size through [`MeasureSpec`] and the measured size of every screen
//! on layout; the pager answers with where each screen goes.

/// Integer size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Integer rectangle in the pager's content coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Constraint the host passes for one dimension of the viewport.
///
/// Only [`MeasureSpec::Exactly`] is accepted; a pager has no intrinsic size
/// to wrap, so the other modes are configuration errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The viewport is exactly this many pixels.
    Exactly(i32),
    /// The viewport may be at most this many pixels.
    AtMost(i32),
    /// No constraint.
    Unspecified,
}

impl MeasureSpec {
    /// Returns the exact size, or `None` for the non-exact modes.
    pub fn exact_size(self) -> Option<i32> {
        match self {
            MeasureSpec::Exactly(size) => Some(size.max(0)),
            MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_specs_yield_a_size() {
        assert_eq!(MeasureSpec::Exactly(320).exact_size(), Some(320));
        assert_eq!(MeasureSpec::AtMost(320).exact_size(), None);
        assert_eq!(MeasureSpec::Unspecified.exact_size(), None);
    }

    #[test]
    fn negative_exact_size_is_floored_at_zero() {
        assert_eq!(MeasureSpec::Exactly(-5).exact_size(), Some(0));
    }

    #[test]
    fn rect_dimensions() {
        let rect = IntRect::new(300, 0, 600, 480);
        assert_eq!(rect.width(), 300);
        assert_eq!(rect.height(), 480);
    }
}
