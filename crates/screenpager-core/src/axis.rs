//! Axis policies.
//!
//! A pager pages along exactly one axis. Everything that depends on which
//! axis that is lives behind [`AxisPolicy`]: which pointer coordinate drives
//! the drag, which screen dimension is its extent, how screens are placed and
//! how long an automatically timed snap takes.

use std::fmt::Debug;

use crate::input::Point;
use crate::layout::{IntRect, IntSize};

/// Axis-specific behavior of a pager.
pub trait AxisPolicy: Copy + Default + Debug + 'static {
    /// Short name used in logs and errors.
    const NAME: &'static str;

    /// Coordinate along the paging axis.
    fn primary(point: Point) -> f32;

    /// Coordinate across the paging axis.
    fn secondary(point: Point) -> f32;

    /// Extent of a size along the paging axis.
    fn extent(size: IntSize) -> i32;

    /// Places a screen of `size` whose leading edge sits at `start` along
    /// the paging axis.
    fn place(start: i32, size: IntSize) -> IntRect;

    /// Duration of a snap whose length was not given explicitly.
    fn auto_duration_millis(delta: i32, viewport_extent: i32, base_duration_millis: u32) -> u32;
}

/// Pages left and right; screens are laid out by width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Horizontal;

/// Pages up and down; screens are laid out by height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vertical;

impl AxisPolicy for Horizontal {
    const NAME: &'static str = "horizontal";

    fn primary(point: Point) -> f32 {
        point.x
    }

    fn secondary(point: Point) -> f32 {
        point.y
    }

    fn extent(size: IntSize) -> i32 {
        size.width
    }

    fn place(start: i32, size: IntSize) -> IntRect {
        IntRect::new(start, 0, start + size.width, size.height)
    }

    /// Scales the base duration by the fraction of a viewport still to
    /// travel, so a snap after an 80% drag only takes 20% of the time.
    fn auto_duration_millis(delta: i32, viewport_extent: i32, base_duration_millis: u32) -> u32 {
        if viewport_extent <= 0 {
            return 0;
        }
        let fraction = delta.unsigned_abs() as f32 / viewport_extent as f32;
        (fraction * base_duration_millis as f32) as u32
    }
}

impl AxisPolicy for Vertical {
    const NAME: &'static str = "vertical";

    fn primary(point: Point) -> f32 {
        point.y
    }

    fn secondary(point: Point) -> f32 {
        point.x
    }

    fn extent(size: IntSize) -> i32 {
        size.height
    }

    fn place(start: i32, size: IntSize) -> IntRect {
        IntRect::new(0, start, size.width, start + size.height)
    }

    /// Two milliseconds per pixel, independent of the viewport.
    fn auto_duration_millis(delta: i32, _viewport_extent: i32, _base_duration_millis: u32) -> u32 {
        delta.unsigned_abs().saturating_mul(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_reads_x_and_width() {
        let point = Point::new(12.0, 34.0);
        assert_eq!(Horizontal::primary(point), 12.0);
        assert_eq!(Horizontal::secondary(point), 34.0);
        assert_eq!(Horizontal::extent(IntSize::new(300, 500)), 300);
        assert_eq!(
            Horizontal::place(300, IntSize::new(300, 500)),
            IntRect::new(300, 0, 600, 500)
        );
    }

    #[test]
    fn vertical_reads_y_and_height() {
        let point = Point::new(12.0, 34.0);
        assert_eq!(Vertical::primary(point), 34.0);
        assert_eq!(Vertical::secondary(point), 12.0);
        assert_eq!(Vertical::extent(IntSize::new(300, 500)), 500);
        assert_eq!(
            Vertical::place(500, IntSize::new(300, 500)),
            IntRect::new(0, 500, 300, 1000)
        );
    }

    #[test]
    fn horizontal_duration_is_proportional_to_remaining_viewport() {
        assert_eq!(Horizontal::auto_duration_millis(300, 300, 500), 500);
        assert_eq!(Horizontal::auto_duration_millis(-60, 300, 500), 100);
        assert_eq!(Horizontal::auto_duration_millis(100, 400, 500), 125);
        assert_eq!(Horizontal::auto_duration_millis(0, 300, 500), 0);
    }

    #[test]
    fn horizontal_duration_with_empty_viewport_is_zero() {
        assert_eq!(Horizontal::auto_duration_millis(100, 0, 500), 0);
    }

    #[test]
    fn vertical_duration_is_two_millis_per_pixel() {
        assert_eq!(Vertical::auto_duration_millis(200, 800, 500), 400);
        assert_eq!(Vertical::auto_duration_millis(-35, 800, 500), 70);
    }
}
