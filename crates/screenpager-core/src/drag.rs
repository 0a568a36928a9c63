//! Drag tracking: pointer motion to a bounded scroll offset.

use crate::gesture::GestureSample;

/// Converts primary-axis pointer motion into scroll offset changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragTracker {
    max_offset: i32,
}

impl DragTracker {
    /// `content_extent` is the sum of all screen extents.
    pub fn new(content_extent: i32, viewport_extent: i32) -> Self {
        Self {
            max_offset: (content_extent - viewport_extent).max(0),
        }
    }

    /// Largest reachable scroll offset.
    pub fn max_offset(&self) -> i32 {
        self.max_offset
    }

    /// Incremental delta since the reference, in whole pixels.
    ///
    /// Moving the pointer toward smaller coordinates scrolls toward the end,
    /// so the delta is `reference - new`. The reference follows the pointer.
    pub fn take_delta(reference: &mut GestureSample, primary: f32) -> i32 {
        let delta = (reference.primary - primary) as i32;
        reference.primary = primary;
        delta
    }

    /// Applies `delta` to `offset`, never going below 0 or past the end of
    /// the content. Returns the new offset.
    pub fn apply(&self, offset: i32, delta: i32) -> i32 {
        if delta < 0 {
            if offset > 0 {
                offset + delta.max(-offset)
            } else {
                offset
            }
        } else if delta > 0 {
            let available = self.max_offset - offset;
            if available > 0 {
                offset + delta.min(available)
            } else {
                offset
            }
        } else {
            offset
        }
    }
}
