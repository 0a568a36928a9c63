//! Frame scheduling and time stamps.

use web_time::Instant;

/// Host hook the pager calls when it needs another frame.
///
/// The host answers by calling [`Pager::tick`](crate::Pager::tick) on its
/// next frame. Requests are not counted; one pending frame is enough.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

impl<F: FnMut()> FrameScheduler for F {
    fn request_frame(&mut self) {
        self()
    }
}

/// Monotonic clock for hosts without their own frame and event times.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Nanoseconds since the clock was created, for [`Pager::tick`](crate::Pager::tick).
    pub fn frame_time_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Milliseconds since the clock was created, for pointer event stamps.
    pub fn uptime_millis(&self) -> i64 {
        i64::try_from(self.origin.elapsed().as_millis()).unwrap_or(i64::MAX)
    }
}
