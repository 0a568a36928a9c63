//! Snap animation.
//!
//! A snap is a single tween of the scroll offset from where it is now to a
//! screen boundary. At most one run exists; starting another replaces it
//! from the current offset without blending.

/// Easing curves. Every curve maps 0 to 0 and 1 to 1 and never decreases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation.
    LinearEasing,
    /// Exponential "viscous fluid" deceleration used by platform scrollers.
    ViscousFluid,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::LinearEasing => fraction,
            Easing::ViscousFluid => viscous_fluid(fraction),
        }
    }
}

const VISCOUS_FLUID_SCALE: f32 = 8.0;

fn viscous_fluid_raw(x: f32) -> f32 {
    let x = x * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        // 1/e, the value of the first segment at x == 1
        let start = 0.367_879_44;
        let x = 1.0 - (1.0 - x).exp();
        start + x * (1.0 - start)
    }
}

fn viscous_fluid(fraction: f32) -> f32 {
    let normalize = 1.0 / viscous_fluid_raw(1.0);
    (viscous_fluid_raw(fraction) * normalize).clamp(0.0, 1.0)
}

/// How long a snap should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapDuration {
    /// Derived from the remaining distance by the axis policy.
    #[default]
    Auto,
    /// Exactly this many milliseconds.
    Millis(u32),
}

impl From<i32> for SnapDuration {
    /// Negative values mean automatic timing.
    fn from(millis: i32) -> Self {
        if millis < 0 {
            SnapDuration::Auto
        } else {
            SnapDuration::Millis(millis as u32)
        }
    }
}

/// One in-flight offset interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRun {
    pub start_offset: i32,
    pub target_offset: i32,
    pub duration_millis: u32,
    /// Latched from the first frame that samples the run.
    pub start_time_nanos: Option<u64>,
}

impl AnimationRun {
    pub fn delta(&self) -> i32 {
        self.target_offset - self.start_offset
    }
}

/// Offset produced by one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    pub offset: i32,
    pub finished: bool,
}

/// Drives at most one [`AnimationRun`].
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    run: Option<AnimationRun>,
    easing: Easing,
}

impl ScrollAnimator {
    pub fn new(easing: Easing) -> Self {
        Self { run: None, easing }
    }

    /// Starts a run, replacing any run in flight.
    pub fn start(&mut self, start_offset: i32, target_offset: i32, duration_millis: u32) {
        self.run = Some(AnimationRun {
            start_offset,
            target_offset,
            duration_millis,
            start_time_nanos: None,
        });
    }

    /// Drops the run in flight, returning it.
    pub fn abort(&mut self) -> Option<AnimationRun> {
        self.run.take()
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Samples the run at `frame_time_nanos`.
    ///
    /// Returns `None` when idle. The finishing frame lands exactly on the
    /// target and clears the run.
    pub fn sample(&mut self, frame_time_nanos: u64) -> Option<AnimationFrame> {
        let run = self.run.as_mut()?;
        let start_time = *run.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = u64::from(run.duration_millis) * 1_000_000;

        let linear_progress = if duration_nanos == 0 {
            1.0
        } else {
            (elapsed_nanos as f64 / duration_nanos as f64).clamp(0.0, 1.0) as f32
        };

        if linear_progress >= 1.0 {
            let offset = run.target_offset;
            self.run = None;
            return Some(AnimationFrame {
                offset,
                finished: true,
            });
        }

        let progress = self.easing.transform(linear_progress);
        let offset = run.start_offset + (run.delta() as f32 * progress).round() as i32;
        Some(AnimationFrame {
            offset,
            finished: false,
        })
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
