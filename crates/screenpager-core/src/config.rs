//! Pager tuning.
//!
//! Distances are in logical pixels and scaled by [`PagerConfig::density`]
//! where the pager compares them against raw pointer movement.

use crate::animation::Easing;
use crate::error::PagerError;

/// Pointer travel (logical px) before a press turns into a scroll.
///
/// Matches common platform touch slop (about 8dp on Android).
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Release velocity (dp/s) that flings to the neighboring screen no matter
/// how short the drag was.
pub const DEFAULT_SNAP_VELOCITY_DP_PER_SECOND: f32 = 600.0;

/// Maximum release velocity in logical pixels per second.
pub const DEFAULT_MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Duration of a programmatic animated screen change, and of an automatic
/// horizontal snap across one full viewport.
pub const DEFAULT_SNAP_DURATION_MILLIS: u32 = 500;

/// A slow drag past `viewport / DEFAULT_SWIPE_FRACTION` switches screens.
pub const DEFAULT_SWIPE_FRACTION: i32 = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerConfig {
    /// Physical pixels per logical pixel.
    pub density: f32,
    /// Slop in logical pixels.
    pub touch_slop: f32,
    pub snap_velocity_dp_per_second: f32,
    /// Velocity cap in logical pixels per second.
    pub max_fling_velocity: f32,
    pub base_duration_millis: u32,
    /// Denominator of the viewport fraction a slow drag must cover.
    pub swipe_fraction: i32,
    pub easing: Easing,
    /// Screen shown after the first layout, clamped to the screen count.
    pub initial_screen: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            touch_slop: DEFAULT_TOUCH_SLOP,
            snap_velocity_dp_per_second: DEFAULT_SNAP_VELOCITY_DP_PER_SECOND,
            max_fling_velocity: DEFAULT_MAX_FLING_VELOCITY,
            base_duration_millis: DEFAULT_SNAP_DURATION_MILLIS,
            swipe_fraction: DEFAULT_SWIPE_FRACTION,
            easing: Easing::ViscousFluid,
            initial_screen: 0,
        }
    }
}

impl PagerConfig {
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_snap_velocity(mut self, dp_per_second: f32) -> Self {
        self.snap_velocity_dp_per_second = dp_per_second;
        self
    }

    pub fn with_max_fling_velocity(mut self, max_fling_velocity: f32) -> Self {
        self.max_fling_velocity = max_fling_velocity;
        self
    }

    pub fn with_base_duration(mut self, millis: u32) -> Self {
        self.base_duration_millis = millis;
        self
    }

    pub fn with_swipe_fraction(mut self, swipe_fraction: i32) -> Self {
        self.swipe_fraction = swipe_fraction;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_initial_screen(mut self, screen: usize) -> Self {
        self.initial_screen = screen;
        self
    }

    /// Slop in physical pixels.
    pub fn scaled_touch_slop(&self) -> f32 {
        self.touch_slop * self.density
    }

    /// Snap velocity in physical pixels per second.
    pub fn density_adjusted_snap_velocity(&self) -> f32 {
        self.snap_velocity_dp_per_second * self.density
    }

    /// Velocity cap in physical pixels per second.
    pub fn scaled_max_fling_velocity(&self) -> f32 {
        self.max_fling_velocity * self.density
    }

    pub fn validate(&self) -> Result<(), PagerError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(PagerError::InvalidConfig {
                field: "density",
                reason: "must be a positive number",
            });
        }
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(PagerError::InvalidConfig {
                field: "touch_slop",
                reason: "must not be negative",
            });
        }
        if !self.snap_velocity_dp_per_second.is_finite() || self.snap_velocity_dp_per_second < 0.0
        {
            return Err(PagerError::InvalidConfig {
                field: "snap_velocity_dp_per_second",
                reason: "must not be negative",
            });
        }
        if !self.max_fling_velocity.is_finite() || self.max_fling_velocity <= 0.0 {
            return Err(PagerError::InvalidConfig {
                field: "max_fling_velocity",
                reason: "must be a positive number",
            });
        }
        if self.swipe_fraction < 1 {
            return Err(PagerError::InvalidConfig {
                field: "swipe_fraction",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
