//! Release velocity along the paging axis.
//!
//! Uses the impulse strategy: each pair of consecutive samples contributes
//! kinetic energy, and the final energy is converted back into a velocity.
//! Only recent samples count, and a pause longer than
//! [`ASSUME_STOPPED_MS`] means the pointer is treated as stopped.

/// Ring buffer size.
const HISTORY_SIZE: usize = 20;

/// Only samples from the last 100ms contribute.
const HORIZON_MS: i64 = 100;

/// A pause this long before release reads as zero velocity.
pub const ASSUME_STOPPED_MS: i64 = 40;

/// Velocities are reported per this many milliseconds (pixels per second).
pub const VELOCITY_UNIT_MILLIS: f32 = 1000.0;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    uptime_millis: i64,
    position: f32,
}

/// Tracks primary-axis pointer positions for one gesture.
#[derive(Clone, Debug)]
pub struct ReleaseVelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for ReleaseVelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseVelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    /// Records the pointer position at `uptime_millis`.
    pub fn add_position(&mut self, uptime_millis: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample {
            uptime_millis,
            position,
        });
    }

    /// Velocity in pixels per second, capped to `±max_velocity`.
    ///
    /// Positive values mean the pointer moved toward increasing coordinates.
    pub fn release_velocity(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity_per_millis() * VELOCITY_UNIT_MILLIS;
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }

    fn velocity_per_millis(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut index = self.newest;
        let mut previous = newest;

        while let Some(sample) = self.samples[index] {
            let age = newest.uptime_millis - sample.uptime_millis;
            let gap = previous.uptime_millis - sample.uptime_millis;
            if !(0..=HORIZON_MS).contains(&age) || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous = sample;
            positions[count] = sample.position;
            times[count] = -(age as f32);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            index = if index == 0 { HISTORY_SIZE - 1 } else { index - 1 };
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &times[..count])
    }
}

/// `positions` and `times` are newest first; `times` are non-positive ages.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;
    for i in (1..=oldest).rev() {
        let dt = times[i - 1] - times[i];
        if dt == 0.0 {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / dt;
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }
    kinetic_energy_to_velocity(work)
}

/// `E = ½·v²` with unit mass.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
