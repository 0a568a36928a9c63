//! Release destination: previous, next or current screen.
//!
//! A fast enough release flings one screen in its direction. Otherwise the
//! pager moves on only when the drag covered more than `1/swipe_fraction` of
//! the viewport, and snaps back if it did not. Neither rule ever steps past
//! the first or last screen.

/// Why a destination was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleReason {
    /// Release velocity crossed the snap threshold.
    Fling,
    /// The drag covered enough of the viewport.
    Distance,
    /// Neither rule applied; back to the current screen.
    SnapBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleDecision {
    pub target: usize,
    pub reason: SettleReason,
}

/// Inputs of a settle decision, captured at release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseSnapshot {
    /// Primary-axis pointer velocity in px/s; positive means the content was
    /// thrown toward the start.
    pub velocity: f32,
    pub current_screen: usize,
    pub screen_count: usize,
    pub live_offset: i32,
    pub viewport_extent: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleDecider {
    snap_velocity: f32,
    swipe_fraction: i32,
}

impl SettleDecider {
    /// `snap_velocity` is already density adjusted.
    pub fn new(snap_velocity: f32, swipe_fraction: i32) -> Self {
        Self {
            snap_velocity,
            swipe_fraction: swipe_fraction.max(1),
        }
    }

    pub fn decide(&self, release: &ReleaseSnapshot) -> SettleDecision {
        let current = release.current_screen;
        let last = release.screen_count.saturating_sub(1);

        if release.velocity > self.snap_velocity && current > 0 {
            return SettleDecision {
                target: current - 1,
                reason: SettleReason::Fling,
            };
        }
        if release.velocity < -self.snap_velocity && current < last {
            return SettleDecision {
                target: current + 1,
                reason: SettleReason::Fling,
            };
        }
        self.decide_by_distance(release)
    }

    /// Distance rule alone, ignoring velocity.
    pub fn decide_by_distance(&self, release: &ReleaseSnapshot) -> SettleDecision {
        let current = release.current_screen;
        let last = release.screen_count.saturating_sub(1);
        let threshold = release.viewport_extent / self.swipe_fraction;
        let screen_start = (current as i64 * i64::from(release.viewport_extent))
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let delta = release.live_offset.saturating_sub(screen_start);

        if delta < 0 && current != 0 && delta.unsigned_abs() > threshold.unsigned_abs() {
            SettleDecision {
                target: current - 1,
                reason: SettleReason::Distance,
            }
        } else if delta > 0 && current != last && delta > threshold {
            SettleDecision {
                target: current + 1,
                reason: SettleReason::Distance,
            }
        } else {
            SettleDecision {
                target: current,
                reason: SettleReason::SnapBack,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decider() -> SettleDecider {
        SettleDecider::new(600.0, 4)
    }

    fn release(velocity: f32, current_screen: usize, live_offset: i32) -> ReleaseSnapshot {
        ReleaseSnapshot {
            velocity,
            current_screen,
            screen_count: 3,
            live_offset,
            viewport_extent: 300,
        }
    }

    #[test]
    fn fling_toward_end_advances_even_for_tiny_drags() {
        let decision = decider().decide(&release(-900.0, 0, 12));
        assert_eq!(
            decision,
            SettleDecision {
                target: 1,
                reason: SettleReason::Fling
            }
        );
    }

    #[test]
    fn fling_toward_start_goes_back() {
        let decision = decider().decide(&release(900.0, 2, 590));
        assert_eq!(decision.target, 1);
        assert_eq!(decision.reason, SettleReason::Fling);
    }

    #[test]
    fn fling_never_leaves_the_ends() {
        // Toward start on the first screen falls through to the distance rule.
        let decision = decider().decide(&release(5_000.0, 0, 0));
        assert_eq!(decision.target, 0);
        assert_eq!(decision.reason, SettleReason::SnapBack);

        let decision = decider().decide(&release(-5_000.0, 2, 600));
        assert_eq!(decision.target, 2);
        assert_eq!(decision.reason, SettleReason::SnapBack);
    }

    #[test]
    fn velocity_must_exceed_threshold() {
        let decision = decider().decide(&release(-600.0, 0, 20));
        assert_eq!(decision.reason, SettleReason::SnapBack);
    }

    #[test]
    fn quarter_viewport_drag_moves_on() {
        let decision = decider().decide(&release(0.0, 0, 100));
        assert_eq!(
            decision,
            SettleDecision {
                target: 1,
                reason: SettleReason::Distance
            }
        );

        let decision = decider().decide(&release(0.0, 1, 200));
        assert_eq!(decision.target, 0);
        assert_eq!(decision.reason, SettleReason::Distance);
    }

    #[test]
    fn exactly_a_quarter_snaps_back() {
        assert_eq!(decider().decide(&release(0.0, 0, 75)).target, 0);
        assert_eq!(decider().decide(&release(0.0, 0, 76)).target, 1);
        assert_eq!(decider().decide(&release(0.0, 1, 225)).target, 1);
        assert_eq!(decider().decide(&release(0.0, 1, 224)).target, 0);
    }

    #[test]
    fn short_drag_snaps_back() {
        let decision = decider().decide(&release(0.0, 0, 40));
        assert_eq!(
            decision,
            SettleDecision {
                target: 0,
                reason: SettleReason::SnapBack
            }
        );
    }

    #[test]
    fn distance_rule_respects_the_ends() {
        let mut at_last = release(0.0, 2, 600);
        at_last.live_offset = 700;
        assert_eq!(decider().decide(&at_last).target, 2);
    }

    #[test]
    fn zero_screens_settle_on_zero() {
        let empty = ReleaseSnapshot {
            velocity: -5_000.0,
            current_screen: 0,
            screen_count: 0,
            live_offset: 0,
            viewport_extent: 0,
        };
        assert_eq!(decider().decide(&empty).target, 0);
    }

    #[test]
    fn swipe_fraction_is_configurable() {
        let half = SettleDecider::new(600.0, 2);
        assert_eq!(half.decide(&release(0.0, 0, 140)).target, 0);
        assert_eq!(half.decide(&release(0.0, 0, 160)).target, 1);
    }
}
