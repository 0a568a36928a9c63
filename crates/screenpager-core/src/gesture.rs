//! Gesture classification.
//!
//! Decides whether a gesture belongs to the pager (primary axis) or to a
//! child scrolling across it (secondary axis). A primary commitment means
//! every later move is intercepted; a secondary one hands the rest of the
//! gesture to the child.

/// Touch state of the current gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TouchState {
    /// No scroll direction committed yet, or no gesture at all.
    #[default]
    Rest,
    /// Scrolling along the pager's own axis.
    ScrollingPrimary,
    /// Scrolling across the pager's axis; a child owns the gesture.
    ScrollingOther,
}

impl TouchState {
    /// Whether release from this state settles the pager.
    pub fn is_scrolling(self) -> bool {
        !matches!(self, TouchState::Rest)
    }
}

/// Reference pointer position, split by axis.
///
/// Deltas are measured against it; it moves when a direction commits and,
/// while dragging, on every move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    pub primary: f32,
    pub secondary: f32,
    pub uptime_millis: i64,
}

impl GestureSample {
    pub fn new(primary: f32, secondary: f32, uptime_millis: i64) -> Self {
        Self {
            primary,
            secondary,
            uptime_millis,
        }
    }
}

/// Slop-based direction classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureClassifier {
    touch_slop: f32,
}

impl GestureClassifier {
    pub fn new(touch_slop: f32) -> Self {
        Self { touch_slop }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// Intercept-phase classification of a move.
    ///
    /// Only classifies while at rest. Both axes are checked on every move;
    /// if both cross the slop in the same event the secondary axis wins
    /// because it is checked last. A committed axis moves its reference to
    /// the new coordinate.
    pub fn classify_move(
        &self,
        state: TouchState,
        reference: &mut GestureSample,
        primary: f32,
        secondary: f32,
    ) -> TouchState {
        if state != TouchState::Rest {
            return state;
        }

        let mut next = state;
        if self.exceeds_slop(reference.primary, primary) {
            next = TouchState::ScrollingPrimary;
            reference.primary = primary;
        }
        if self.exceeds_slop(reference.secondary, secondary) {
            next = TouchState::ScrollingOther;
            reference.secondary = secondary;
        }
        next
    }

    /// Handle-phase commitment, primary axis only.
    ///
    /// The reference is left alone so the distance covered while inside the
    /// slop becomes part of the first drag delta.
    pub fn commit_primary(
        &self,
        state: TouchState,
        reference: &GestureSample,
        primary: f32,
    ) -> TouchState {
        if state == TouchState::Rest && self.exceeds_slop(reference.primary, primary) {
            TouchState::ScrollingPrimary
        } else {
            state
        }
    }

    /// Whether the pager takes the remaining events of the gesture.
    pub fn intercepts(state: TouchState) -> bool {
        state == TouchState::ScrollingPrimary
    }

    fn exceeds_slop(&self, from: f32, to: f32) -> bool {
        (to - from).abs() > self.touch_slop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> GestureClassifier {
        GestureClassifier::new(8.0)
    }

    #[test]
    fn small_moves_stay_at_rest() {
        let mut reference = GestureSample::new(100.0, 100.0, 0);
        let state = classifier().classify_move(TouchState::Rest, &mut reference, 106.0, 95.0);
        assert_eq!(state, TouchState::Rest);
        assert_eq!(reference, GestureSample::new(100.0, 100.0, 0));
    }

    #[test]
    fn slop_is_exclusive() {
        let mut reference = GestureSample::new(100.0, 100.0, 0);
        let state = classifier().classify_move(TouchState::Rest, &mut reference, 108.0, 100.0);
        assert_eq!(state, TouchState::Rest);
    }

    #[test]
    fn primary_motion_commits_and_moves_reference() {
        let mut reference = GestureSample::new(100.0, 100.0, 0);
        let state = classifier().classify_move(TouchState::Rest, &mut reference, 85.0, 102.0);
        assert_eq!(state, TouchState::ScrollingPrimary);
        assert_eq!(reference.primary, 85.0);
        assert_eq!(reference.secondary, 100.0);
        assert!(GestureClassifier::intercepts(state));
    }

    #[test]
    fn secondary_motion_hands_gesture_to_child() {
        let mut reference = GestureSample::new(100.0, 100.0, 0);
        let state = classifier().classify_move(TouchState::Rest, &mut reference, 103.0, 130.0);
        assert_eq!(state, TouchState::ScrollingOther);
        assert_eq!(reference.secondary, 130.0);
        assert!(!GestureClassifier::intercepts(state));
    }

    #[test]
    fn secondary_wins_a_tie() {
        let mut reference = GestureSample::new(100.0, 100.0, 0);
        let state = classifier().classify_move(TouchState::Rest, &mut reference, 130.0, 130.0);
        assert_eq!(state, TouchState::ScrollingOther);
        // Both references moved; the primary check still ran.
        assert_eq!(reference.primary, 130.0);
        assert_eq!(reference.secondary, 130.0);
    }

    #[test]
    fn committed_state_is_sticky() {
        let mut reference = GestureSample::new(100.0, 100.0, 0);
        let state =
            classifier().classify_move(TouchState::ScrollingOther, &mut reference, 10.0, 100.0);
        assert_eq!(state, TouchState::ScrollingOther);
        let state =
            classifier().classify_move(TouchState::ScrollingPrimary, &mut reference, 100.0, 10.0);
        assert_eq!(state, TouchState::ScrollingPrimary);
        assert_eq!(reference, GestureSample::new(100.0, 100.0, 0));
    }

    #[test]
    fn handle_phase_commit_keeps_reference() {
        let reference = GestureSample::new(100.0, 100.0, 0);
        assert_eq!(
            classifier().commit_primary(TouchState::Rest, &reference, 95.0),
            TouchState::Rest
        );
        assert_eq!(
            classifier().commit_primary(TouchState::Rest, &reference, 90.0),
            TouchState::ScrollingPrimary
        );
        assert_eq!(
            classifier().commit_primary(TouchState::ScrollingOther, &reference, 10.0),
            TouchState::ScrollingOther
        );
    }

    #[test]
    fn only_scrolling_states_settle() {
        assert!(!TouchState::Rest.is_scrolling());
        assert!(TouchState::ScrollingPrimary.is_scrolling());
        assert!(TouchState::ScrollingOther.is_scrolling());
    }
}
