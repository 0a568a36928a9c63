//! The pager component.
//!
//! [`Pager`] owns all mutable paging state and moves it through explicit
//! transitions: measure, layout, press, move, release, tick and programmatic
//! selection. The host drives it through a two-phase input protocol:
//!
//! 1. [`Pager::on_intercept_touch_event`] for events on their way to a
//!    child. Returning `true` means the pager takes the rest of the gesture;
//!    the host should cancel the child and route later events to phase 2.
//! 2. [`Pager::on_touch_event`] for events delivered to the pager itself.
//!
//! Animation is driven by [`Pager::tick`], which reports whether another
//! frame is needed; the registered [`FrameScheduler`] is also asked for one.

use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::animation::{AnimationRun, ScrollAnimator, SnapDuration};
use crate::axis::{AxisPolicy, Horizontal, Vertical};
use crate::config::PagerConfig;
use crate::drag::DragTracker;
use crate::error::PagerError;
use crate::frame::FrameScheduler;
use crate::gesture::{GestureClassifier, GestureSample, TouchState};
use crate::input::{PointerEvent, PointerEventKind};
use crate::layout::{IntRect, IntSize, MeasureSpec};
use crate::settle::{ReleaseSnapshot, SettleDecider};
use crate::velocity::ReleaseVelocityTracker;

/// A pager that pages left and right.
pub type HorizontalPager = Pager<Horizontal>;

/// A pager that pages up and down.
pub type VerticalPager = Pager<Vertical>;

/// Screen placements returned by [`Pager::layout`].
pub type ScreenPlacements = SmallVec<[IntRect; 4]>;

/// Observable paging state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PagerState {
    /// Last settled screen. Never a mid-drag or mid-animation value.
    pub current_screen: usize,
    /// Destination of the running snap, if any.
    pub pending_screen: Option<usize>,
    /// Scroll offset along the paging axis, in pixels.
    pub live_offset: i32,
    pub viewport_extent: i32,
    pub touch_state: TouchState,
}

pub struct Pager<A: AxisPolicy> {
    config: PagerConfig,
    state: PagerState,
    classifier: GestureClassifier,
    decider: SettleDecider,
    animator: ScrollAnimator,
    velocity: ReleaseVelocityTracker,
    reference: GestureSample,
    /// Down event of the gesture in progress.
    press: Option<PointerEvent>,
    screens: Vec<IntSize>,
    measured: Option<IntSize>,
    last_layout: Option<IntSize>,
    /// Screen to show on first layout.
    first_layout_screen: Option<usize>,
    on_screen_switched: Option<Box<dyn FnMut(usize)>>,
    frame_scheduler: Option<Box<dyn FrameScheduler>>,
    _axis: PhantomData<A>,
}

impl<A: AxisPolicy> Pager<A> {
    pub fn new(config: PagerConfig) -> Result<Self, PagerError> {
        config.validate()?;
        Ok(Self {
            classifier: GestureClassifier::new(config.scaled_touch_slop()),
            decider: SettleDecider::new(
                config.density_adjusted_snap_velocity(),
                config.swipe_fraction,
            ),
            animator: ScrollAnimator::new(config.easing),
            first_layout_screen: Some(config.initial_screen),
            config,
            state: PagerState::default(),
            velocity: ReleaseVelocityTracker::new(),
            reference: GestureSample::default(),
            press: None,
            screens: Vec::new(),
            measured: None,
            last_layout: None,
            on_screen_switched: None,
            frame_scheduler: None,
            _axis: PhantomData,
        })
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    /// Last settled screen.
    pub fn current_screen(&self) -> usize {
        self.state.current_screen
    }

    pub fn pending_screen(&self) -> Option<usize> {
        self.state.pending_screen
    }

    pub fn scroll_offset(&self) -> i32 {
        self.state.live_offset
    }

    pub fn viewport_extent(&self) -> i32 {
        self.state.viewport_extent
    }

    pub fn touch_state(&self) -> TouchState {
        self.state.touch_state
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// The snap in flight, if any.
    pub fn animation(&self) -> Option<&AnimationRun> {
        self.animator.run()
    }

    /// Sum of all screen extents along the paging axis.
    pub fn content_extent(&self) -> i32 {
        let total: i64 = self
            .screens
            .iter()
            .map(|size| i64::from(A::extent(*size).max(0)))
            .sum();
        total.min(i64::from(i32::MAX)) as i32
    }

    /// Registers the settle observer, replacing any previous one.
    pub fn set_on_screen_switch_listener(&mut self, listener: impl FnMut(usize) + 'static) {
        self.on_screen_switched = Some(Box::new(listener));
    }

    pub fn clear_on_screen_switch_listener(&mut self) {
        self.on_screen_switched = None;
    }

    pub fn set_frame_scheduler(&mut self, scheduler: impl FrameScheduler + 'static) {
        self.frame_scheduler = Some(Box::new(scheduler));
    }

    // ------------------------------------------------------------------
    // Measure and layout
    // ------------------------------------------------------------------

    /// Accepts the viewport size. Both dimensions must be exact.
    pub fn measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<IntSize, PagerError> {
        let width = width
            .exact_size()
            .ok_or(PagerError::InexactMeasureSpec { dimension: "width" })?;
        let height = height
            .exact_size()
            .ok_or(PagerError::InexactMeasureSpec {
                dimension: "height",
            })?;
        let size = IntSize::new(width, height);
        self.measured = Some(size);
        Ok(size)
    }

    /// Takes the measured size of every screen and places them end to end.
    ///
    /// The first layout jumps to the initial screen. A later change of the
    /// viewport's paging-axis extent animates to the same screen at its new
    /// offset.
    pub fn layout(&mut self, screens: &[IntSize]) -> Result<ScreenPlacements, PagerError> {
        let viewport = self.measured.ok_or(PagerError::NotMeasured)?;
        self.screens.clear();
        self.screens.extend_from_slice(screens);

        let viewport_extent = A::extent(viewport);
        self.state.viewport_extent = viewport_extent;
        match self.last_layout.replace(viewport) {
            None => self.on_first_layout(),
            Some(previous) if A::extent(previous) != viewport_extent => {
                self.on_viewport_axis_changed(A::extent(previous))
            }
            Some(_) => self.on_screens_changed(),
        }
        Ok(self.placements())
    }

    /// Where each screen goes in content coordinates.
    pub fn placements(&self) -> ScreenPlacements {
        let mut start = 0i32;
        self.screens
            .iter()
            .map(|size| {
                let rect = A::place(start, *size);
                start = start.saturating_add(A::extent(*size));
                rect
            })
            .collect()
    }

    fn has_laid_out(&self) -> bool {
        self.last_layout.is_some()
    }

    fn on_first_layout(&mut self) {
        let requested = self
            .first_layout_screen
            .take()
            .unwrap_or(self.state.current_screen);
        self.state.current_screen = self.clamp_screen(requested);
        self.state.pending_screen = None;
        self.state.live_offset = self.screen_offset(self.state.current_screen);
        log::debug!(
            "{} pager first layout: {} screens, viewport {}, screen {}",
            A::NAME,
            self.screens.len(),
            self.state.viewport_extent,
            self.state.current_screen
        );
    }

    fn on_viewport_axis_changed(&mut self, previous_extent: i32) {
        self.reclamp();
        if self.state.touch_state == TouchState::ScrollingPrimary {
            // The release settles against the new viewport.
            log::debug!(
                "{} pager viewport changed {} -> {} during a drag",
                A::NAME,
                previous_extent,
                self.state.viewport_extent
            );
            return;
        }
        let target = self
            .state
            .pending_screen
            .unwrap_or(self.state.current_screen);
        log::debug!(
            "{} pager viewport changed {} -> {}, realigning on screen {}",
            A::NAME,
            previous_extent,
            self.state.viewport_extent,
            target
        );
        self.snap_to_screen(target);
    }

    fn on_screens_changed(&mut self) {
        self.reclamp();
        if !self.has_laid_out() {
            return;
        }
        let running_target = self.animator.run().map(|run| run.target_offset);
        if let (Some(pending), Some(target_offset)) = (self.state.pending_screen, running_target) {
            if target_offset != self.screen_offset(pending) {
                log::debug!(
                    "{} pager screens changed, retargeting snap to screen {}",
                    A::NAME,
                    pending
                );
                self.snap_to_screen(pending);
            }
            return;
        }
        if self.animator.is_running() || self.state.touch_state != TouchState::Rest {
            return;
        }
        let settled = self.screen_offset(self.state.current_screen);
        if self.state.live_offset != settled {
            log::debug!(
                "{} pager screens changed, jumping to screen {}",
                A::NAME,
                self.state.current_screen
            );
            self.state.live_offset = settled;
            self.request_frame();
        }
    }

    // ------------------------------------------------------------------
    // Screen management
    // ------------------------------------------------------------------

    pub fn add_screen(&mut self, size: IntSize) {
        self.screens.push(size);
        self.on_screens_changed();
    }

    /// Inserts a screen; indices past the end append.
    pub fn insert_screen(&mut self, index: usize, size: IntSize) {
        let index = index.min(self.screens.len());
        self.screens.insert(index, size);
        self.on_screens_changed();
    }

    pub fn remove_screen(&mut self, index: usize) -> Option<IntSize> {
        if index >= self.screens.len() {
            return None;
        }
        let removed = self.screens.remove(index);
        self.on_screens_changed();
        Some(removed)
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Phase one: classify an event headed for a child.
    ///
    /// Returns `true` once the gesture is a primary-axis scroll; from then
    /// on the host should deliver the gesture to [`Pager::on_touch_event`].
    /// A secondary-axis scroll is left to the child for the whole gesture,
    /// and its release does not settle the pager. A down during a running
    /// snap stops it without notifying and claims the gesture.
    pub fn on_intercept_touch_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_press(event),
            PointerEventKind::Move => {
                let primary = A::primary(event.position);
                let secondary = A::secondary(event.position);
                self.velocity.add_position(event.uptime_millis, primary);
                self.state.touch_state = self.classifier.classify_move(
                    self.state.touch_state,
                    &mut self.reference,
                    primary,
                    secondary,
                );
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.state.touch_state == TouchState::ScrollingPrimary {
                    self.on_release(event);
                } else {
                    // The child kept this gesture; the pager never moved.
                    self.press = None;
                    self.state.touch_state = TouchState::Rest;
                    self.velocity.reset();
                }
            }
        }
        GestureClassifier::intercepts(self.state.touch_state)
    }

    /// Phase two: handle an event delivered to the pager.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_press(event),
            PointerEventKind::Move => {
                let primary = A::primary(event.position);
                self.velocity.add_position(event.uptime_millis, primary);
                self.state.touch_state =
                    self.classifier
                        .commit_primary(self.state.touch_state, &self.reference, primary);
                if self.state.touch_state == TouchState::ScrollingPrimary {
                    let delta = DragTracker::take_delta(&mut self.reference, primary);
                    self.drag_by(delta);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_release(event),
        }
        true
    }

    /// Starts a gesture.
    ///
    /// A press that stops a running snap drops its pending screen: the
    /// pager keeps the live offset, and the snap that stopped never reports
    /// through the screen switch listener. Only the settle after this
    /// gesture's release does.
    fn on_press(&mut self, event: &PointerEvent) {
        // Hosts deliver a down to both phases when no child takes it.
        if self.press.as_ref() == Some(event) {
            return;
        }
        self.press = Some(*event);

        let primary = A::primary(event.position);
        let secondary = A::secondary(event.position);
        self.reference = GestureSample::new(primary, secondary, event.uptime_millis);
        self.velocity.reset();
        self.velocity.add_position(event.uptime_millis, primary);

        if let Some(run) = self.animator.abort() {
            let interrupted = self.state.pending_screen.take();
            log::debug!(
                "{} pager press stopped snap toward {:?} at offset {} (target {})",
                A::NAME,
                interrupted,
                self.state.live_offset,
                run.target_offset
            );
            self.state.touch_state = TouchState::ScrollingPrimary;
        } else {
            self.state.touch_state = TouchState::Rest;
        }
    }

    fn on_release(&mut self, event: &PointerEvent) {
        self.press = None;
        let released = std::mem::replace(&mut self.state.touch_state, TouchState::Rest);
        if released.is_scrolling() {
            let primary = A::primary(event.position);
            self.velocity.add_position(event.uptime_millis, primary);

            let velocity = match event.kind {
                PointerEventKind::Up => self
                    .velocity
                    .release_velocity(self.config.scaled_max_fling_velocity()),
                _ => 0.0,
            };
            let snapshot = ReleaseSnapshot {
                velocity,
                current_screen: self.state.current_screen,
                screen_count: self.screens.len(),
                live_offset: self.state.live_offset,
                viewport_extent: self.state.viewport_extent,
            };
            let decision = match event.kind {
                PointerEventKind::Up => self.decider.decide(&snapshot),
                _ => self.decider.decide_by_distance(&snapshot),
            };
            log::debug!(
                "{} pager released {:?} at offset {} with velocity {:.0}: {:?} -> screen {}",
                A::NAME,
                released,
                snapshot.live_offset,
                velocity,
                decision.reason,
                decision.target
            );
            self.snap_to_screen(decision.target);
        }
        self.velocity.reset();
    }

    fn drag_by(&mut self, delta: i32) {
        let tracker = DragTracker::new(self.content_extent(), self.state.viewport_extent);
        let offset = tracker.apply(self.state.live_offset, delta);
        log::trace!(
            "{} pager drag {} -> offset {}",
            A::NAME,
            delta,
            offset
        );
        if offset != self.state.live_offset {
            self.state.live_offset = offset;
            self.request_frame();
        }
    }

    // ------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------

    /// Advances the running snap to `frame_time_nanos`.
    ///
    /// Returns `true` while more frames are needed. The finishing frame
    /// settles the pager and notifies the observer after the offset has
    /// reached the target.
    pub fn tick(&mut self, frame_time_nanos: u64) -> bool {
        let Some(frame) = self.animator.sample(frame_time_nanos) else {
            return false;
        };
        self.state.live_offset = frame.offset;
        if frame.finished {
            self.finish_snap();
            false
        } else {
            self.request_frame();
            true
        }
    }

    fn finish_snap(&mut self) {
        let Some(pending) = self.state.pending_screen.take() else {
            return;
        };
        let settled = self.clamp_screen(pending);
        self.state.current_screen = settled;
        log::debug!(
            "{} pager settled on screen {} at offset {}",
            A::NAME,
            settled,
            self.state.live_offset
        );
        if let Some(listener) = self.on_screen_switched.as_mut() {
            listener(settled);
        }
    }

    /// Animates to `screen` over a distance-derived duration.
    pub fn snap_to_screen(&mut self, screen: usize) {
        self.snap_to_screen_with_duration(screen, SnapDuration::Auto);
    }

    /// Animates to `screen`, replacing any snap in flight.
    ///
    /// The index is clamped to the screen range. With no screens this does
    /// nothing.
    pub fn snap_to_screen_with_duration(
        &mut self,
        screen: usize,
        duration: impl Into<SnapDuration>,
    ) {
        if self.screens.is_empty() {
            log::debug!("{} pager has no screens to snap to", A::NAME);
            return;
        }
        let target = self.clamp_screen(screen);
        let start_offset = self.state.live_offset;
        let target_offset = self.screen_offset(target);
        let delta = target_offset.saturating_sub(start_offset);
        let duration_millis = match duration.into() {
            SnapDuration::Auto => A::auto_duration_millis(
                delta,
                self.state.viewport_extent,
                self.config.base_duration_millis,
            ),
            SnapDuration::Millis(millis) => millis,
        };

        self.state.pending_screen = Some(target);
        self.animator.start(start_offset, target_offset, duration_millis);
        log::debug!(
            "{} pager snapping to screen {}: {} -> {} over {}ms",
            A::NAME,
            target,
            start_offset,
            target_offset,
            duration_millis
        );
        self.request_frame();
    }

    /// Selects `screen`, clamped to the screen range.
    ///
    /// Without animation the jump is immediate and silent. With animation
    /// the pager snaps over the default duration and `current_screen`
    /// changes, with one notification, when the snap lands.
    pub fn set_current_screen(&mut self, screen: usize, animate: bool) {
        if !self.has_laid_out() {
            self.first_layout_screen = Some(screen);
            self.state.current_screen = self.clamp_screen(screen);
            return;
        }
        let screen = self.clamp_screen(screen);
        if animate {
            self.snap_to_screen_with_duration(
                screen,
                SnapDuration::Millis(self.config.base_duration_millis),
            );
            return;
        }

        self.animator.abort();
        self.state.pending_screen = None;
        self.state.current_screen = screen;
        let offset = self.screen_offset(screen);
        if offset != self.state.live_offset {
            self.state.live_offset = offset;
            self.request_frame();
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn clamp_screen(&self, screen: usize) -> usize {
        screen.min(self.screens.len().saturating_sub(1))
    }

    fn reclamp(&mut self) {
        self.state.current_screen = self.clamp_screen(self.state.current_screen);
        self.state.pending_screen = self
            .state
            .pending_screen
            .map(|pending| self.clamp_screen(pending));
    }

    fn screen_offset(&self, screen: usize) -> i32 {
        let offset = screen as i64 * i64::from(self.state.viewport_extent);
        offset.clamp(0, i64::from(i32::MAX)) as i32
    }

    fn request_frame(&mut self) {
        if let Some(scheduler) = self.frame_scheduler.as_mut() {
            scheduler.request_frame();
        }
    }
}

impl<A: AxisPolicy> fmt::Debug for Pager<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("axis", &A::NAME)
            .field("state", &self.state)
            .field("screens", &self.screens.len())
            .field("animation", &self.animator.run())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/pager_tests.rs"]
mod tests;
