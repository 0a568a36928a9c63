//! Robot testing framework for pager gestures
//!
//! This module provides a robot-style testing API that allows developers to:
//! - Lay out a pager with a given viewport and screen count
//! - Perform interactions (presses, moves, drags, cancels)
//! - Pump animation frames on a manual clock
//! - Assert on settled screens, notifications and frame requests
//!
//! # Example
//!
//! ```
//! use screenpager_core::{Horizontal, IntSize};
//! use screenpager_testing::PagerRobot;
//!
//! let mut robot = PagerRobot::<Horizontal>::new(IntSize::new(300, 200), 3).unwrap();
//!
//! // Drag the content left by 100px, slowly.
//! robot.drag((200.0, 100.0), (100.0, 100.0), 10, 30);
//!
//! // Let the snap finish.
//! robot.run_animation_to_idle();
//! assert_eq!(robot.current_screen(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use screenpager_core::{
    AxisPolicy, IntSize, MeasureSpec, Pager, PagerConfig, PagerError, Point, PointerEvent,
    PointerEventKind, ScreenPlacements,
};

/// Frame interval of the manual clock.
pub const FRAME_INTERVAL_MILLIS: i64 = 16;

/// Upper bound on frames pumped by [`PagerRobot::run_animation_to_idle`].
const MAX_FRAMES: usize = 10_000;

/// Drives a [`Pager`] the way a host would.
///
/// Events are routed with the two-phase protocol. Without a child target a
/// down goes to both phases and the rest of the gesture to the pager itself.
/// With a child target every event passes the intercept phase until the
/// pager claims the gesture, after which the pager receives it directly.
pub struct PagerRobot<A: AxisPolicy> {
    pager: Pager<A>,
    viewport: IntSize,
    now_millis: i64,
    pointer: Point,
    child_target: bool,
    pager_owns_gesture: bool,
    switched_screens: Rc<RefCell<Vec<usize>>>,
    frame_requests: Rc<Cell<usize>>,
}

impl<A: AxisPolicy> PagerRobot<A> {
    /// Lays out `screen_count` viewport-sized screens with the default
    /// configuration.
    pub fn new(viewport: IntSize, screen_count: usize) -> Result<Self, PagerError> {
        Self::with_config(PagerConfig::default(), viewport, screen_count)
    }

    pub fn with_config(
        config: PagerConfig,
        viewport: IntSize,
        screen_count: usize,
    ) -> Result<Self, PagerError> {
        let mut pager = Pager::new(config)?;

        let switched_screens = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&switched_screens);
        pager.set_on_screen_switch_listener(move |screen| sink.borrow_mut().push(screen));

        let frame_requests = Rc::new(Cell::new(0));
        let counter = Rc::clone(&frame_requests);
        pager.set_frame_scheduler(move || counter.set(counter.get() + 1));

        let mut robot = Self {
            pager,
            viewport,
            now_millis: 0,
            pointer: Point::default(),
            child_target: false,
            pager_owns_gesture: false,
            switched_screens,
            frame_requests,
        };
        robot.relayout(screen_count)?;
        Ok(robot)
    }

    /// Routes gestures as if a child sat under the pointer.
    pub fn with_child_target(mut self) -> Self {
        self.child_target = true;
        self
    }

    pub fn pager(&self) -> &Pager<A> {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager<A> {
        &mut self.pager
    }

    pub fn current_screen(&self) -> usize {
        self.pager.current_screen()
    }

    pub fn scroll_offset(&self) -> i32 {
        self.pager.scroll_offset()
    }

    pub fn now_millis(&self) -> i64 {
        self.now_millis
    }

    /// Every screen the pager reported settling on, in order.
    pub fn switched_screens(&self) -> Vec<usize> {
        self.switched_screens.borrow().clone()
    }

    pub fn frame_requests(&self) -> usize {
        self.frame_requests.get()
    }

    /// Whether the pager took over the current gesture from the child.
    pub fn pager_owns_gesture(&self) -> bool {
        self.pager_owns_gesture
    }

    /// Advance the manual clock without delivering anything.
    pub fn advance_millis(&mut self, millis: i64) {
        self.now_millis += millis;
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
        self.dispatch(PointerEventKind::Down);
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
        self.dispatch(PointerEventKind::Move);
    }

    /// Lifts the pointer where it last was.
    pub fn release(&mut self) {
        self.dispatch(PointerEventKind::Up);
    }

    pub fn cancel(&mut self) {
        self.dispatch(PointerEventKind::Cancel);
    }

    /// Press at `from`, move to `to` in `steps` evenly spaced moves
    /// `step_millis` apart, then release without pausing.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: u32, step_millis: i64) {
        self.press(from.0, from.1);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.advance_millis(step_millis);
            self.move_to(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
        }
        self.release();
    }

    /// Advances one frame and ticks the pager. Returns whether more frames
    /// are needed.
    pub fn frame(&mut self) -> bool {
        self.advance_millis(FRAME_INTERVAL_MILLIS);
        self.pager.tick(self.frame_time_nanos())
    }

    /// Pump frames until the pager is idle.
    ///
    /// Returns the offset after every frame.
    pub fn run_animation_to_idle(&mut self) -> Vec<i32> {
        let mut offsets = Vec::new();
        for _ in 0..MAX_FRAMES {
            let more = self.frame();
            offsets.push(self.pager.scroll_offset());
            if !more {
                return offsets;
            }
        }
        log::warn!("animation still running after {MAX_FRAMES} frames");
        offsets
    }

    /// Simulates a viewport resize; screens follow the viewport size.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<ScreenPlacements, PagerError> {
        self.viewport = IntSize::new(width, height);
        let count = self.pager.screen_count();
        self.relayout(count)
    }

    fn relayout(&mut self, screen_count: usize) -> Result<ScreenPlacements, PagerError> {
        self.pager.measure(
            MeasureSpec::Exactly(self.viewport.width),
            MeasureSpec::Exactly(self.viewport.height),
        )?;
        self.pager.layout(&vec![self.viewport; screen_count])
    }

    fn frame_time_nanos(&self) -> u64 {
        u64::try_from(self.now_millis).unwrap_or(0) * 1_000_000
    }

    fn dispatch(&mut self, kind: PointerEventKind) {
        let event = PointerEvent::new(kind, self.pointer, self.now_millis);
        if !self.child_target {
            if kind == PointerEventKind::Down {
                self.pager.on_intercept_touch_event(&event);
            }
            self.pager.on_touch_event(&event);
            return;
        }

        if kind == PointerEventKind::Down {
            self.pager_owns_gesture = false;
        }
        if self.pager_owns_gesture {
            self.pager.on_touch_event(&event);
        } else if self.pager.on_intercept_touch_event(&event) {
            log::debug!("pager took the gesture from the child at {:?}", self.pointer);
            self.pager_owns_gesture = true;
        }
    }
}
