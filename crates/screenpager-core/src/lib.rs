//! Snapping screen pager for ScreenPager
//!
//! This crate provides the gesture and animation state machine behind a
//! container that shows one full-size screen at a time and pages between
//! screens with drags, flings and programmatic selection. It is host
//! agnostic: the host feeds measurement, pointer events and frame times, and
//! renders at [`Pager::scroll_offset`].

pub mod animation;
pub mod axis;
pub mod config;
pub mod drag;
pub mod error;
pub mod frame;
pub mod gesture;
pub mod input;
pub mod layout;
pub mod pager;
pub mod settle;
pub mod velocity;

pub use animation::{AnimationFrame, AnimationRun, Easing, ScrollAnimator, SnapDuration};
pub use axis::{AxisPolicy, Horizontal, Vertical};
pub use config::PagerConfig;
pub use error::PagerError;
pub use frame::{FrameScheduler, MonotonicClock};
pub use gesture::{GestureClassifier, GestureSample, TouchState};
pub use input::{Point, PointerEvent, PointerEventKind};
pub use layout::{IntRect, IntSize, MeasureSpec};
pub use pager::{HorizontalPager, Pager, PagerState, ScreenPlacements, VerticalPager};
pub use settle::{ReleaseSnapshot, SettleDecider, SettleDecision, SettleReason};
pub use velocity::ReleaseVelocityTracker;

pub mod prelude {
    pub use crate::axis::{Horizontal, Vertical};
    pub use crate::config::PagerConfig;
    pub use crate::input::PointerEvent;
    pub use crate::layout::{IntSize, MeasureSpec};
    pub use crate::pager::{HorizontalPager, Pager, VerticalPager};
    pub use crate::TouchState;
}
