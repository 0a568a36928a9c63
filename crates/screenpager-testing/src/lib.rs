//! Testing utilities and harness for ScreenPager

pub mod robot;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use screenpager_core::prelude::*;
}
