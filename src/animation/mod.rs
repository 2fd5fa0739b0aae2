//! Timed value transitions, independent of any render loop.

mod easing;
mod transition;

pub use easing::Easing;
pub use transition::{Transition, TransitionStep};
