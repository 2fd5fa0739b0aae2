//! Card flip interaction.
//!
//! Two rest positions: front (0°) and back (180°). A toggle starts a timed
//! transition between them; the tick that completes it also flips
//! `is_flipped`, so state and picture settle together.
//!
//! - `state.rs` - angle, rest side, in-flight transition, face projections
//! - `intent.rs` - toggle request and animation ticks
//! - `reducer.rs` - transition start, re-entrancy guard, completion

mod intent;
mod reducer;
mod state;

pub use intent::FlipIntent;
pub use reducer::FlipReducer;
pub use state::{CardProjection, FaceProjection, FlipState, BACK_ANGLE, FRONT_ANGLE};
