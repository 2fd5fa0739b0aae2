//! Search feature: the profile screen's input field and fetch lifecycle.
//!
//! - `state.rs` - raw input text and [`FetchState`]
//! - `intent.rs` - editing, submit and fetch resolution
//! - `reducer.rs` - validation, canonicalization and last-submit-wins

mod intent;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{FetchState, SearchState};
