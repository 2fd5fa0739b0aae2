//! Model-View-Intent (MVI) primitives for the screens.
//!
//! ```text
//! key / fetch / tick ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                                  │
//!        └──────────────────────────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything with a side effect (issuing a fetch) is done
//! by the owning screen around the dispatch call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
