//! Model-View-Intent primitives used by dialog instances.
//!
//! ```text
//! surface event ──→ Reducer ──→ DialogState ──→ surface / caller
//!       ↑                                   │
//!       └───────────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of one live dialog instance
//! - **Intent**: a discrete event reported by the presentation surface
//! - **Reducer**: pure function from (state, intent) to the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
