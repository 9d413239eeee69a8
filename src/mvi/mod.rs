//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between a view-model and whatever renders it.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Engine ──→ Action ──→ Reducer ──→ State ──→ Observers
//!    ↑          │                                          │
//!    │          └── side effects (fetch, persist) ──┘      │
//!    └─────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot handed to observers
//! - **Intent**: Actions dispatched by the caller
//! - **Reducer**: Pure function that transforms state based on actions

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reduced, Reducer};
pub use state::ViewState;
