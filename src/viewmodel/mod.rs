//! Cart view-model.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `intent.rs` - Caller intents
//! - `reducer.rs` - Reducer actions and state transitions
//! - `state.rs` - Published snapshot enum
//! - `engine.rs` - Side effects, one intent at a time
//! - `publisher.rs` - Latest-value broadcast to observers
//! - `handle.rs` - Spawned worker and the caller-facing handle

mod engine;
mod handle;
mod intent;
mod publisher;
mod reducer;
mod state;

pub use engine::{CartEngine, EngineOptions};
pub use handle::CartViewModel;
pub use intent::CartIntent;
pub use publisher::{StatePublisher, StateSubscription, MAX_CHANNEL_CAPACITY};
pub use reducer::{CartAction, CartReducer};
pub use state::CartState;
