//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (add to cart, change a quantity)
/// - System events (a fetch completing or failing)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
