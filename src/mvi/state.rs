//! Base trait for view state in MVI architecture.

/// Marker trait for view state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable across tasks, since one snapshot goes to many observers
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
