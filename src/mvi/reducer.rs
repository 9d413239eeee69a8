//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::ViewState;

/// Outcome of feeding one intent through a reducer.
///
/// `Ignored` carries the untouched input state back so callers never have
/// to clone before reducing. Only `Applied` outcomes are published.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduced<S> {
    /// The intent was accepted and produced this state.
    Applied(S),
    /// The intent does not apply to the current state.
    Ignored(S),
}

impl<S> Reduced<S> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Unwraps the state regardless of outcome.
    pub fn into_state(self) -> S {
        match self {
            Self::Applied(state) | Self::Ignored(state) => state,
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ViewState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Reduced<Self::State>;

    /// Reduce a sequence of intents left to right, starting from `state`.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents
            .into_iter()
            .fold(state, |state, intent| Self::reduce(state, intent).into_state())
    }
}
