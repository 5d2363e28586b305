//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (&State, Intent) -> State
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// The previous state is only borrowed; it must stay observable
    /// unchanged by anyone still holding it. Must not fail and must not
    /// perform I/O.
    fn reduce(&self, state: &Self::State, intent: Self::Intent) -> Self::State;
}
