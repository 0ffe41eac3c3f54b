//! Model-View-Intent primitives.
//!
//! The game store and the dialog states on the welcome screen all follow the
//! same unidirectional flow: an intent is dispatched, a pure reducer produces
//! the next state, and the view renders from that state.

/// Marker trait for state objects.
///
/// States should be immutable (clone to create new ones), self-contained, and
/// comparable so that change detection stays cheap.
pub trait State: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
///
/// Intents represent user actions (key presses), system events (fetch
/// results, timer expiry), and navigation events.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It must be a
/// pure function: (State, Intent) -> State.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
