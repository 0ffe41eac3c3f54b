use crate::game::intent::GameIntent;
use crate::game::reducer::GameReducer;
use crate::game::state::GameState;
use crate::mvi::Reducer;

type Listener = Box<dyn Fn(&GameState) + Send>;

/// Explicit, injectable state container.
///
/// Exactly one instance exists per process; it is owned by the UI app and
/// passed by reference to the quiz controller. Intents are applied in
/// dispatch order, one at a time, so every listener and reader sees a
/// consistent snapshot.
pub struct GameStore {
    state: GameState,
    listeners: Vec<Listener>,
}

impl GameStore {
    pub fn new() -> Self {
        Self {
            state: GameState::default(),
            listeners: Vec::new(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one intent through the reducer and notifies subscribers.
    pub fn dispatch(&mut self, intent: GameIntent) {
        self.state = GameReducer::reduce(std::mem::take(&mut self.state), intent);
        for listener in &self.listeners {
            listener(&self.state);
        }
    }

    /// Registers a callback invoked after every dispatch.
    pub fn subscribe(&mut self, listener: impl Fn(&GameState) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn dispatch_applies_intents_in_order() {
        let mut store = GameStore::new();
        store.dispatch(GameIntent::SetCurrentQuestion(3));
        store.dispatch(GameIntent::SetCurrentQuestion(5));
        assert_eq!(store.state().current_question, 5);
    }

    #[test]
    fn subscribers_see_every_dispatch() {
        let mut store = GameStore::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(GameIntent::IncreaseScore);
        store.dispatch(GameIntent::ResetGame);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn subscribers_observe_the_post_dispatch_state() {
        let mut store = GameStore::new();
        let observed = Arc::new(AtomicUsize::new(usize::MAX));
        let slot = Arc::clone(&observed);
        store.subscribe(move |state| {
            slot.store(state.score as usize, Ordering::SeqCst);
        });

        store.dispatch(GameIntent::IncreaseScore);
        assert_eq!(observed.load(Ordering::SeqCst), 1);
    }
}
