use rand::Rng;

use crate::game::{GameIntent, GameStore};
use crate::quiz::state::QuizPhase;
use crate::shuffle::shuffled;
use crate::trivia::{Question, TriviaError};

/// Drives one question at a time: countdown, answer selection, scoring, and
/// advancement through the session.
///
/// The controller is clock-free. The UI runtime owns the wall clock and
/// translates it into [`tick_second`](Self::tick_second) and
/// [`finish_reveal`](Self::finish_reveal) calls, which keeps every transition
/// directly unit-testable.
///
/// Tie-break under the expiry/answer race: the first transition wins. Once an
/// answer is recorded the countdown freezes, so a tick landing inside the
/// reveal window is a no-op, as is a second selection.
pub struct QuizController {
    phase: QuizPhase,
    countdown_seconds: u32,
    questions_per_game: usize,
}

impl QuizController {
    pub fn new(countdown_seconds: u32, questions_per_game: usize) -> Self {
        Self {
            phase: QuizPhase::Loading,
            countdown_seconds,
            questions_per_game,
        }
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    /// Marks the fetch as in flight. Called on quiz entry and on retry.
    pub fn begin_fetch(&mut self, store: &mut GameStore) {
        self.phase = QuizPhase::Loading;
        store.dispatch(GameIntent::FetchStarted);
    }

    /// Resolves the fetch: success presents question 0, failure surfaces the
    /// error message and offers retry.
    pub fn on_fetch_resolved<R: Rng + ?Sized>(
        &mut self,
        store: &mut GameStore,
        result: Result<Vec<Question>, TriviaError>,
        rng: &mut R,
    ) {
        match result {
            Ok(questions) => {
                store.dispatch(GameIntent::FetchSucceeded(questions));
                self.present_current(store, rng);
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(error = %message, "question fetch failed");
                store.dispatch(GameIntent::FetchFailed(message.clone()));
                self.phase = QuizPhase::Errored { message };
            }
        }
    }

    /// One countdown decrement. Reaching zero advances the question without
    /// crediting score. Frozen while a reveal is pending.
    pub fn tick_second<R: Rng + ?Sized>(&mut self, store: &mut GameStore, rng: &mut R) {
        let QuizPhase::Presenting {
            remaining,
            selected: None,
            ..
        } = &mut self.phase
        else {
            return;
        };

        *remaining = remaining.saturating_sub(1);
        if *remaining == 0 {
            tracing::debug!(
                question = store.state().current_question,
                "countdown expired without an answer"
            );
            self.advance(store, rng);
        }
    }

    /// Records an answer selection. Returns true when the selection was
    /// accepted, so the caller can arm the reveal delay. A selection on an
    /// already-answered question is ignored.
    pub fn select(&mut self, store: &mut GameStore, index: usize) -> bool {
        let QuizPhase::Presenting {
            options,
            selected: selected @ None,
            ..
        } = &mut self.phase
        else {
            return false;
        };

        let Some(option) = options.get(index) else {
            return false;
        };

        let correct = store
            .state()
            .current()
            .is_some_and(|q| q.correct_answer == *option);

        *selected = Some(index);
        if correct {
            store.dispatch(GameIntent::IncreaseScore);
        }
        tracing::debug!(
            question = store.state().current_question,
            correct,
            "answer recorded"
        );
        true
    }

    /// Ends the reveal window: clears the selection, resets the countdown,
    /// and moves to the next question. No-op unless a reveal is pending.
    pub fn finish_reveal<R: Rng + ?Sized>(&mut self, store: &mut GameStore, rng: &mut R) {
        if self.phase.reveal_pending() {
            self.advance(store, rng);
        }
    }

    /// Whether the selected option at `index` matches the current question's
    /// correct answer. Used by the renderer for the highlight color.
    pub fn option_is_correct(&self, store: &GameStore, index: usize) -> bool {
        let QuizPhase::Presenting { options, .. } = &self.phase else {
            return false;
        };
        match (options.get(index), store.state().current()) {
            (Some(option), Some(question)) => question.correct_answer == *option,
            _ => false,
        }
    }

    fn advance<R: Rng + ?Sized>(&mut self, store: &mut GameStore, rng: &mut R) {
        let next = store.state().current_question + 1;
        store.dispatch(GameIntent::SetCurrentQuestion(next));
        self.present_current(store, rng);
    }

    fn present_current<R: Rng + ?Sized>(&mut self, store: &mut GameStore, rng: &mut R) {
        let state = store.state();

        // Session ends at the configured question count, or early when the
        // service returned a short batch.
        if state.current_question >= self.questions_per_game {
            self.phase = QuizPhase::Finished;
            return;
        }
        let Some(question) = state.current() else {
            tracing::warn!(
                fetched = state.questions.len(),
                index = state.current_question,
                "question batch exhausted early, finishing session"
            );
            self.phase = QuizPhase::Finished;
            return;
        };

        self.phase = QuizPhase::Presenting {
            options: shuffled(&question.options(), rng),
            remaining: self.countdown_seconds,
            selected: None,
        };
    }
}
