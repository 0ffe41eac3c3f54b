use crate::mvi::State;
use crate::trivia::Question;

/// Lifecycle of the trivia question request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Single source of truth for one game session.
///
/// Mutated only through [`GameIntent`](crate::game::GameIntent) dispatches;
/// the reducer applies each intent atomically, so readers never observe a
/// half-applied transition.
///
/// Invariants maintained by callers (the store itself does not validate):
/// `current_question` never exceeds `questions.len()` by more than the final
/// advancement, and `score` never exceeds the number of questions answered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameState {
    pub questions: Vec<Question>,
    pub current_question: usize,
    pub score: u32,
    pub fetch_status: FetchStatus,
    pub error: Option<String>,
    pub nickname: String,
    pub avatar_url: String,
}

impl State for GameState {}

impl GameState {
    /// The question currently being played, if one exists at the index.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_question)
    }
}
