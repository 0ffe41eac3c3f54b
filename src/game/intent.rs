use crate::mvi::Intent;
use crate::trivia::Question;

/// The closed set of game-state mutations.
///
/// Payloads are typed per variant; there is no generic action object.
#[derive(Debug, Clone)]
pub enum GameIntent {
    /// Move to question `n`. No bounds validation; the quiz controller is
    /// responsible for staying within the session.
    SetCurrentQuestion(usize),
    /// Credit one point. The controller invokes this at most once per
    /// question; the store enforces no upper bound.
    IncreaseScore,
    SetNickname(String),
    SetAvatarUrl(String),
    /// Restore every field to its initial default.
    ResetGame,
    FetchStarted,
    /// Replaces the question list wholesale.
    FetchSucceeded(Vec<Question>),
    /// Records the message; the question list is left unchanged.
    FetchFailed(String),
}

impl Intent for GameIntent {}
