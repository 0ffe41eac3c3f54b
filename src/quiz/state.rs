/// Phase of the quiz screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Waiting for the question fetch to resolve.
    #[default]
    Loading,
    /// One question on screen with a running countdown.
    Presenting {
        /// Shuffled answer options for the current question.
        options: Vec<String>,
        /// Seconds left on the countdown.
        remaining: u32,
        /// Index into `options` once the player has answered. While set, the
        /// countdown is frozen and further input is ignored.
        selected: Option<usize>,
    },
    /// The fetch failed; the player may retry.
    Errored { message: String },
    /// The session is over; control moves to the score screen.
    Finished,
}

impl QuizPhase {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// True while an answer highlight is on screen awaiting advancement.
    pub fn reveal_pending(&self) -> bool {
        matches!(
            self,
            Self::Presenting {
                selected: Some(_),
                ..
            }
        )
    }
}
