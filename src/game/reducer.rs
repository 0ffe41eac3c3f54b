use crate::game::intent::GameIntent;
use crate::game::state::{FetchStatus, GameState};
use crate::mvi::Reducer;

pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameIntent::SetCurrentQuestion(n) => GameState {
                current_question: n,
                ..state
            },
            GameIntent::IncreaseScore => GameState {
                score: state.score + 1,
                ..state
            },
            GameIntent::SetNickname(nickname) => GameState { nickname, ..state },
            GameIntent::SetAvatarUrl(avatar_url) => GameState { avatar_url, ..state },
            GameIntent::ResetGame => GameState::default(),
            GameIntent::FetchStarted => GameState {
                fetch_status: FetchStatus::Loading,
                error: None,
                ..state
            },
            GameIntent::FetchSucceeded(questions) => GameState {
                fetch_status: FetchStatus::Success,
                questions,
                ..state
            },
            GameIntent::FetchFailed(message) => GameState {
                fetch_status: FetchStatus::Error,
                error: Some(message),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia::{Question, QuestionText};

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            category: "general".to_string(),
            question: QuestionText {
                text: format!("Question {id}?"),
            },
            correct_answer: "yes".to_string(),
            incorrect_answers: vec!["no".to_string(), "maybe".to_string()],
        }
    }

    fn reduce_all(intents: Vec<GameIntent>) -> GameState {
        intents
            .into_iter()
            .fold(GameState::default(), GameReducer::reduce)
    }

    // -- score ------------------------------------------------------------

    #[test]
    fn score_starts_at_zero() {
        assert_eq!(GameState::default().score, 0);
    }

    #[test]
    fn score_equals_number_of_increase_dispatches() {
        for n in 0..5 {
            let state = reduce_all(vec![GameIntent::IncreaseScore; n]);
            assert_eq!(state.score, n as u32);
        }
    }

    // -- fetch lifecycle --------------------------------------------------

    #[test]
    fn fetch_started_sets_loading_and_clears_error() {
        let errored = GameReducer::reduce(
            GameState::default(),
            GameIntent::FetchFailed("boom".to_string()),
        );
        let state = GameReducer::reduce(errored, GameIntent::FetchStarted);
        assert_eq!(state.fetch_status, FetchStatus::Loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn fetch_success_replaces_questions_wholesale() {
        let mut state = GameReducer::reduce(
            GameState::default(),
            GameIntent::FetchSucceeded(vec![question("old")]),
        );
        state = GameReducer::reduce(
            state,
            GameIntent::FetchSucceeded(vec![question("a"), question("b")]),
        );
        assert_eq!(state.fetch_status, FetchStatus::Success);
        assert_eq!(state.questions.len(), 2);
        assert_eq!(state.questions[0].id, "a");
    }

    #[test]
    fn fetch_failure_records_message_and_keeps_questions() {
        let loaded = GameReducer::reduce(
            GameState::default(),
            GameIntent::FetchSucceeded(vec![question("a")]),
        );
        let state = GameReducer::reduce(
            loaded,
            GameIntent::FetchFailed("Failed to fetch trivia questions".to_string()),
        );
        assert_eq!(state.fetch_status, FetchStatus::Error);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch trivia questions")
        );
        assert_eq!(state.questions.len(), 1);
    }

    #[test]
    fn fetch_failure_on_empty_state_leaves_questions_empty() {
        let state = GameReducer::reduce(
            GameState::default(),
            GameIntent::FetchFailed("network down".to_string()),
        );
        assert_eq!(state.fetch_status, FetchStatus::Error);
        assert!(state.error.as_deref().is_some_and(|m| !m.is_empty()));
        assert!(state.questions.is_empty());
    }

    // -- player fields ----------------------------------------------------

    #[test]
    fn nickname_and_avatar_are_stored_verbatim() {
        let state = reduce_all(vec![
            GameIntent::SetNickname("edmarv".to_string()),
            GameIntent::SetAvatarUrl("https://api.multiavatar.com/prosol3.png".to_string()),
        ]);
        assert_eq!(state.nickname, "edmarv");
        assert_eq!(state.avatar_url, "https://api.multiavatar.com/prosol3.png");
    }

    #[test]
    fn empty_nickname_is_permitted() {
        let state = reduce_all(vec![
            GameIntent::SetNickname("someone".to_string()),
            GameIntent::SetNickname(String::new()),
        ]);
        assert_eq!(state.nickname, "");
    }

    // -- reset ------------------------------------------------------------

    #[test]
    fn reset_restores_initial_defaults_from_any_state() {
        let state = reduce_all(vec![
            GameIntent::SetNickname("player".to_string()),
            GameIntent::SetAvatarUrl("url".to_string()),
            GameIntent::FetchSucceeded(vec![question("a")]),
            GameIntent::SetCurrentQuestion(7),
            GameIntent::IncreaseScore,
            GameIntent::FetchFailed("late error".to_string()),
            GameIntent::ResetGame,
        ]);
        assert_eq!(state, GameState::default());
    }

    // -- current question -------------------------------------------------

    #[test]
    fn current_is_none_past_the_end() {
        let state = reduce_all(vec![
            GameIntent::FetchSucceeded(vec![question("a")]),
            GameIntent::SetCurrentQuestion(1),
        ]);
        assert!(state.current().is_none());
    }
}
