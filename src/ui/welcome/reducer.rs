use crate::avatar::{AVATAR_COUNT, GRID_COLUMNS};
use crate::mvi::Reducer;
use crate::ui::welcome::intent::{GridMove, WelcomeIntent};
use crate::ui::welcome::state::WelcomeState;

pub struct WelcomeReducer;

impl Reducer for WelcomeReducer {
    type State = WelcomeState;
    type Intent = WelcomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WelcomeIntent::TypeChar(c) => {
                if state.alert_visible || c.is_control() {
                    return state;
                }
                let mut nickname = state.nickname;
                nickname.push(c);
                WelcomeState { nickname, ..state }
            }
            WelcomeIntent::Backspace => {
                if state.alert_visible {
                    return state;
                }
                let mut nickname = state.nickname;
                nickname.pop();
                WelcomeState { nickname, ..state }
            }
            WelcomeIntent::MoveHighlight(direction) => {
                if state.alert_visible {
                    return state;
                }
                WelcomeState {
                    highlighted: moved(state.highlighted, direction),
                    ..state
                }
            }
            WelcomeIntent::ToggleAvatar => {
                if state.alert_visible {
                    return state;
                }
                let selected_avatar = if state.selected_avatar == Some(state.highlighted) {
                    None
                } else {
                    Some(state.highlighted)
                };
                WelcomeState {
                    selected_avatar,
                    ..state
                }
            }
            WelcomeIntent::ShowAlert => WelcomeState {
                alert_visible: true,
                ..state
            },
            WelcomeIntent::DismissAlert => WelcomeState {
                alert_visible: false,
                ..state
            },
            WelcomeIntent::Reset => WelcomeState::default(),
        }
    }
}

/// Grid navigation with horizontal wrap-around and vertical clamping.
fn moved(index: usize, direction: GridMove) -> usize {
    match direction {
        GridMove::Left => {
            if index == 0 {
                AVATAR_COUNT - 1
            } else {
                index - 1
            }
        }
        GridMove::Right => {
            if index + 1 >= AVATAR_COUNT {
                0
            } else {
                index + 1
            }
        }
        GridMove::Up => index.checked_sub(GRID_COLUMNS).unwrap_or(index),
        GridMove::Down => {
            if index + GRID_COLUMNS < AVATAR_COUNT {
                index + GRID_COLUMNS
            } else {
                index
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(intents: Vec<WelcomeIntent>) -> WelcomeState {
        intents
            .into_iter()
            .fold(WelcomeState::default(), WelcomeReducer::reduce)
    }

    // -- nickname ----------------------------------------------------------

    #[test]
    fn typing_builds_the_nickname() {
        let state = reduce_all("abc".chars().map(WelcomeIntent::TypeChar).collect());
        assert_eq!(state.nickname, "abc");
    }

    #[test]
    fn backspace_removes_the_last_char() {
        let state = reduce_all(vec![
            WelcomeIntent::TypeChar('h'),
            WelcomeIntent::TypeChar('i'),
            WelcomeIntent::Backspace,
        ]);
        assert_eq!(state.nickname, "h");
    }

    #[test]
    fn backspace_on_empty_nickname_is_harmless() {
        let state = reduce_all(vec![WelcomeIntent::Backspace]);
        assert_eq!(state.nickname, "");
    }

    #[test]
    fn control_chars_are_not_typed() {
        let state = reduce_all(vec![WelcomeIntent::TypeChar('\t')]);
        assert_eq!(state.nickname, "");
    }

    // -- avatar grid -------------------------------------------------------

    #[test]
    fn highlight_wraps_horizontally() {
        let state = reduce_all(vec![WelcomeIntent::MoveHighlight(GridMove::Left)]);
        assert_eq!(state.highlighted, AVATAR_COUNT - 1);
        let state = WelcomeReducer::reduce(state, WelcomeIntent::MoveHighlight(GridMove::Right));
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn highlight_clamps_vertically_at_the_edges() {
        let state = reduce_all(vec![WelcomeIntent::MoveHighlight(GridMove::Up)]);
        assert_eq!(state.highlighted, 0);
        let bottom = reduce_all(vec![WelcomeIntent::MoveHighlight(GridMove::Down); 10]);
        assert!(bottom.highlighted + GRID_COLUMNS >= AVATAR_COUNT);
    }

    #[test]
    fn toggle_selects_and_deselects_the_highlighted_avatar() {
        let state = reduce_all(vec![
            WelcomeIntent::MoveHighlight(GridMove::Right),
            WelcomeIntent::ToggleAvatar,
        ]);
        assert_eq!(state.selected_avatar, Some(1));
        let state = WelcomeReducer::reduce(state, WelcomeIntent::ToggleAvatar);
        assert_eq!(state.selected_avatar, None);
    }

    #[test]
    fn toggling_a_different_slot_moves_the_selection() {
        let state = reduce_all(vec![
            WelcomeIntent::ToggleAvatar,
            WelcomeIntent::MoveHighlight(GridMove::Down),
            WelcomeIntent::ToggleAvatar,
        ]);
        assert_eq!(state.selected_avatar, Some(GRID_COLUMNS));
    }

    // -- play gating -------------------------------------------------------

    #[test]
    fn not_ready_without_nickname_or_avatar() {
        assert!(!WelcomeState::default().ready_to_play());
        let only_name = reduce_all(vec![WelcomeIntent::TypeChar('x')]);
        assert!(!only_name.ready_to_play());
        let only_avatar = reduce_all(vec![WelcomeIntent::ToggleAvatar]);
        assert!(!only_avatar.ready_to_play());
    }

    #[test]
    fn ready_with_both_nickname_and_avatar() {
        let state = reduce_all(vec![
            WelcomeIntent::TypeChar('x'),
            WelcomeIntent::ToggleAvatar,
        ]);
        assert!(state.ready_to_play());
    }

    // -- alert modal -------------------------------------------------------

    #[test]
    fn alert_blocks_all_editing_until_dismissed() {
        let state = reduce_all(vec![
            WelcomeIntent::ShowAlert,
            WelcomeIntent::TypeChar('a'),
            WelcomeIntent::MoveHighlight(GridMove::Right),
            WelcomeIntent::ToggleAvatar,
        ]);
        assert!(state.alert_visible);
        assert_eq!(state.nickname, "");
        assert_eq!(state.highlighted, 0);
        assert_eq!(state.selected_avatar, None);

        let state = WelcomeReducer::reduce(state, WelcomeIntent::DismissAlert);
        assert!(!state.alert_visible);
    }

    #[test]
    fn reset_restores_defaults() {
        let state = reduce_all(vec![
            WelcomeIntent::TypeChar('x'),
            WelcomeIntent::ToggleAvatar,
            WelcomeIntent::Reset,
        ]);
        assert_eq!(state, WelcomeState::default());
    }
}
