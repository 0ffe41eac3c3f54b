use crate::mvi::Intent;

/// Direction of grid navigation on the avatar picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub enum WelcomeIntent {
    TypeChar(char),
    Backspace,
    MoveHighlight(GridMove),
    /// Toggle selection of the highlighted avatar; selecting the already
    /// selected slot clears it, like tapping it again in the original flow.
    ToggleAvatar,
    /// Play was pressed without a nickname or avatar.
    ShowAlert,
    DismissAlert,
    /// Back to defaults when a new session starts.
    Reset,
}

impl Intent for WelcomeIntent {}
