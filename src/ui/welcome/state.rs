use crate::mvi::State;

/// Interaction state of the welcome screen.
#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeState {
    /// Nickname entered so far.
    pub nickname: String,
    /// Avatar slot under the cursor in the grid.
    pub highlighted: usize,
    /// Avatar slot the player has committed to, if any.
    pub selected_avatar: Option<usize>,
    /// Blocking "pick your avatar and nickname" modal.
    pub alert_visible: bool,
}

impl Default for WelcomeState {
    fn default() -> Self {
        Self {
            nickname: String::new(),
            highlighted: 0,
            selected_avatar: None,
            alert_visible: false,
        }
    }
}

impl State for WelcomeState {}

impl WelcomeState {
    /// Both inputs the quiz requires are present.
    pub fn ready_to_play(&self) -> bool {
        !self.nickname.is_empty() && self.selected_avatar.is_some()
    }
}
