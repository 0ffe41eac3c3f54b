use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub trivia: TriviaApi,
    #[serde(default)]
    pub game: GameRules,
    #[serde(default)]
    pub ui: UiTiming,
}

/// Trivia API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriviaApi {
    /// Base URL of the trivia question service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Difficulty filter sent with the question request.
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// Number of questions requested per game.
    #[serde(default = "default_question_limit")]
    pub question_limit: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Rules of a quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRules {
    /// Questions played per session; reaching this index ends the game.
    #[serde(default = "default_questions_per_game")]
    pub questions_per_game: usize,
    /// Countdown per question, in seconds.
    #[serde(default = "default_countdown_seconds")]
    pub countdown_seconds: u32,
    /// How long a selected answer stays highlighted before advancing.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

/// Screen-flow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiTiming {
    /// Splash screen duration before the welcome screen appears.
    #[serde(default = "default_splash_ms")]
    pub splash_ms: u64,
    /// URL template for avatar images; `{index}` is substituted per slot.
    #[serde(default = "default_avatar_template")]
    pub avatar_url_template: String,
}

fn default_base_url() -> String {
    "https://the-trivia-api.com/v2".to_string()
}

fn default_difficulty() -> String {
    "easy".to_string()
}

fn default_question_limit() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_avatar_template() -> String {
    "https://api.multiavatar.com/prosol{index}.png".to_string()
}

fn default_questions_per_game() -> usize {
    10
}

fn default_countdown_seconds() -> u32 {
    30
}

fn default_reveal_delay_ms() -> u64 {
    800
}

fn default_splash_ms() -> u64 {
    3500
}

impl Default for TriviaApi {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            difficulty: default_difficulty(),
            question_limit: default_question_limit(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            questions_per_game: default_questions_per_game(),
            countdown_seconds: default_countdown_seconds(),
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}

impl Default for UiTiming {
    fn default() -> Self {
        Self {
            splash_ms: default_splash_ms(),
            avatar_url_template: default_avatar_template(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trivia: TriviaApi::default(),
            game: GameRules::default(),
            ui: UiTiming::default(),
        }
    }
}
