use rand::rngs::ThreadRng;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::avatar::avatar_url;
use crate::config::Config;
use crate::game::{GameIntent, GameStore};
use crate::mvi::Reducer;
use crate::quiz::{QuizController, QuizPhase};
use crate::trivia::{Question, TriviaError};
use crate::ui::welcome::{WelcomeIntent, WelcomeReducer, WelcomeState};

/// The four screens of the game, in their fixed order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Splash,
    Welcome,
    Quiz,
    Score,
}

/// Work requests sent to the async fetch worker.
#[derive(Debug)]
pub enum UiCommand {
    FetchQuestions,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    store: GameStore,
    controller: QuizController,
    /// State of the welcome screen (MVI pattern).
    welcome: WelcomeState,
    config: Config,
    rng: ThreadRng,
    command_sender: Option<UiCommandSender>,
    splash_since: Instant,
    /// Accumulates event-loop ticks into whole countdown seconds.
    last_second: Instant,
    /// Set while a selected answer is highlighted, cleared on advancement.
    reveal_since: Option<Instant>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut store = GameStore::new();
        store.subscribe(|state| {
            tracing::trace!(
                question = state.current_question,
                score = state.score,
                status = ?state.fetch_status,
                "game state updated"
            );
        });

        let controller = QuizController::new(
            config.game.countdown_seconds,
            config.game.questions_per_game,
        );
        let now = Instant::now();
        Self {
            should_quit: false,
            screen: Screen::Splash,
            store,
            controller,
            welcome: WelcomeState::default(),
            config,
            rng: rand::thread_rng(),
            command_sender: None,
            splash_since: now,
            last_second: now,
            reveal_since: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    pub fn quiz_phase(&self) -> &QuizPhase {
        self.controller.phase()
    }

    pub fn welcome(&self) -> &WelcomeState {
        &self.welcome
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Whether the highlight for `index` should render as the correct answer.
    pub fn option_is_correct(&self, index: usize) -> bool {
        self.controller.option_is_correct(&self.store, index)
    }

    // ========================================================================
    // Welcome screen (MVI pattern)
    // ========================================================================

    pub fn dispatch_welcome(&mut self, intent: WelcomeIntent) {
        dispatch_mvi!(self, welcome, WelcomeReducer, intent);
    }

    /// Play pressed. Blocked with the modal alert unless both nickname and
    /// avatar have been chosen; otherwise commits them and starts the quiz.
    pub fn press_play(&mut self) {
        if !self.welcome.ready_to_play() {
            self.dispatch_welcome(WelcomeIntent::ShowAlert);
            return;
        }
        let nickname = self.welcome.nickname.clone();
        let slot = self.welcome.selected_avatar.unwrap_or_default();
        let url = avatar_url(&self.config.ui.avatar_url_template, slot);
        self.store.dispatch(GameIntent::SetNickname(nickname));
        self.store.dispatch(GameIntent::SetAvatarUrl(url));
        self.start_quiz();
    }

    // ========================================================================
    // Screen flow
    // ========================================================================

    fn start_quiz(&mut self) {
        self.screen = Screen::Quiz;
        self.controller = QuizController::new(
            self.config.game.countdown_seconds,
            self.config.game.questions_per_game,
        );
        self.controller.begin_fetch(&mut self.store);
        self.reveal_since = None;
        self.last_second = Instant::now();
        self.send_command(UiCommand::FetchQuestions);
    }

    /// Retry after a failed fetch; no-op in any other phase.
    pub fn retry_fetch(&mut self) {
        if matches!(self.controller.phase(), QuizPhase::Errored { .. }) {
            self.controller.begin_fetch(&mut self.store);
            self.send_command(UiCommand::FetchQuestions);
        }
    }

    /// Restart from the score screen: wipe the session and return to the
    /// welcome screen.
    pub fn restart(&mut self) {
        self.store.dispatch(GameIntent::ResetGame);
        self.dispatch_welcome(WelcomeIntent::Reset);
        self.controller = QuizController::new(
            self.config.game.countdown_seconds,
            self.config.game.questions_per_game,
        );
        self.reveal_since = None;
        self.screen = Screen::Welcome;
    }

    /// Issues the final store reset so no session state leaks past quit.
    pub fn teardown(&mut self) {
        self.store.dispatch(GameIntent::ResetGame);
    }

    // ========================================================================
    // Event handling
    // ========================================================================

    pub fn on_questions_fetched(&mut self, result: Result<Vec<Question>, TriviaError>) {
        if self.screen != Screen::Quiz {
            // Stale resolution after a restart or teardown.
            return;
        }
        self.controller
            .on_fetch_resolved(&mut self.store, result, &mut self.rng);
        self.last_second = Instant::now();
        self.enter_score_if_finished();
    }

    pub fn select_option(&mut self, index: usize) {
        if self.screen != Screen::Quiz {
            return;
        }
        if self.controller.select(&mut self.store, index) {
            self.reveal_since = Some(Instant::now());
        }
    }

    pub fn on_tick(&mut self) {
        match self.screen {
            Screen::Splash => {
                if self.splash_since.elapsed() >= Duration::from_millis(self.config.ui.splash_ms) {
                    self.screen = Screen::Welcome;
                }
            }
            Screen::Quiz => self.on_quiz_tick(),
            Screen::Welcome | Screen::Score => {}
        }
    }

    fn on_quiz_tick(&mut self) {
        if let Some(since) = self.reveal_since {
            if since.elapsed() >= Duration::from_millis(self.config.game.reveal_delay_ms) {
                self.reveal_since = None;
                self.controller.finish_reveal(&mut self.store, &mut self.rng);
                self.last_second = Instant::now();
                self.enter_score_if_finished();
            }
            return;
        }

        if self.last_second.elapsed() >= Duration::from_secs(1) {
            self.last_second = Instant::now();
            self.controller.tick_second(&mut self.store, &mut self.rng);
            self.enter_score_if_finished();
        }
    }

    fn enter_score_if_finished(&mut self) {
        if self.controller.phase().is_finished() {
            tracing::info!(score = self.store.state().score, "session finished");
            self.screen = Screen::Score;
        }
    }

    fn send_command(&mut self, command: UiCommand) {
        let Some(sender) = &self.command_sender else {
            tracing::error!("no fetch worker attached");
            return;
        };
        if let Err(err) = sender.try_send(command) {
            tracing::error!(error = %err, "failed to reach fetch worker");
        }
    }
}
