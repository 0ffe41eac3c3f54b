mod controller;
mod state;

pub use controller::QuizController;
pub use state::QuizPhase;
