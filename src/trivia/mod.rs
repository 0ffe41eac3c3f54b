mod client;
mod error;
mod model;

pub use client::TriviaClient;
pub use error::TriviaError;
pub use model::{Question, QuestionText};
