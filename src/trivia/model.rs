use serde::Deserialize;

/// A single trivia item as returned by the question service.
///
/// Immutable once fetched; lives for one game session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub category: String,
    pub question: QuestionText,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// The API nests the prompt under a `question.text` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionText {
    pub text: String,
}

impl Question {
    /// All answer options in API order: the correct answer followed by the
    /// incorrect ones. Callers shuffle before presenting.
    pub fn options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(1 + self.incorrect_answers.len());
        options.push(self.correct_answer.clone());
        options.extend(self.incorrect_answers.iter().cloned());
        options
    }
}
