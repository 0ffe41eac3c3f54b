use thiserror::Error;

/// Errors that can occur while fetching trivia questions.
///
/// Every variant renders as a human-readable message; the UI shows the
/// message verbatim on the quiz screen's error view.
#[derive(Debug, Error)]
pub enum TriviaError {
    /// Transport failure (DNS, connect, TLS, mid-body disconnect).
    #[error("Failed to fetch trivia questions: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success HTTP status.
    #[error("Trivia service returned HTTP {status}")]
    Status { status: u16 },

    /// The response body did not match the expected question shape.
    #[error("Failed to decode trivia response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}
