use reqwest::Client;
use std::time::Duration;

use crate::config::TriviaApi;
use crate::trivia::error::TriviaError;
use crate::trivia::model::Question;

/// HTTP client for the trivia question service.
///
/// One unauthenticated GET per game session. No retry and no overall request
/// timeout; a hung request is surfaced to the user as a stuck loading view,
/// matching the published game's behavior.
pub struct TriviaClient {
    client: Client,
    base_url: String,
    difficulty: String,
    question_limit: u32,
}

impl TriviaClient {
    pub fn new(api: &TriviaApi) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .build()
            .expect("Failed to build trivia client");

        Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            difficulty: api.difficulty.clone(),
            question_limit: api.question_limit,
        }
    }

    /// Fetches one batch of questions filtered to the configured difficulty.
    pub async fn fetch_questions(&self) -> Result<Vec<Question>, TriviaError> {
        let url = format!(
            "{}/questions?limit={}&difficulties={}",
            self.base_url, self.question_limit, self.difficulty
        );
        tracing::debug!(url = %url, "requesting trivia questions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| TriviaError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "trivia service rejected request");
            return Err(TriviaError::Status {
                status: status.as_u16(),
            });
        }

        let questions: Vec<Question> = response
            .json()
            .await
            .map_err(|source| TriviaError::Decode { source })?;

        tracing::info!(count = questions.len(), "fetched trivia questions");
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = TriviaApi {
            base_url: "https://the-trivia-api.com/v2/".to_string(),
            ..TriviaApi::default()
        };
        let client = TriviaClient::new(&api);
        assert_eq!(client.base_url, "https://the-trivia-api.com/v2");
    }

    #[test]
    fn request_parameters_come_from_config() {
        let api = TriviaApi {
            difficulty: "medium".to_string(),
            question_limit: 5,
            ..TriviaApi::default()
        };
        let client = TriviaClient::new(&api);
        assert_eq!(client.difficulty, "medium");
        assert_eq!(client.question_limit, 5);
    }
}
