//! Advisor service: the four LLM-backed operations.
//!
//! Common shape: validate minimal input (short input returns a canned
//! zero-confidence payload without calling the model), assemble a bounded
//! prompt from the dataset, make one single-turn call, parse the reply as
//! JSON with a per-endpoint fallback on parse failure. Transport and
//! upstream failures surface as [`AdvisorError`] for the route layer to
//! convert into a fixed-shape 500. No retries, no response caching;
//! every request is independent.

use std::sync::Arc;

use anthropic_client::{strip_code_blocks, AnthropicClient, AnthropicError};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use super::context;
use super::prompts;
use super::responses::{ItnResponse, MatchResponse, ReadingResponse, SearchResponse};
use crate::domains::directory::Dataset;

/// Max completion tokens per advisor call.
const MAX_TOKENS: u32 = 2000;

/// Minimum input lengths (in characters) before the model is consulted.
pub const MIN_QUERY_LEN: usize = 2;
pub const MIN_IDEA_LEN: usize = 20;
pub const MIN_TITLE_LEN: usize = 5;
pub const MIN_DESCRIPTION_LEN: usize = 20;
pub const MIN_TOPIC_LEN: usize = 3;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("upstream model call failed: {0}")]
    Upstream(#[from] AnthropicError),
}

/// Stateless advisor over the shared dataset and one LLM client.
#[derive(Clone)]
pub struct AdvisorService {
    dataset: Arc<Dataset>,
    client: AnthropicClient,
    model: String,
}

impl AdvisorService {
    pub fn new(dataset: Arc<Dataset>, client: AnthropicClient, model: impl Into<String>) -> Self {
        Self {
            dataset,
            client,
            model: model.into(),
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// LLM-backed search over the whole dataset.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, AdvisorError> {
        if query.trim().chars().count() < MIN_QUERY_LEN {
            return Ok(SearchResponse::insufficient_input());
        }

        let data_context = context::search_context(&self.dataset);
        let prompt = prompts::search_prompt(query, &data_context);
        let text = self.complete(&prompt).await?;

        Ok(parse_or(&text, SearchResponse::parse_fallback, "search"))
    }

    /// Compare a research idea against existing work.
    pub async fn match_idea(&self, idea: &str) -> Result<MatchResponse, AdvisorError> {
        if idea.trim().chars().count() < MIN_IDEA_LEN {
            return Ok(MatchResponse::insufficient_input());
        }

        let research_context = context::research_index(&self.dataset);
        let prompt = prompts::match_prompt(idea, &research_context);
        let text = self.complete(&prompt).await?;

        Ok(parse_or(&text, MatchResponse::parse_fallback, "match"))
    }

    /// Score a problem on the Importance/Neglectedness/Tractability frame.
    pub async fn itn(&self, title: &str, description: &str) -> Result<ItnResponse, AdvisorError> {
        if title.chars().count() < MIN_TITLE_LEN
            || description.chars().count() < MIN_DESCRIPTION_LEN
        {
            return Ok(ItnResponse::insufficient_input());
        }

        let itn_context = context::itn_context(&self.dataset);
        let prompt = prompts::itn_prompt(title, description, &itn_context);
        let text = self.complete(&prompt).await?;

        Ok(parse_or(&text, ItnResponse::parse_fallback, "itn"))
    }

    /// Build a structured reading path for a topic.
    pub async fn reading_path(
        &self,
        topic: &str,
        background: &str,
    ) -> Result<ReadingResponse, AdvisorError> {
        if topic.trim().chars().count() < MIN_TOPIC_LEN {
            return Ok(ReadingResponse::insufficient_input(topic));
        }

        let publication_list = context::reading_publications(&self.dataset);
        let prompt = prompts::reading_prompt(topic, background, &publication_list);
        let text = self.complete(&prompt).await?;

        Ok(parse_or(
            &text,
            || ReadingResponse::parse_fallback(topic),
            "reading",
        ))
    }

    async fn complete(&self, prompt: &str) -> Result<String, AdvisorError> {
        let text = self
            .client
            .complete_text(&self.model, MAX_TOKENS, prompt)
            .await?;
        Ok(text)
    }
}

/// Parse a model reply (possibly wrapped in a fenced code block) into `T`,
/// substituting the endpoint fallback when the reply is not valid JSON.
fn parse_or<T, F>(text: &str, fallback: F, endpoint: &str) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let cleaned = strip_code_blocks(text);
    match serde_json::from_str(cleaned) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(endpoint, error = %e, "model reply was not valid JSON, using fallback");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AdvisorService {
        // Unroutable base URL: the guard paths must never reach it.
        let client =
            AnthropicClient::new("test-key").with_base_url("http://127.0.0.1:1/unreachable");
        let dataset = Arc::new(Dataset::from_orgs(Vec::new()));
        AdvisorService::new(dataset, client, "claude-sonnet-4-20250514")
    }

    #[tokio::test]
    async fn test_short_idea_never_calls_model() {
        let response = service().match_idea("too short").await.unwrap();
        assert!(!response.has_overlap);
        assert!(response.matches.is_empty());
        assert_eq!(
            response.overlap_summary,
            "Please provide a more detailed description of your idea."
        );
    }

    #[tokio::test]
    async fn test_short_query_never_calls_model() {
        let response = service().search(" a ").await.unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.summary, "");
    }

    #[tokio::test]
    async fn test_short_itn_input_never_calls_model() {
        let response = service().itn("Hi", "short").await.unwrap();
        assert_eq!(response.overall, 0.0);
        assert_eq!(response.verdict, "Low Priority");
    }

    #[tokio::test]
    async fn test_short_topic_never_calls_model() {
        let response = service().reading_path("ai", "beginner").await.unwrap();
        assert_eq!(response.overview, "Please provide a more specific topic.");
    }

    #[test]
    fn test_parse_or_accepts_fenced_json() {
        let parsed: SearchResponse = parse_or(
            "```json\n{\"summary\":\"ok\",\"results\":[]}\n```",
            SearchResponse::parse_fallback,
            "search",
        );
        assert_eq!(parsed.summary, "ok");
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        let parsed: SearchResponse =
            parse_or("I could not produce JSON", SearchResponse::parse_fallback, "search");
        assert_eq!(parsed.summary, "Search completed.");
    }
}
