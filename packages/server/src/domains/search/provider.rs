//! Pluggable relevance providers.
//!
//! The search route talks to a [`RelevanceProvider`] trait object, so the
//! heuristic local scorer and the LLM-backed search are interchangeable
//! and tests can run entirely against the local implementation.

use std::sync::Arc;

use async_trait::async_trait;

use super::scorer::{self, EntityKind, ScoredEntity, RESULT_LIMIT};
use crate::domains::advisor::{
    AdvisorError, AdvisorService, Relevance, SearchResponse, SearchResult,
};
use crate::domains::directory::Dataset;

#[async_trait]
pub trait RelevanceProvider: Send + Sync {
    /// Rank dataset entities against a free-text query.
    async fn search(&self, query: &str) -> Result<SearchResponse, AdvisorError>;
}

/// Local heuristic implementation; never fails, never leaves the process.
pub struct LocalRelevanceProvider {
    dataset: Arc<Dataset>,
}

impl LocalRelevanceProvider {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl RelevanceProvider for LocalRelevanceProvider {
    async fn search(&self, query: &str) -> Result<SearchResponse, AdvisorError> {
        let scored = scorer::search(&self.dataset, query, RESULT_LIMIT);
        let no_results = scored.is_empty();

        let summary = if no_results {
            String::new()
        } else {
            format!("{} items match \"{}\".", scored.len(), query.trim())
        };

        let results = scored.into_iter().map(to_search_result).collect();

        Ok(SearchResponse {
            summary,
            results,
            related_topics: Vec::new(),
            open_questions: Vec::new(),
            no_results,
            error: None,
        })
    }
}

fn to_search_result(scored: ScoredEntity) -> SearchResult {
    let relevance = if scored.score >= 50 {
        Relevance::High
    } else if scored.score >= 20 {
        Relevance::Medium
    } else {
        Relevance::Low
    };

    let kind = match scored.entity.kind {
        EntityKind::Organization => "organization",
        EntityKind::Project => "project",
        EntityKind::Publication => "publication",
        EntityKind::Benchmark => "benchmark",
    };

    SearchResult {
        kind: kind.to_string(),
        title: scored.entity.title,
        org: scored.entity.org_name,
        match_reason: "Keyword match in title, description, focus areas, or organization name"
            .to_string(),
        relevance,
        slug: scored.entity.slug,
    }
}

/// Delegates relevance ranking to the LLM-backed advisor.
pub struct LlmRelevanceProvider {
    advisor: Arc<AdvisorService>,
}

impl LlmRelevanceProvider {
    pub fn new(advisor: Arc<AdvisorService>) -> Self {
        Self { advisor }
    }
}

#[async_trait]
impl RelevanceProvider for LlmRelevanceProvider {
    async fn search(&self, query: &str) -> Result<SearchResponse, AdvisorError> {
        self.advisor.search(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::directory::Org;

    fn provider() -> LocalRelevanceProvider {
        let orgs: Vec<Org> = serde_json::from_str(
            r#"[{
                "name": "Interp Lab",
                "url": "https://example.org",
                "type": "academic",
                "country": "USA",
                "focus_areas": ["Interpretability"],
                "projects": [{"name": "Interpretability", "status": "published"}]
            }]"#,
        )
        .unwrap();
        LocalRelevanceProvider::new(Arc::new(Dataset::from_orgs(orgs)))
    }

    #[tokio::test]
    async fn test_local_provider_ranks_without_network() {
        let response = provider().search("interpretability").await.unwrap();
        assert!(!response.no_results);
        assert_eq!(response.results[0].title, "Interpretability");
        assert_eq!(response.results[0].relevance, Relevance::High);
    }

    #[tokio::test]
    async fn test_local_provider_empty_query() {
        let response = provider().search("  ").await.unwrap();
        assert!(response.no_results);
        assert!(response.results.is_empty());
        assert!(response.summary.is_empty());
    }
}
