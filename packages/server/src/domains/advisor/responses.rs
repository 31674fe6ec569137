//! Advisor endpoint response shapes.
//!
//! Each endpoint has three canned variants besides a real model answer:
//! an insufficient-input payload (returned with HTTP 200 when validation
//! fails, without calling the model), a parse-failure fallback (returned
//! with HTTP 200 when the model reply is not valid JSON), and an error
//! payload (returned with HTTP 500 on transport failure). All fields are
//! defaulted so a partially-shaped model reply still deserializes.

use serde::{Deserialize, Serialize};

/// Relevance band assigned by the model or the local scorer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    High,
    Medium,
    #[default]
    Low,
}

// =============================================================================
// Search
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub related_topics: Vec<String>,
    #[serde(default)]
    pub open_questions: Vec<String>,
    #[serde(default)]
    pub no_results: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub match_reason: String,
    #[serde(default)]
    pub relevance: Relevance,
    #[serde(default)]
    pub slug: String,
}

impl SearchResponse {
    /// Returned for queries too short to search.
    pub fn insufficient_input() -> Self {
        Self::default()
    }

    /// Returned when the model reply is not valid JSON.
    pub fn parse_fallback() -> Self {
        Self {
            summary: "Search completed.".to_string(),
            ..Self::default()
        }
    }

    /// Returned with HTTP 500 on transport failure.
    pub fn error_fallback() -> Self {
        Self {
            summary: "An error occurred. Please try again.".to_string(),
            error: Some("Search failed".to_string()),
            ..Self::default()
        }
    }
}

// =============================================================================
// Idea match
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub has_overlap: bool,
    #[serde(default)]
    pub overlap_summary: String,
    #[serde(default)]
    pub matches: Vec<IdeaMatch>,
    #[serde(default)]
    pub gaps: Vec<String>,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub potential_collaborators: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaMatch {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub overlap: String,
    #[serde(default)]
    pub relevance: Relevance,
    #[serde(default)]
    pub slug: String,
}

impl MatchResponse {
    pub fn insufficient_input() -> Self {
        Self {
            has_overlap: false,
            overlap_summary: "Please provide a more detailed description of your idea."
                .to_string(),
            recommendation: "Add more detail about your research approach.".to_string(),
            ..Self::default()
        }
    }

    pub fn parse_fallback() -> Self {
        Self {
            has_overlap: false,
            overlap_summary: "Analysis complete.".to_string(),
            gaps: vec!["Unable to parse detailed results".to_string()],
            recommendation: "Try refining your idea description for better matching."
                .to_string(),
            ..Self::default()
        }
    }

    pub fn error_fallback() -> Self {
        Self {
            has_overlap: false,
            overlap_summary: "Error analyzing idea.".to_string(),
            recommendation: "Please try again.".to_string(),
            ..Self::default()
        }
    }
}

// =============================================================================
// ITN scoring
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItnResponse {
    #[serde(default)]
    pub importance: ItnAxis,
    #[serde(default)]
    pub neglectedness: ItnAxis,
    #[serde(default)]
    pub tractability: ItnAxis,
    #[serde(default)]
    pub overall: f32,
    #[serde(default)]
    pub verdict: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub related_work: Vec<String>,
    #[serde(default)]
    pub potential_collaborators: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItnAxis {
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub reasoning: String,
}

impl ItnAxis {
    fn canned(score: f32, reasoning: &str) -> Self {
        Self {
            score,
            reasoning: reasoning.to_string(),
        }
    }
}

impl ItnResponse {
    pub fn insufficient_input() -> Self {
        let axis = ItnAxis::canned(0.0, "Insufficient information");
        Self {
            importance: axis.clone(),
            neglectedness: axis.clone(),
            tractability: axis,
            overall: 0.0,
            verdict: "Low Priority".to_string(),
            summary: "Please provide more detail about the problem.".to_string(),
            ..Self::default()
        }
    }

    pub fn parse_fallback() -> Self {
        let axis = ItnAxis::canned(5.0, "Unable to parse detailed analysis");
        Self {
            importance: axis.clone(),
            neglectedness: axis.clone(),
            tractability: axis,
            overall: 5.0,
            verdict: "Worth Exploring".to_string(),
            summary: "Analysis completed but detailed parsing failed. Consider refining your problem description.".to_string(),
            recommendations: vec![
                "Provide more specific details".to_string(),
                "Search for related work".to_string(),
            ],
            ..Self::default()
        }
    }

    pub fn error_fallback() -> Self {
        let axis = ItnAxis::canned(0.0, "Error occurred");
        Self {
            importance: axis.clone(),
            neglectedness: axis.clone(),
            tractability: axis,
            overall: 0.0,
            verdict: "Low Priority".to_string(),
            summary: "An error occurred during analysis. Please try again.".to_string(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Reading path
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingResponse {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub path: ReadingPath,
    #[serde(default)]
    pub time_estimate: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingPath {
    #[serde(default)]
    pub start_here: Vec<ReadingItem>,
    #[serde(default)]
    pub then_read: Vec<ReadingItem>,
    #[serde(default)]
    pub recent_developments: Vec<ReadingItem>,
    #[serde(default)]
    pub optional_deep_dives: Vec<ReadingItem>,
    #[serde(default)]
    pub skip_these: Vec<ReadingItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingItem {
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub reason: String,
}

impl ReadingResponse {
    pub fn insufficient_input(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            overview: "Please provide a more specific topic.".to_string(),
            time_estimate: "N/A".to_string(),
            ..Self::default()
        }
    }

    pub fn parse_fallback(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            overview: "Reading path generated.".to_string(),
            time_estimate: "Varies".to_string(),
            ..Self::default()
        }
    }

    pub fn error_fallback() -> Self {
        Self {
            topic: "Error".to_string(),
            overview: "Failed to generate reading path. Please try again.".to_string(),
            time_estimate: "N/A".to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_model_reply_deserializes() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"summary":"Two benchmarks match.","results":[{"type":"benchmark","title":"AgentHarm","relevance":"high"}]}"#,
        )
        .unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].relevance, Relevance::High);
        assert!(!response.no_results);
    }

    #[test]
    fn test_insufficient_input_payloads() {
        let m = MatchResponse::insufficient_input();
        assert!(!m.has_overlap);
        assert!(m.matches.is_empty());

        let itn = ItnResponse::insufficient_input();
        assert_eq!(itn.overall, 0.0);
        assert_eq!(itn.verdict, "Low Priority");

        let r = ReadingResponse::insufficient_input("x");
        assert!(r.path.start_here.is_empty());
    }

    #[test]
    fn test_itn_reply_with_numeric_scores() {
        let response: ItnResponse = serde_json::from_str(
            r#"{
                "importance": {"score": 8, "reasoning": "core problem"},
                "neglectedness": {"score": 6, "reasoning": "some work exists"},
                "tractability": {"score": 5, "reasoning": "hard to measure"},
                "overall": 6.5,
                "verdict": "Worth Exploring"
            }"#,
        )
        .unwrap();
        assert_eq!(response.importance.score, 8.0);
        assert_eq!(response.verdict, "Worth Exploring");
        assert!(response.recommendations.is_empty());
    }
}
