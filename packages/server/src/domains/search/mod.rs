// Search domain: local relevance scoring and pluggable providers

pub mod provider;
pub mod scorer;

pub use provider::{LlmRelevanceProvider, LocalRelevanceProvider, RelevanceProvider};
pub use scorer::{build_index, score_entity, EntityKind, ScoredEntity, SearchEntity, RESULT_LIMIT};
