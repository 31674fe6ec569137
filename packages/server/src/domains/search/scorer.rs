//! Local relevance scorer.
//!
//! A fixed, additive, case-insensitive keyword heuristic over a flattened
//! entity index. No field-length normalization, no document-frequency
//! weighting. Runs entirely in-memory with no external calls, so the
//! search surface stays testable offline.

use serde::Serialize;

use crate::domains::directory::{Dataset, ProjectWithOrg};

/// Display cap on scored results.
pub const RESULT_LIMIT: usize = 15;

/// Kind of a searchable entity.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Organization,
    Project,
    Publication,
    Benchmark,
}

/// A flattened entry in the search index.
#[derive(Debug, Clone, Serialize)]
pub struct SearchEntity {
    pub kind: EntityKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub focus_areas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    pub slug: String,
}

/// A scored index entry.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEntity {
    #[serde(flatten)]
    pub entity: SearchEntity,
    pub score: u32,
}

/// Flatten the dataset into the search index, in dataset order.
pub fn build_index(dataset: &Dataset) -> Vec<SearchEntity> {
    let mut index = Vec::new();

    for org in &dataset.orgs {
        index.push(SearchEntity {
            kind: EntityKind::Organization,
            title: org.name.clone(),
            description: org.mission.clone(),
            focus_areas: org.focus_areas.clone(),
            org_name: None,
            slug: org.slug(),
        });
    }

    for ProjectWithOrg { project, org } in dataset.all_projects() {
        index.push(SearchEntity {
            kind: if project.is_publication() {
                EntityKind::Publication
            } else {
                EntityKind::Project
            },
            title: project.name.clone(),
            description: project.description.clone(),
            focus_areas: org.focus_areas.clone(),
            org_name: Some(org.name.clone()),
            slug: project.slug(),
        });
    }

    for b in dataset.all_benchmarks() {
        index.push(SearchEntity {
            kind: EntityKind::Benchmark,
            title: b.benchmark.name.clone(),
            description: b.benchmark.measures.clone(),
            focus_areas: b.org.focus_areas.clone(),
            org_name: Some(b.org.name.clone()),
            slug: b.benchmark.slug(),
        });
    }

    index
}

/// Score one entity against a lowercased query and its tokens.
///
/// Weights are fixed: exact title 100, title prefix 50, title substring
/// 30 (mutually exclusive); description substring 10; any focus-area tag
/// substring 20; owning-org name substring 15; per token (>= 3 chars) 5
/// in title / 2 in description.
pub fn score_entity(query: &str, tokens: &[&str], entity: &SearchEntity) -> u32 {
    let title = entity.title.to_lowercase();
    let description = entity
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    let mut score = 0u32;

    if title == query {
        score += 100;
    } else if title.starts_with(query) {
        score += 50;
    } else if title.contains(query) {
        score += 30;
    }

    if !description.is_empty() && description.contains(query) {
        score += 10;
    }

    if entity
        .focus_areas
        .iter()
        .any(|area| area.to_lowercase().contains(query))
    {
        score += 20;
    }

    if let Some(org_name) = &entity.org_name {
        if org_name.to_lowercase().contains(query) {
            score += 15;
        }
    }

    for token in tokens {
        if token.len() < 3 {
            continue;
        }
        if title.contains(token) {
            score += 5;
        }
        if description.contains(token) {
            score += 2;
        }
    }

    score
}

/// Run the local scorer over the dataset.
///
/// Returns entities with nonzero score, sorted by descending score
/// (stable, so dataset order breaks ties), capped to `limit`. An empty
/// or blank query short-circuits to no results.
pub fn search(dataset: &Dataset, query: &str, limit: usize) -> Vec<ScoredEntity> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let tokens: Vec<&str> = query.split_whitespace().collect();

    let mut scored: Vec<ScoredEntity> = build_index(dataset)
        .into_iter()
        .filter_map(|entity| {
            let score = score_entity(&query, &tokens, &entity);
            (score > 0).then_some(ScoredEntity { entity, score })
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
