//! Read-only JSON views over the dataset.
//!
//! Linear-scan lookups per request; unknown slugs return a 404 JSON body.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::domains::directory::{
    BenchmarkWithOrg, OpenProblem, Org, PersonWithOrg, ProjectWithOrg,
};
use crate::server::app::AppState;

const RELATED_LIMIT: usize = 5;

fn not_found(kind: &str, slug: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{} not found: {}", kind, slug) })),
    )
        .into_response()
}

// =============================================================================
// Response shapes
// =============================================================================

/// Minimal owning-org reference attached to flattened entities.
#[derive(Serialize)]
pub struct OrgRef {
    name: String,
    slug: String,
}

impl From<&Org> for OrgRef {
    fn from(org: &Org) -> Self {
        Self {
            name: org.name.clone(),
            slug: org.slug(),
        }
    }
}

#[derive(Serialize)]
pub struct OrgSummary {
    name: String,
    slug: String,
    #[serde(rename = "type")]
    org_type: String,
    country: String,
    focus_areas: Vec<String>,
    projects: usize,
    benchmarks: usize,
    people: usize,
}

#[derive(Serialize)]
pub struct OrgDetail {
    slug: String,
    #[serde(flatten)]
    org: Org,
}

#[derive(Serialize)]
pub struct ProjectView {
    name: String,
    slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paper_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    citation_count: Option<u32>,
    is_publication: bool,
    org: OrgRef,
}

impl From<&ProjectWithOrg<'_>> for ProjectView {
    fn from(p: &ProjectWithOrg<'_>) -> Self {
        Self {
            name: p.project.name.clone(),
            slug: p.project.slug(),
            description: p.project.description.clone(),
            status: p.project.status.map(|s| s.as_str().to_string()),
            paper_url: p.project.paper_url.clone(),
            citation_count: p.project.citation_count,
            is_publication: p.project.is_publication(),
            org: OrgRef::from(p.org),
        }
    }
}

#[derive(Serialize)]
pub struct BenchmarkView {
    name: String,
    slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    measures: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paper_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    org: OrgRef,
}

impl From<&BenchmarkWithOrg<'_>> for BenchmarkView {
    fn from(b: &BenchmarkWithOrg<'_>) -> Self {
        Self {
            name: b.benchmark.name.clone(),
            slug: b.benchmark.slug(),
            measures: b.benchmark.measures.clone(),
            paper_url: b.benchmark.paper_url.clone(),
            status: b.benchmark.status.map(|s| s.as_str().to_string()),
            org: OrgRef::from(b.org),
        }
    }
}

#[derive(Serialize)]
pub struct PersonView {
    name: String,
    slug: String,
    role: String,
    org: OrgRef,
}

impl From<&PersonWithOrg<'_>> for PersonView {
    fn from(p: &PersonWithOrg<'_>) -> Self {
        Self {
            name: p.person.name.clone(),
            slug: p.person.slug(),
            role: p.person.role.clone(),
            org: OrgRef::from(p.org),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn orgs_handler(State(state): State<AppState>) -> Json<Vec<OrgSummary>> {
    let orgs = state
        .dataset
        .orgs
        .iter()
        .map(|org| OrgSummary {
            name: org.name.clone(),
            slug: org.slug(),
            org_type: org.org_type.as_str().to_string(),
            country: org.country.clone(),
            focus_areas: org.focus_areas.clone(),
            projects: org.projects.len(),
            benchmarks: org.benchmarks.len(),
            people: org.key_people.len(),
        })
        .collect();
    Json(orgs)
}

pub async fn org_detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match state.dataset.org_by_slug(&slug) {
        Some(org) => Json(OrgDetail {
            slug: org.slug(),
            org: org.clone(),
        })
        .into_response(),
        None => not_found("organization", &slug),
    }
}

pub async fn projects_handler(State(state): State<AppState>) -> Json<Vec<ProjectView>> {
    let projects = state
        .dataset
        .all_projects()
        .iter()
        .map(ProjectView::from)
        .collect();
    Json(projects)
}

pub async fn project_detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match state.dataset.project_by_slug(&slug) {
        Some(project) => Json(ProjectView::from(&project)).into_response(),
        None => not_found("project", &slug),
    }
}

pub async fn related_projects_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match state.dataset.project_by_slug(&slug) {
        Some(project) => {
            let related: Vec<ProjectView> = state
                .dataset
                .related_projects(&project, RELATED_LIMIT)
                .iter()
                .map(ProjectView::from)
                .collect();
            Json(related).into_response()
        }
        None => not_found("project", &slug),
    }
}

pub async fn benchmarks_handler(State(state): State<AppState>) -> Json<Vec<BenchmarkView>> {
    let benchmarks = state
        .dataset
        .all_benchmarks()
        .iter()
        .map(BenchmarkView::from)
        .collect();
    Json(benchmarks)
}

pub async fn benchmark_detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match state.dataset.benchmark_by_slug(&slug) {
        Some(benchmark) => Json(BenchmarkView::from(&benchmark)).into_response(),
        None => not_found("benchmark", &slug),
    }
}

pub async fn people_handler(State(state): State<AppState>) -> Json<Vec<PersonView>> {
    let people = state
        .dataset
        .all_people()
        .iter()
        .map(PersonView::from)
        .collect();
    Json(people)
}

pub async fn person_detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match state.dataset.person_by_slug(&slug) {
        Some(person) => Json(PersonView::from(&person)).into_response(),
        None => not_found("person", &slug),
    }
}

pub async fn problems_handler(State(state): State<AppState>) -> Json<Vec<OpenProblem>> {
    Json(state.dataset.problems.clone())
}

pub async fn problem_detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match state.dataset.problem_by_slug(&slug) {
        Some(problem) => Json(problem.clone()).into_response(),
        None => not_found("problem", &slug),
    }
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<crate::domains::directory::Stats> {
    Json(state.dataset.stats())
}
