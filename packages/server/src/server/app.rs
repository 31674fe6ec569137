//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::advisor::AdvisorService;
use crate::domains::directory::Dataset;
use crate::domains::search::RelevanceProvider;
use crate::server::routes::{
    benchmark_detail_handler, benchmarks_handler, health_handler, idea_match_handler, itn_handler,
    org_detail_handler, orgs_handler, people_handler, person_detail_handler,
    problem_detail_handler, problems_handler, project_detail_handler, projects_handler,
    reading_handler, related_projects_handler, search_handler, stats_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub advisor: Arc<AdvisorService>,
    pub relevance: Arc<dyn RelevanceProvider>,
}

/// Build the Axum application router
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    // CORS: allow any origin unless an explicit allowlist is configured
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        // Directory read surface
        .route("/api/orgs", get(orgs_handler))
        .route("/api/orgs/:slug", get(org_detail_handler))
        .route("/api/projects", get(projects_handler))
        .route("/api/projects/:slug", get(project_detail_handler))
        .route("/api/projects/:slug/related", get(related_projects_handler))
        .route("/api/benchmarks", get(benchmarks_handler))
        .route("/api/benchmarks/:slug", get(benchmark_detail_handler))
        .route("/api/people", get(people_handler))
        .route("/api/people/:slug", get(person_detail_handler))
        .route("/api/problems", get(problems_handler))
        .route("/api/problems/:slug", get(problem_detail_handler))
        .route("/api/stats", get(stats_handler))
        // Advisor endpoints (LLM-backed)
        .route("/api/search", post(search_handler))
        .route("/api/match", post(idea_match_handler))
        .route("/api/itn", post(itn_handler))
        .route("/api/reading", post(reading_handler))
        // Health check
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
