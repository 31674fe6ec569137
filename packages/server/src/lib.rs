// AI Safety Atlas - API Core
//
// This crate provides the backend API for browsing AI safety research
// organizations, publications, benchmarks, and open problems, plus four
// advisor endpoints that relay queries to an external LLM.
//
// The dataset is a bundled JSON file loaded once at startup and shared
// read-only across requests.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
