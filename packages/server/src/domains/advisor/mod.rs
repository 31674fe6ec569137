// Advisor domain: LLM-backed search, idea match, ITN scoring, reading paths

pub mod context;
pub mod prompts;
pub mod responses;
pub mod service;

pub use responses::{
    IdeaMatch, ItnAxis, ItnResponse, MatchResponse, ReadingItem, ReadingPath, ReadingResponse,
    Relevance, SearchResponse, SearchResult,
};
pub use service::{AdvisorError, AdvisorService};
