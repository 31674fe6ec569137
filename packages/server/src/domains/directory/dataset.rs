//! Dataset loading.
//!
//! The organization dataset is a JSON array embedded into the binary at
//! compile time, parsed once at startup into an immutable [`Dataset`] and
//! shared read-only across requests via `Arc`. `DATASET_PATH` allows a
//! disk override during development.

use anyhow::{Context, Result};
use rust_embed::RustEmbed;

use super::models::{OpenProblem, Org};
use super::problems::open_problem_seed;

// Embed the dataset at compile time, mirroring how build assets are
// embedded elsewhere in this workspace.
#[derive(RustEmbed)]
#[folder = "data/"]
struct DataFiles;

const DATASET_FILE: &str = "data.json";

/// The loaded, immutable dataset: all organizations plus the open-problem
/// seed content.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub orgs: Vec<Org>,
    pub problems: Vec<OpenProblem>,
}

impl Dataset {
    /// Load the embedded dataset.
    pub fn load_embedded() -> Result<Self> {
        let file = DataFiles::get(DATASET_FILE)
            .with_context(|| format!("embedded dataset {} missing", DATASET_FILE))?;
        Self::from_json_slice(&file.data)
    }

    /// Load a dataset from a JSON file on disk (development override).
    pub fn from_path(path: &str) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read dataset at {}", path))?;
        Self::from_json_slice(&bytes)
    }

    /// Parse a dataset from raw JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let orgs: Vec<Org> =
            serde_json::from_slice(bytes).context("dataset is not a valid JSON array of orgs")?;
        Ok(Self {
            orgs,
            problems: open_problem_seed(),
        })
    }

    /// Build a dataset from already-parsed orgs (tests).
    pub fn from_orgs(orgs: Vec<Org>) -> Self {
        Self {
            orgs,
            problems: open_problem_seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_parses() {
        let dataset = Dataset::load_embedded().expect("embedded dataset must parse");
        assert!(!dataset.orgs.is_empty());
        assert!(!dataset.problems.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Dataset::from_json_slice(b"{\"not\": \"an array\"}").is_err());
        assert!(Dataset::from_json_slice(b"not json").is_err());
    }
}
