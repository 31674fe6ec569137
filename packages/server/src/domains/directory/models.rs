//! Directory entity models.
//!
//! These deserialize straight from the bundled dataset JSON. Status and
//! type strings in the dataset are free-text and inconsistently cased, so
//! both normalize into closed enums at the deserialization boundary; views
//! never re-do case-insensitive comparisons.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::slugify;

/// Research organization - anchor entity owning projects, benchmarks,
/// and key people.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Org {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub org_type: OrgType,
    pub country: String,
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub key_people: Vec<Person>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub benchmarks: Vec<Benchmark>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub employees: Option<u32>,
    #[serde(default)]
    pub directors: Option<u32>,
    #[serde(default)]
    pub managers: Option<u32>,
    #[serde(default)]
    pub subteams: Option<u32>,
}

impl Org {
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Organization type, normalized from the dataset's free-text `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum OrgType {
    GovernmentInstitute,
    LabSafetyTeam,
    Nonprofit,
    Academic,
    ThinkTank,
    /// Unrecognized type string, preserved as-is
    Other(String),
}

impl OrgType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::GovernmentInstitute => "government institute",
            Self::LabSafetyTeam => "lab safety team",
            Self::Nonprofit => "nonprofit",
            Self::Academic => "academic",
            Self::ThinkTank => "think tank",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for OrgType {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "government institute" => Self::GovernmentInstitute,
            "lab safety team" => Self::LabSafetyTeam,
            "nonprofit" | "non-profit" => Self::Nonprofit,
            "academic" => Self::Academic,
            "think tank" => Self::ThinkTank,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrgType> for String {
    fn from(t: OrgType) -> Self {
        t.as_str().to_string()
    }
}

/// Research project or publication, owned by exactly one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub paper_url: Option<String>,
    /// Canonical citation field; the dataset also spells it `citations`.
    #[serde(default, alias = "citations")]
    pub citation_count: Option<u32>,
}

impl Project {
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// A project counts as a publication when it is marked published or
    /// carries a paper URL.
    pub fn is_publication(&self) -> bool {
        matches!(self.status, Some(ProjectStatus::Published)) || self.paper_url.is_some()
    }
}

/// Project status, normalized case-insensitively from the dataset's
/// free-text `status` field ("published", "Active", "Completed", ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Published,
    Active,
    Completed,
    Planned,
    Unknown,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Planned => "planned",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "published" => Self::Published,
            "active" | "ongoing" => Self::Active,
            "completed" | "complete" => Self::Completed,
            "planned" => Self::Planned,
            _ => Self::Unknown,
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(s: ProjectStatus) -> Self {
        s.as_str().to_string()
    }
}

/// Evaluation benchmark, owned by exactly one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benchmark {
    pub name: String,
    #[serde(default)]
    pub measures: Option<String>,
    #[serde(default)]
    pub paper_url: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

impl Benchmark {
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Key person at an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub role: String,
}

impl Person {
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

// =============================================================================
// Open problems (hardcoded seed content, not part of the dataset file)
// =============================================================================

/// An open research problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenProblem {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub focus_area: String,
    pub status: ProblemStatus,
    pub difficulty: Difficulty,
    pub submitted_by: String,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub related_work: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProblemStatus {
    Open,
    InProgress,
    Solved,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Foundational,
    Hard,
    Medium,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_type_normalization() {
        assert_eq!(OrgType::from("Nonprofit".to_string()), OrgType::Nonprofit);
        assert_eq!(
            OrgType::from("  Think Tank ".to_string()),
            OrgType::ThinkTank
        );
        assert_eq!(
            OrgType::from("research collective".to_string()),
            OrgType::Other("research collective".to_string())
        );
    }

    #[test]
    fn test_project_status_normalization() {
        assert_eq!(
            ProjectStatus::from("Published".to_string()),
            ProjectStatus::Published
        );
        assert_eq!(
            ProjectStatus::from("ACTIVE".to_string()),
            ProjectStatus::Active
        );
        assert_eq!(
            ProjectStatus::from("wip".to_string()),
            ProjectStatus::Unknown
        );
    }

    #[test]
    fn test_citations_alias() {
        let a: Project =
            serde_json::from_str(r#"{"name":"A","citation_count":12}"#).unwrap();
        let b: Project = serde_json::from_str(r#"{"name":"B","citations":7}"#).unwrap();
        assert_eq!(a.citation_count, Some(12));
        assert_eq!(b.citation_count, Some(7));
    }

    #[test]
    fn test_publication_predicate() {
        let published: Project =
            serde_json::from_str(r#"{"name":"P","status":"published"}"#).unwrap();
        let with_paper: Project =
            serde_json::from_str(r#"{"name":"Q","paper_url":"https://arxiv.org/abs/1"}"#)
                .unwrap();
        let active: Project =
            serde_json::from_str(r#"{"name":"R","status":"Active"}"#).unwrap();

        assert!(published.is_publication());
        assert!(with_paper.is_publication());
        assert!(!active.is_publication());
    }

    #[test]
    fn test_org_deserializes_with_minimal_fields() {
        let org: Org = serde_json::from_str(
            r#"{"name":"Apollo Research","url":"https://apolloresearch.ai","type":"nonprofit","country":"UK"}"#,
        )
        .unwrap();
        assert_eq!(org.org_type, OrgType::Nonprofit);
        assert!(org.projects.is_empty());
        assert_eq!(org.slug(), "apollo-research");
    }
}
