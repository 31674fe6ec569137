//! Bounded prompt contexts assembled from the dataset.
//!
//! Every builder caps how much of the dataset lands in the prompt so
//! prompt size stays bounded regardless of dataset growth.

use std::fmt::Write;

use anthropic_client::truncate_to_char_boundary;

use crate::domains::directory::Dataset;

/// Caps on dataset slices embedded into prompts.
pub const SEARCH_PUBLICATION_CAP: usize = 100;
pub const SEARCH_PROJECT_CAP: usize = 50;
pub const MATCH_ITEM_CAP: usize = 200;
pub const MATCH_DESCRIPTION_BYTES: usize = 100;
pub const ITN_PUBLICATION_CAP: usize = 100;
pub const ITN_ORG_CAP: usize = 50;
pub const ITN_PUBLICATION_SAMPLE: usize = 30;
pub const READING_COLLECT_CAP: usize = 200;
pub const READING_PROMPT_CAP: usize = 100;

/// Compact index of the whole dataset for the search endpoint.
pub fn search_context(dataset: &Dataset) -> String {
    let publications = dataset.publications();
    let projects = dataset.active_projects();
    let benchmarks = dataset.all_benchmarks();

    let mut context = String::new();

    let _ = writeln!(context, "PUBLICATIONS ({} total):", publications.len());
    for p in publications.iter().take(SEARCH_PUBLICATION_CAP) {
        let citations = match p.project.citation_count {
            Some(n) => format!(" ({} citations)", n),
            None => String::new(),
        };
        let _ = writeln!(context, "- \"{}\" by {}{}", p.project.name, p.org.name, citations);
    }

    let _ = writeln!(context, "\nACTIVE PROJECTS ({} total):", projects.len());
    for p in projects.iter().take(SEARCH_PROJECT_CAP) {
        let status = p
            .project
            .status
            .map(|s| s.as_str())
            .unwrap_or("unknown");
        let _ = writeln!(context, "- \"{}\" by {} [{}]", p.project.name, p.org.name, status);
    }

    let _ = writeln!(context, "\nBENCHMARKS ({} total):", benchmarks.len());
    for b in &benchmarks {
        let _ = writeln!(
            context,
            "- \"{}\" by {}: {}",
            b.benchmark.name,
            b.org.name,
            b.benchmark.measures.as_deref().unwrap_or_default()
        );
    }

    let _ = writeln!(context, "\nORGANIZATIONS ({} total):", dataset.orgs.len());
    for org in &dataset.orgs {
        let _ = writeln!(
            context,
            "- {} ({}): {}",
            org.name,
            org.org_type.as_str(),
            org.focus_areas.join(", ")
        );
    }

    context
}

/// Compact list of all research items for the idea-match endpoint.
/// Descriptions are truncated to keep the per-item footprint small.
pub fn research_index(dataset: &Dataset) -> String {
    let mut context = String::new();

    for p in dataset.all_projects().iter().take(MATCH_ITEM_CAP) {
        let description = p
            .project
            .description
            .as_deref()
            .map(|d| truncate_to_char_boundary(d, MATCH_DESCRIPTION_BYTES))
            .unwrap_or("No description");
        let _ = writeln!(
            context,
            "- \"{}\" ({}): {}",
            p.project.name, p.org.name, description
        );
    }

    context
}

/// Context for the ITN endpoint: publication titles, org list, and the
/// open-problem titles.
pub struct ItnContext {
    pub publications: Vec<String>,
    pub orgs: Vec<String>,
    pub problems: String,
}

pub fn itn_context(dataset: &Dataset) -> ItnContext {
    let publications: Vec<String> = dataset
        .publications()
        .iter()
        .take(ITN_PUBLICATION_CAP)
        .map(|p| format!("\"{}\" by {}", p.project.name, p.org.name))
        .collect();

    let orgs: Vec<String> = dataset
        .orgs
        .iter()
        .take(ITN_ORG_CAP)
        .map(|org| {
            format!(
                "{} ({}): {}",
                org.name,
                org.org_type.as_str(),
                org.focus_areas.join(", ")
            )
        })
        .collect();

    let problems = dataset
        .problems
        .iter()
        .map(|p| format!("- {} ({})", p.title, p.focus_area))
        .collect::<Vec<_>>()
        .join("\n");

    ItnContext {
        publications,
        orgs,
        problems,
    }
}

/// Publications for the reading-path endpoint, most cited first.
pub fn reading_publications(dataset: &Dataset) -> String {
    let mut publications: Vec<(String, String, Option<u32>)> = dataset
        .publications()
        .iter()
        .map(|p| {
            (
                p.project.name.clone(),
                p.org.name.clone(),
                p.project.citation_count,
            )
        })
        .collect();

    publications.sort_by(|a, b| b.2.unwrap_or(0).cmp(&a.2.unwrap_or(0)));
    publications.truncate(READING_COLLECT_CAP);

    publications
        .iter()
        .take(READING_PROMPT_CAP)
        .map(|(title, org, citations)| {
            let suffix = match citations {
                Some(n) => format!(" [{} citations]", n),
                None => String::new(),
            };
            format!("- \"{}\" ({}){}", title, org, suffix)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::directory::Org;

    fn dataset_with_projects(count: usize) -> Dataset {
        let projects: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"name":"Paper {i}","status":"published","citation_count":{i}}}"#
                )
            })
            .collect();
        let org = format!(
            r#"[{{"name":"Big Org","url":"https://example.org","type":"nonprofit","country":"USA","focus_areas":["Evals"],"projects":[{}]}}]"#,
            projects.join(",")
        );
        let orgs: Vec<Org> = serde_json::from_str(&org).unwrap();
        Dataset::from_orgs(orgs)
    }

    #[test]
    fn test_search_context_caps_publications() {
        let ds = dataset_with_projects(150);
        let context = search_context(&ds);
        // Header reports the true total, list is capped.
        assert!(context.contains("PUBLICATIONS (150 total):"));
        let listed = context
            .lines()
            .filter(|l| l.starts_with("- \"Paper "))
            .count();
        assert_eq!(listed, SEARCH_PUBLICATION_CAP);
    }

    #[test]
    fn test_research_index_caps_and_truncates() {
        let ds = dataset_with_projects(250);
        let index = research_index(&ds);
        assert_eq!(index.lines().count(), MATCH_ITEM_CAP);
        assert!(index.contains("No description"));
    }

    #[test]
    fn test_itn_context_caps() {
        let ds = dataset_with_projects(150);
        let context = itn_context(&ds);
        assert_eq!(context.publications.len(), ITN_PUBLICATION_CAP);
        assert_eq!(context.orgs.len(), 1);
        assert!(context.problems.contains("Scalable Oversight"));
    }

    #[test]
    fn test_reading_publications_sorted_by_citations() {
        let ds = dataset_with_projects(10);
        let listing = reading_publications(&ds);
        let first = listing.lines().next().unwrap();
        // Paper 9 has the most citations.
        assert!(first.contains("Paper 9"));
        assert!(first.contains("[9 citations]"));
    }
}
