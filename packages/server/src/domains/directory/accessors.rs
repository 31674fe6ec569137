//! Pure accessors over the loaded dataset.
//!
//! Every lookup is a linear scan, recomputed per call. The dataset is
//! small and immutable, so no index structure is maintained.

use serde::Serialize;

use super::dataset::Dataset;
use super::models::{Benchmark, OpenProblem, Org, Person, Project};
use crate::common::slugify;

/// A project together with its owning organization.
#[derive(Debug, Clone, Copy)]
pub struct ProjectWithOrg<'a> {
    pub project: &'a Project,
    pub org: &'a Org,
}

/// A benchmark together with its owning organization.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkWithOrg<'a> {
    pub benchmark: &'a Benchmark,
    pub org: &'a Org,
}

/// A person together with their organization.
#[derive(Debug, Clone, Copy)]
pub struct PersonWithOrg<'a> {
    pub person: &'a Person,
    pub org: &'a Org,
}

/// Aggregate dataset counts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub orgs: usize,
    pub projects: usize,
    pub benchmarks: usize,
    pub people: usize,
    pub employees: u64,
    pub publications: usize,
}

impl Dataset {
    pub fn org_by_slug(&self, slug: &str) -> Option<&Org> {
        self.orgs.iter().find(|org| org.slug() == slug)
    }

    /// All projects across all orgs, in dataset order.
    pub fn all_projects(&self) -> Vec<ProjectWithOrg<'_>> {
        self.orgs
            .iter()
            .flat_map(|org| org.projects.iter().map(move |project| ProjectWithOrg { project, org }))
            .collect()
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<ProjectWithOrg<'_>> {
        self.all_projects()
            .into_iter()
            .find(|p| p.project.slug() == slug)
    }

    /// All benchmarks across all orgs, in dataset order.
    pub fn all_benchmarks(&self) -> Vec<BenchmarkWithOrg<'_>> {
        self.orgs
            .iter()
            .flat_map(|org| {
                org.benchmarks
                    .iter()
                    .map(move |benchmark| BenchmarkWithOrg { benchmark, org })
            })
            .collect()
    }

    pub fn benchmark_by_slug(&self, slug: &str) -> Option<BenchmarkWithOrg<'_>> {
        self.all_benchmarks()
            .into_iter()
            .find(|b| b.benchmark.slug() == slug)
    }

    /// All key people across all orgs, in dataset order.
    pub fn all_people(&self) -> Vec<PersonWithOrg<'_>> {
        self.orgs
            .iter()
            .flat_map(|org| org.key_people.iter().map(move |person| PersonWithOrg { person, org }))
            .collect()
    }

    pub fn person_by_slug(&self, slug: &str) -> Option<PersonWithOrg<'_>> {
        self.all_people()
            .into_iter()
            .find(|p| p.person.slug() == slug)
    }

    /// All projects that count as publications.
    pub fn publications(&self) -> Vec<ProjectWithOrg<'_>> {
        self.all_projects()
            .into_iter()
            .filter(|p| p.project.is_publication())
            .collect()
    }

    /// Projects that are not publications (active work).
    pub fn active_projects(&self) -> Vec<ProjectWithOrg<'_>> {
        self.all_projects()
            .into_iter()
            .filter(|p| !p.project.is_publication())
            .collect()
    }

    /// Projects related to `project` through any shared focus-area tag
    /// between the owning orgs. The reference project itself is excluded
    /// by slug comparison.
    pub fn related_projects(&self, project: &ProjectWithOrg<'_>, limit: usize) -> Vec<ProjectWithOrg<'_>> {
        let reference_slug = project.project.slug();
        let focus_areas = &project.org.focus_areas;

        self.all_projects()
            .into_iter()
            .filter(|candidate| {
                if candidate.project.slug() == reference_slug {
                    return false;
                }
                focus_areas
                    .iter()
                    .any(|area| candidate.org.focus_areas.contains(area))
            })
            .take(limit)
            .collect()
    }

    pub fn problem_by_slug(&self, slug: &str) -> Option<&OpenProblem> {
        self.problems.iter().find(|p| p.slug == slug)
    }

    /// Open problems whose focus area matches `area` (slug comparison, so
    /// "Scalable Oversight" and "scalable-oversight" agree).
    pub fn problems_for_focus_area(&self, area: &str) -> Vec<&OpenProblem> {
        let area_slug = slugify(area);
        self.problems
            .iter()
            .filter(|p| slugify(&p.focus_area) == area_slug)
            .collect()
    }

    /// Aggregate counts over the dataset.
    pub fn stats(&self) -> Stats {
        let projects: usize = self.orgs.iter().map(|org| org.projects.len()).sum();
        let benchmarks: usize = self.orgs.iter().map(|org| org.benchmarks.len()).sum();
        let people: usize = self.orgs.iter().map(|org| org.key_people.len()).sum();
        let employees: u64 = self
            .orgs
            .iter()
            .map(|org| u64::from(org.employees.unwrap_or(0)))
            .sum();
        let publications = self.publications().len();

        Stats {
            orgs: self.orgs.len(),
            projects,
            benchmarks,
            people,
            employees,
            publications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        let orgs: Vec<Org> = serde_json::from_str(
            r#"[
                {
                    "name": "Apollo Research",
                    "url": "https://apolloresearch.ai",
                    "type": "nonprofit",
                    "country": "UK",
                    "focus_areas": ["Evals", "Interpretability"],
                    "employees": 30,
                    "key_people": [{"name": "A. Researcher", "role": "Director"}],
                    "projects": [
                        {"name": "Deception Evals", "description": "Evaluating strategic deception", "status": "Active"},
                        {"name": "Sparse Probing", "status": "published", "citation_count": 40}
                    ],
                    "benchmarks": [
                        {"name": "Scheming Bench", "measures": "In-context scheming"}
                    ]
                },
                {
                    "name": "Center for AI Safety",
                    "url": "https://safe.ai",
                    "type": "nonprofit",
                    "country": "USA",
                    "focus_areas": ["Evals", "Robustness"],
                    "employees": 25,
                    "projects": [
                        {"name": "MMLU Safety Split", "paper_url": "https://arxiv.org/abs/1"}
                    ]
                },
                {
                    "name": "Governance Lab",
                    "url": "https://example.org",
                    "type": "think tank",
                    "country": "USA",
                    "focus_areas": ["Governance"],
                    "projects": [
                        {"name": "Compute Thresholds", "status": "Completed"}
                    ]
                }
            ]"#,
        )
        .unwrap();
        Dataset::from_orgs(orgs)
    }

    #[test]
    fn test_flattening_counts() {
        let ds = sample_dataset();
        assert_eq!(ds.all_projects().len(), 4);
        assert_eq!(ds.all_benchmarks().len(), 1);
        assert_eq!(ds.all_people().len(), 1);
    }

    #[test]
    fn test_lookup_by_slug() {
        let ds = sample_dataset();
        assert!(ds.org_by_slug("apollo-research").is_some());
        assert!(ds.org_by_slug("no-such-org").is_none());

        let project = ds.project_by_slug("deception-evals").unwrap();
        assert_eq!(project.org.name, "Apollo Research");

        let person = ds.person_by_slug("a-researcher").unwrap();
        assert_eq!(person.person.role, "Director");
    }

    #[test]
    fn test_publication_split() {
        let ds = sample_dataset();
        let pubs: Vec<_> = ds
            .publications()
            .iter()
            .map(|p| p.project.name.clone())
            .collect();
        assert_eq!(pubs, vec!["Sparse Probing", "MMLU Safety Split"]);
        assert_eq!(ds.active_projects().len(), 2);
    }

    #[test]
    fn test_related_projects_irreflexive() {
        let ds = sample_dataset();
        let reference = ds.project_by_slug("deception-evals").unwrap();
        let related = ds.related_projects(&reference, 5);

        assert!(related
            .iter()
            .all(|p| p.project.slug() != "deception-evals"));
        // Shares the "Evals" tag through Center for AI Safety.
        assert!(related
            .iter()
            .any(|p| p.project.name == "MMLU Safety Split"));
        // Governance Lab shares no tag with Apollo Research.
        assert!(related
            .iter()
            .all(|p| p.project.name != "Compute Thresholds"));
    }

    #[test]
    fn test_related_projects_limit() {
        let ds = sample_dataset();
        let reference = ds.project_by_slug("deception-evals").unwrap();
        assert!(ds.related_projects(&reference, 1).len() <= 1);
    }

    #[test]
    fn test_stats() {
        let ds = sample_dataset();
        let stats = ds.stats();
        assert_eq!(stats.orgs, 3);
        assert_eq!(stats.projects, 4);
        assert_eq!(stats.benchmarks, 1);
        assert_eq!(stats.people, 1);
        assert_eq!(stats.employees, 55);
        assert_eq!(stats.publications, 2);
    }

    #[test]
    fn test_problems_for_focus_area() {
        let ds = sample_dataset();
        let problems = ds.problems_for_focus_area("Interpretability");
        assert!(!problems.is_empty());
        assert!(problems
            .iter()
            .all(|p| slugify(&p.focus_area) == "interpretability"));
        // Slugged spelling matches too.
        assert_eq!(
            ds.problems_for_focus_area("scalable-oversight").len(),
            ds.problems_for_focus_area("Scalable Oversight").len()
        );
    }
}
