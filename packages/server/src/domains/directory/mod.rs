// Directory domain: the static dataset and pure accessors over it

pub mod accessors;
pub mod dataset;
pub mod models;
pub mod problems;

pub use accessors::{BenchmarkWithOrg, PersonWithOrg, ProjectWithOrg, Stats};
pub use dataset::Dataset;
pub use models::{
    Benchmark, Difficulty, OpenProblem, Org, OrgType, Person, ProblemStatus, Project,
    ProjectStatus,
};
