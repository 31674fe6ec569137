// Domain modules

pub mod advisor;
pub mod directory;
pub mod search;
