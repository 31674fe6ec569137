// HTTP routes
pub mod advisor;
pub mod directory;
pub mod health;

pub use advisor::*;
pub use directory::*;
pub use health::*;
