pub mod aggregate;
pub mod seed;

pub use aggregate::{Project, ProjectId, ProjectStatus};
