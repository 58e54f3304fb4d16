pub mod client;
pub mod harvester;

pub use crate::domain::model::{CommitEntry, EmailSet, RepoSummary};
pub use crate::utils::error::Result;
