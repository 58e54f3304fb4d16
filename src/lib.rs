pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{client::GithubClient, harvester::Harvester};
pub use domain::target::TargetSpec;
pub use utils::error::{HarvestError, Result};
