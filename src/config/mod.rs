use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, Parser)]
#[command(name = "commit-mail-finder")]
#[command(about = "Find email addresses in GitHub commit history")]
pub struct CliConfig {
    /// GitHub repository URL to search for emails.
    /// Example: https://github.com/torvalds/linux
    #[arg(long)]
    pub repo: Option<String>,

    /// GitHub username or profile URL to search across all of the user's
    /// repositories. Example: torvalds or https://github.com/torvalds
    #[arg(long)]
    pub username: Option<String>,

    /// GitHub API token to increase the rate limit.
    /// Get one from: https://github.com/settings/tokens
    #[arg(long)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)
    }
}
