use crate::config::CliConfig;
use crate::core::client::GithubClient;
use crate::domain::model::{CommitEntry, EmailSet};
use crate::domain::target::{parse_repo_url, TargetSpec};
use crate::utils::error::HarvestError;

/// Collects unique commit author emails for one target. All upstream
/// failures are reported as advisory stdout messages and the accumulated
/// set survives; nothing here terminates the run.
pub struct Harvester {
    client: GithubClient,
}

impl Harvester {
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }

    /// Dispatch on the configured target. `--repo` takes precedence over
    /// `--username`; `None` means no target was given and the caller should
    /// show help instead. Nothing is fetched in that case.
    pub async fn harvest(&self, config: &CliConfig) -> Option<EmailSet> {
        if let Some(repo_url) = &config.repo {
            Some(self.harvest_repo(repo_url).await)
        } else if let Some(username) = &config.username {
            Some(self.harvest_user(username).await)
        } else {
            None
        }
    }

    /// Emails from a single repository URL. An unparseable URL yields an
    /// empty set and a diagnostic.
    pub async fn harvest_repo(&self, repo_url: &str) -> EmailSet {
        let mut emails = EmailSet::new();

        let Some((owner, repo)) = parse_repo_url(repo_url) else {
            report(&HarvestError::InvalidTarget {
                input: repo_url.to_string(),
            });
            return emails;
        };

        self.collect_repo_emails(&owner, &repo, &mut emails).await;
        emails
    }

    /// Emails from every repository owned by a user. A failing repository is
    /// reported and the loop moves on to the next one.
    pub async fn harvest_user(&self, username_or_url: &str) -> EmailSet {
        let mut emails = EmailSet::new();

        let Some(TargetSpec::User { username }) = TargetSpec::from_user_input(username_or_url)
        else {
            report(&HarvestError::InvalidTarget {
                input: username_or_url.to_string(),
            });
            return emails;
        };

        let repos = match self.client.list_repos(&username).await {
            Ok(repos) => repos,
            Err(e) => {
                report(&e);
                return emails;
            }
        };

        for repo in repos {
            println!("Searching in {}/{}...", username, repo.name);
            self.collect_repo_emails(&username, &repo.name, &mut emails)
                .await;
        }

        emails
    }

    async fn collect_repo_emails(&self, owner: &str, repo: &str, emails: &mut EmailSet) {
        let commits = match self.client.list_commits(owner, repo).await {
            Ok(commits) => commits,
            Err(e) => {
                report(&e);
                return;
            }
        };

        for value in commits {
            match serde_json::from_value::<CommitEntry>(value).map_err(HarvestError::from) {
                Ok(entry) => match entry.author_email() {
                    Some(email) => {
                        emails.insert(email.to_string());
                    }
                    None => {
                        tracing::debug!(
                            "Commit by {} in {}/{} has no author email, skipped",
                            entry.author_name().unwrap_or("unknown"),
                            owner,
                            repo
                        )
                    }
                },
                Err(e) => {
                    tracing::warn!("Skipping commit in {}/{}: {}", owner, repo, e)
                }
            }
        }
    }
}

/// Advisory diagnostics go to stdout; the run always continues with
/// whatever was accumulated so far.
fn report(e: &HarvestError) {
    match e {
        HarvestError::RateLimited
        | HarvestError::UpstreamStatus { .. }
        | HarvestError::InvalidTarget { .. } => println!("{}", e),
        other => println!("Request failed: {}", other),
    }
}
