use serde::Deserialize;
use std::collections::HashSet;

/// Unique author emails collected over one run.
pub type EmailSet = HashSet<String>;

/// One element of `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitEntry {
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub author: Option<CommitAuthor>,
}

/// Author block of a commit. GitHub can omit either field, so both are
/// optional; a missing email is skipped rather than recorded as "".
#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// One element of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
}

impl CommitEntry {
    pub fn author_email(&self) -> Option<&str> {
        self.commit
            .author
            .as_ref()
            .and_then(|a| a.email.as_deref())
            .filter(|e| !e.is_empty())
    }

    pub fn author_name(&self) -> Option<&str> {
        self.commit.author.as_ref().and_then(|a| a.name.as_deref())
    }
}
