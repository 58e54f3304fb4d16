use regex::Regex;
use std::sync::LazyLock;

static GITHUB_OWNER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([^/?#\s]+)").unwrap());

static GITHUB_REPO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([^/?#\s]+)/([^/?#\s]+)").unwrap());

/// What a single run is pointed at: one repository, or every repository
/// owned by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    Repo { owner: String, repo: String },
    User { username: String },
}

/// First path segment after a github.com host, if the input looks like a
/// GitHub URL at all.
pub fn extract_owner(input: &str) -> Option<String> {
    GITHUB_OWNER_RE
        .captures(input)
        .map(|caps| caps[1].to_string())
}

/// Owner and repository name from a `github.com/<owner>/<repo>` URL.
pub fn parse_repo_url(input: &str) -> Option<(String, String)> {
    GITHUB_REPO_RE
        .captures(input)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}

impl TargetSpec {
    pub fn from_repo_url(url: &str) -> Option<Self> {
        parse_repo_url(url).map(|(owner, repo)| Self::Repo { owner, repo })
    }

    /// A `--username` argument may be a bare username or a profile URL.
    pub fn from_user_input(input: &str) -> Option<Self> {
        if input.contains("github.com") {
            extract_owner(input).map(|username| Self::User { username })
        } else if input.is_empty() {
            None
        } else {
            Some(Self::User {
                username: input.to_string(),
            })
        }
    }
}
