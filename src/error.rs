//! Error types for milestone-changes using thiserror.

use thiserror::Error;

/// Errors from GitHub API operations.
///
/// Client failures are carried unchanged in [`GitHubError::Api`]; the milestone
/// operations never wrap them a second time.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error(
        "GitHub authentication failed: no valid auth found. Run 'gh auth login' or set GITHUB_TOKEN environment variable"
    )]
    AuthenticationFailed,

    #[error("GitHub API request failed: {0}")]
    Api(#[source] Box<octocrab::Error>),

    #[error("Milestone #{number} not found")]
    MilestoneNotFound { number: u64 },

    #[error("Invalid repository '{0}': expected owner/name or a GitHub URL")]
    InvalidRepository(String),
}

impl From<octocrab::Error> for GitHubError {
    fn from(e: octocrab::Error) -> Self {
        GitHubError::Api(Box::new(e))
    }
}
