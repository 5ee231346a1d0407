//! GitHub token discovery for the CLI.
//!
//! Auth order:
//! 1. Check `gh auth status` (gh CLI)
//! 2. Fall back to GITHUB_TOKEN env var
//! 3. Fall back to GH_TOKEN env var

use std::env;
use std::process::Command;

use tracing::debug;

use crate::error::GitHubError;

const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Get a GitHub token, preferring the gh CLI over environment variables.
pub fn get_github_token() -> Result<String, GitHubError> {
    if let Some(token) = get_token_from_gh_cli() {
        debug!("Using token from gh CLI");
        return Ok(token);
    }

    get_token_from_env().ok_or(GitHubError::AuthenticationFailed)
}

/// First non-empty token among GITHUB_TOKEN and GH_TOKEN.
pub fn get_token_from_env() -> Option<String> {
    TOKEN_ENV_VARS.iter().find_map(|name| {
        env::var(name)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .inspect(|_| debug!(var = name, "Using token from environment"))
    })
}

/// Try to get a token from the gh CLI.
fn get_token_from_gh_cli() -> Option<String> {
    let status = Command::new("gh")
        .args(["auth", "status"])
        .output()
        .ok()?;

    if !status.status.success() {
        return None;
    }

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .ok()?;

    if output.status.success() {
        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !token.is_empty() {
            return Some(token);
        }
    }

    None
}
