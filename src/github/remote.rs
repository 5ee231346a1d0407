//! Repository identification from CLI input.

use crate::error::GitHubError;

/// Parse `owner/name`, an SSH remote, or an HTTPS GitHub URL into `(owner, repo)`.
pub fn parse_repository(input: &str) -> Result<(String, String), GitHubError> {
    let invalid = || GitHubError::InvalidRepository(input.to_string());

    // Handle SSH format: git@github.com:owner/repo.git
    if let Some(path) = input.strip_prefix("git@github.com:") {
        return parse_owner_repo_path(path).ok_or_else(invalid);
    }

    // Handle HTTPS format: https://github.com/owner/repo.git
    if input.contains("github.com/") {
        let path = input.split("github.com/").nth(1).ok_or_else(invalid)?;
        return parse_owner_repo_path(path).ok_or_else(invalid);
    }

    if input.contains("://") || input.contains('@') {
        return Err(invalid());
    }

    parse_owner_repo_path(input).ok_or_else(invalid)
}

fn parse_owner_repo_path(path: &str) -> Option<(String, String)> {
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let mut parts = path.split('/');

    match (parts.next(), parts.next()) {
        (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
            Some((owner.to_string(), repo.to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_slash_name() {
        let (owner, repo) = parse_repository("WordPress/gutenberg").unwrap();
        assert_eq!(owner, "WordPress");
        assert_eq!(repo, "gutenberg");
    }

    #[test]
    fn test_parse_ssh_url() {
        let (owner, repo) = parse_repository("git@github.com:owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_https_url() {
        let (owner, repo) = parse_repository("https://github.com/owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_https_url_with_extra_path() {
        let (owner, repo) =
            parse_repository("https://github.com/owner/repo/milestone/12").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_invalid_inputs() {
        assert!(parse_repository("https://gitlab.com/owner/repo").is_err());
        assert!(parse_repository("just-a-name").is_err());
        assert!(parse_repository("/repo").is_err());
        assert!(matches!(
            parse_repository("owner/"),
            Err(GitHubError::InvalidRepository(_))
        ));
    }
}
