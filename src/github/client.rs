//! The GitHub REST surface the milestone operations depend on.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::debug;

use crate::error::GitHubError;

use super::models::{IssueQuery, IssueRecord, Milestone, Page, Release};

/// GitHub caps `per_page` at 100.
const PER_PAGE: u8 = 100;

/// Paginated repository endpoints used to resolve milestones and releases.
///
/// This abstraction allows mocking the GitHub API in tests. Pages are
/// numbered from 1.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// List one page of the repository's milestones.
    async fn list_milestones(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<Page<Milestone>, GitHubError>;

    /// Fetch a single milestone by number.
    async fn get_milestone(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Milestone, GitHubError>;

    /// List one page of the repository's releases, newest first.
    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<Page<Release>, GitHubError>;

    /// List one page of issues and pull requests matching `query`.
    async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        query: &IssueQuery,
        page: u32,
    ) -> Result<Page<IssueRecord>, GitHubError>;
}

/// [`RepositoryApi`] backed by an octocrab client.
#[derive(Clone)]
pub struct OctocrabApi {
    octocrab: Octocrab,
}

impl OctocrabApi {
    /// Wrap a pre-configured octocrab client.
    ///
    /// This allows dependency injection for testing with mock servers.
    pub fn new(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Build a client authenticated with a personal token.
    pub fn with_token(token: &str) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self::new(octocrab))
    }

    async fn get_page<T, P>(
        &self,
        route: String,
        params: &P,
        page: u32,
    ) -> Result<Page<T>, GitHubError>
    where
        T: serde::de::DeserializeOwned + Send,
        P: Serialize + Sync,
    {
        debug!(%route, page, "Fetching page");

        let response: octocrab::Page<T> = self.octocrab.get(&route, Some(params)).await?;

        Ok(Page {
            items: response.items,
            next: response.next.is_some().then_some(page + 1),
        })
    }
}

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

#[derive(Serialize)]
struct IssueParams {
    milestone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    since: Option<String>,
    per_page: u8,
    page: u32,
}

#[async_trait]
impl RepositoryApi for OctocrabApi {
    async fn list_milestones(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<Page<Milestone>, GitHubError> {
        let params = PageParams {
            per_page: PER_PAGE,
            page,
        };
        self.get_page(format!("/repos/{owner}/{repo}/milestones"), &params, page)
            .await
    }

    async fn get_milestone(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Milestone, GitHubError> {
        let route = format!("/repos/{owner}/{repo}/milestones/{number}");
        debug!(%route, "Fetching milestone");

        match self.octocrab.get::<Milestone, _, ()>(&route, None).await {
            Ok(milestone) => Ok(milestone),
            Err(octocrab::Error::GitHub { source, .. }) if source.message == "Not Found" => {
                Err(GitHubError::MilestoneNotFound { number })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<Page<Release>, GitHubError> {
        let params = PageParams {
            per_page: PER_PAGE,
            page,
        };
        self.get_page(format!("/repos/{owner}/{repo}/releases"), &params, page)
            .await
    }

    async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        query: &IssueQuery,
        page: u32,
    ) -> Result<Page<IssueRecord>, GitHubError> {
        let params = IssueParams {
            milestone: query.milestone.to_string(),
            state: query.state.map(|s| s.as_str()),
            since: query.since_param(),
            per_page: PER_PAGE,
            page,
        };
        self.get_page(format!("/repos/{owner}/{repo}/issues"), &params, page)
            .await
    }
}
