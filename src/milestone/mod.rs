//! Milestone lookup and the "closed since the last release" issue collector.

pub mod series;

use std::pin::pin;

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use tracing::{debug, warn};

use crate::error::GitHubError;
use crate::github::client::RepositoryApi;
use crate::github::models::{IssueQuery, IssueRecord, IssueState, Milestone, Release};
use crate::github::pagination::paginate;

pub use series::{DEFAULT_MILESTONE_PREFIX, Series};

/// Options for deriving a release series from a milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneOptions {
    /// Literal prefix stripped from milestone titles.
    pub prefix: String,
}

impl Default for MilestoneOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_MILESTONE_PREFIX.to_string(),
        }
    }
}

/// Find the first milestone, in API order, whose title equals `title` exactly.
///
/// Stops requesting pages as soon as a match is found. Returns `Ok(None)`
/// once every page has been scanned without a match.
pub async fn get_milestone_by_title<A: RepositoryApi + ?Sized>(
    api: &A,
    owner: &str,
    repo: &str,
    title: &str,
) -> Result<Option<Milestone>, GitHubError> {
    let mut pages = pin!(paginate(move |page| api.list_milestones(owner, repo, page)));

    while let Some(milestones) = pages.try_next().await? {
        if let Some(milestone) = milestones.into_iter().find(|m| m.title == title) {
            debug!(number = milestone.number, %title, "Found milestone");
            return Ok(Some(milestone));
        }
    }

    debug!(%title, "No milestone with that title");
    Ok(None)
}

/// Collect the issues and PRs of a milestone using the default title prefix.
///
/// See [`get_issues_by_milestone_with_options`].
pub async fn get_issues_by_milestone<A: RepositoryApi + ?Sized>(
    api: &A,
    owner: &str,
    repo: &str,
    milestone: u64,
    state: Option<IssueState>,
) -> Result<Vec<IssueRecord>, GitHubError> {
    get_issues_by_milestone_with_options(
        api,
        owner,
        repo,
        milestone,
        state,
        &MilestoneOptions::default(),
    )
    .await
}

/// Collect the issues and PRs of a milestone closed after the latest release
/// in the milestone's series.
///
/// Steps:
/// 1. Fetch the milestone and derive its series from the title
/// 2. Find the first release whose name starts with the series
/// 3. List the milestone's issues, passing the release date as `since`
/// 4. Keep only records closed strictly after the release was published
///
/// `since` only narrows by update time on the server, so step 4 is always
/// applied when a release was found. Without a release every record is
/// returned. Records keep the order the API returned them in.
pub async fn get_issues_by_milestone_with_options<A: RepositoryApi + ?Sized>(
    api: &A,
    owner: &str,
    repo: &str,
    milestone: u64,
    state: Option<IssueState>,
    options: &MilestoneOptions,
) -> Result<Vec<IssueRecord>, GitHubError> {
    let Milestone { title, .. } = api.get_milestone(owner, repo, milestone).await?;

    let series = Series::derive(&title, &options.prefix);
    if !series.is_prefixed() {
        warn!(
            %title,
            prefix = %options.prefix,
            "Milestone title lacks the expected prefix; matching releases against the full title"
        );
    }

    let cutoff = find_latest_release(api, owner, repo, &series)
        .await?
        .and_then(|release| release.published_at);

    let query = IssueQuery {
        milestone,
        state,
        since: cutoff,
    };
    let query = &query;

    let issues: Vec<IssueRecord> =
        paginate(move |page| api.list_issues(owner, repo, query, page))
            .try_concat()
            .await?;

    debug!(count = issues.len(), milestone, "Fetched milestone issues");

    Ok(match cutoff {
        Some(cutoff) => closed_after(issues, cutoff),
        None => issues,
    })
}

/// Find the first published release, in API order, belonging to `series`.
///
/// Drafts and unnamed releases never match.
pub async fn find_latest_release<A: RepositoryApi + ?Sized>(
    api: &A,
    owner: &str,
    repo: &str,
    series: &Series,
) -> Result<Option<Release>, GitHubError> {
    let mut pages = pin!(paginate(move |page| api.list_releases(owner, repo, page)));

    while let Some(releases) = pages.try_next().await? {
        let found = releases.into_iter().find(|release| {
            release.published_at.is_some()
                && release.name.as_deref().is_some_and(|name| series.matches(name))
        });

        if let Some(release) = found {
            debug!(tag = %release.tag_name, series = series.key(), "Found latest release in series");
            return Ok(Some(release));
        }
    }

    debug!(series = series.key(), "No published release in series");
    Ok(None)
}

/// Keep records closed strictly after `cutoff`. Records never closed are dropped.
pub fn closed_after(issues: Vec<IssueRecord>, cutoff: DateTime<Utc>) -> Vec<IssueRecord> {
    issues
        .into_iter()
        .filter(|issue| issue.closed_at.is_some_and(|closed| closed > cutoff))
        .collect()
}
