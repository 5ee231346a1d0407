//! GitHub records consumed by the milestone operations.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A repository milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// A repository release.
///
/// Drafts have no `published_at`; GitHub also allows releases without a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub name: Option<String>,
    pub tag_name: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// An issue or pull request as returned by the issues endpoint.
///
/// Only the fields the collector reads are typed. Everything else the API
/// returned is kept in `extra` and serialized back out untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IssueRecord {
    /// Whether this record is a pull request rather than a plain issue.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Issue state filter accepted by the issues endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
    All,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::All => "all",
        }
    }
}

/// Filters for listing the issues of one milestone.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueQuery {
    pub milestone: u64,
    pub state: Option<IssueState>,
    pub since: Option<DateTime<Utc>>,
}

impl IssueQuery {
    /// `since` formatted the way GitHub documents it (`YYYY-MM-DDTHH:MM:SSZ`).
    pub fn since_param(&self) -> Option<String> {
        self.since
            .map(|s| s.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

/// One page of results plus the number of the page after it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<u32>,
}

impl<T> Page<T> {
    /// A page with no successor.
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }
}
