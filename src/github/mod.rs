//! GitHub API access using octocrab.

pub mod auth;
pub mod client;
pub mod models;
pub mod pagination;
pub mod remote;

pub use auth::get_github_token;
pub use client::{OctocrabApi, RepositoryApi};
pub use models::{IssueQuery, IssueRecord, IssueState, Milestone, Page, Release};
pub use remote::parse_repository;
