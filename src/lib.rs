//! milestone-changes - Lists what changed in a GitHub milestone since the last release in its series.
//!
//! # Overview
//!
//! Given a milestone such as `Gutenberg 16.2`, the series `16.2` is derived from the
//! title, the newest release named after that series is located, and the issues and
//! pull requests of the milestone closed after that release was published are collected.
//!
//! All GitHub access goes through the [`github::RepositoryApi`] trait, so the operations
//! in [`milestone`] work against octocrab or any other implementation.

pub mod error;
pub mod github;
pub mod milestone;

// Re-export commonly used types
pub use error::GitHubError;
pub use github::{IssueRecord, IssueState, Milestone, OctocrabApi, Release, RepositoryApi};
pub use milestone::{
    MilestoneOptions, Series, get_issues_by_milestone, get_issues_by_milestone_with_options,
    get_milestone_by_title,
};
