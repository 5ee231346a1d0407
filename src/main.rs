//! milestone-changes - CLI entry point.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use milestone_changes::github::{OctocrabApi, get_github_token, parse_repository};
use milestone_changes::milestone::{DEFAULT_MILESTONE_PREFIX, MilestoneOptions};
use milestone_changes::{
    IssueRecord, IssueState, get_issues_by_milestone_with_options, get_milestone_by_title,
};

/// List the issues and PRs of a milestone closed since the last release in its series.
#[derive(Parser, Debug)]
#[command(name = "milestone-changes")]
#[command(about = "List milestone issues closed since the last release in the series")]
#[command(version)]
struct Cli {
    /// Milestone title, e.g. "Gutenberg 16.2"
    milestone: String,

    /// Repository as owner/name or a GitHub URL
    #[arg(short, long)]
    repo: String,

    /// Issue state filter
    #[arg(long, value_enum)]
    state: Option<IssueState>,

    /// Prefix stripped from the milestone title to get the release series
    #[arg(long, default_value = DEFAULT_MILESTONE_PREFIX)]
    prefix: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log API requests to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let (owner, repo) = parse_repository(&cli.repo).context("Could not parse repository")?;

    let token = get_github_token().context("GitHub authentication required")?;
    let api = OctocrabApi::with_token(&token).context("Failed to build GitHub client")?;

    let Some(milestone) = get_milestone_by_title(&api, &owner, &repo, &cli.milestone)
        .await
        .context("Failed to look up milestone")?
    else {
        bail!("No milestone titled '{}' in {}/{}", cli.milestone, owner, repo);
    };

    let options = MilestoneOptions { prefix: cli.prefix };
    let issues = get_issues_by_milestone_with_options(
        &api,
        &owner,
        &repo,
        milestone.number,
        cli.state,
        &options,
    )
    .await
    .with_context(|| format!("Failed to fetch issues for milestone #{}", milestone.number))?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&issues)?);
        }
        OutputFormat::Text => print_issues(&issues),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("milestone_changes=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_issues(issues: &[IssueRecord]) {
    if issues.is_empty() {
        println!("No matching issues.");
        return;
    }

    for issue in issues {
        let marker = if issue.is_pull_request() { " [PR]" } else { "" };
        println!("#{}{} {}", issue.number, marker, issue.title);
    }
}
