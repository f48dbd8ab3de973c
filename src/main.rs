//! gitval - structured commit data from the git CLI
//!
//! Binary entry point.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gitval::git::{CommandRunner, Config, FIELDS, Git, GitExecutor};
use gitval::model::CommitEntry;

#[derive(Parser)]
#[command(name = "gitval")]
#[command(about = "Query commit metadata, diffs and whitespace checks from git")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Run as if started in this repository
    #[arg(short = 'C', long = "repo", global = true)]
    repo: Option<PathBuf>,

    /// Log every git invocation (also enabled by a non-empty DEBUG)
    #[arg(long, global = true)]
    debug: bool,

    /// Pathspec pattern excluded from `check` (overrides GIT_CHECK_EXCLUDE)
    #[arg(long, global = true)]
    exclude: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every field of each commit in a range, newest first
    Commits {
        /// Single commit (itself and ancestors) or an A..B / A...B range
        range: String,
    },

    /// Check one commit for whitespace errors
    Check { commit: String },

    /// Print the patch of one commit
    Show { commit: String },

    /// Resolve a ref to its commit hash
    Resolve { name: String },

    /// Print the hash of HEAD
    Head,

    /// Print the hash of FETCH_HEAD
    FetchHead,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = Config::from_env()
        .with_debug(cli.debug)
        .with_check_exclude(cli.exclude);
    init_tracing(config.debug)?;

    let executor = match cli.repo {
        Some(path) => GitExecutor::with_repo_path(path),
        None => GitExecutor::new(),
    };
    let git = Git::new(executor).with_config(config);

    let clean = run(&git, cli.command, &mut io::stdout().lock())?;
    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Install a stderr subscriber
fn init_tracing(debug: bool) -> color_eyre::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_filter(debug, rust_log.as_deref())?)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// `RUST_LOG` sets the base filter; debug always lets invocation logs through
fn tracing_filter(debug: bool, rust_log: Option<&str>) -> color_eyre::Result<EnvFilter> {
    let default_level = if debug { "info" } else { "warn" };
    let mut filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));
    if debug {
        filter = filter.add_directive("gitval::git=info".parse()?);
    }
    Ok(filter)
}

/// Run one subcommand, writing its output to `out`
///
/// Returns `false` when `check` found whitespace problems.
fn run<R: CommandRunner>(
    git: &Git<R>,
    command: Commands,
    out: &mut impl Write,
) -> color_eyre::Result<bool> {
    match command {
        Commands::Commits { range } => write_commits(out, &git.commits(&range)?)?,
        Commands::Check { commit } => {
            let report = git.check_report(&commit)?;
            out.write_all(&report.raw)?;
            return Ok(report.is_clean());
        }
        Commands::Show { commit } => out.write_all(&git.show(&commit)?)?,
        Commands::Resolve { name } => writeln!(out, "{}", git.resolve_ref(&name)?)?,
        Commands::Head => writeln!(out, "{}", git.head_commit()?)?,
        Commands::FetchHead => writeln!(out, "{}", git.fetch_head_commit()?)?,
    }

    Ok(true)
}

/// Write commits separated by a blank line
fn write_commits(out: &mut impl Write, commits: &[CommitEntry]) -> io::Result<()> {
    for (i, commit) in commits.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_commit(out, commit)?;
    }
    Ok(())
}

/// Write `name: value` lines in field table order
///
/// Continuation lines of multi-line values are indented by two spaces.
fn write_commit(out: &mut impl Write, commit: &CommitEntry) -> io::Result<()> {
    for field in FIELDS.iter() {
        let value = commit.get(field.name).unwrap_or_default();
        writeln!(out, "{}: {}", field.name, value.replace('\n', "\n  "))?;
    }
    Ok(())
}
