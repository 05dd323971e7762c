use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Opens a pull request on GitHub for the project that the "origin" remote
/// points to, then assigns it and labels it as in need of review.
///
/// The default head of the pull request is the current branch. Both base and
/// head can be given as "branch", "owner:branch" or "owner/repo:branch". The
/// command aborts if the current branch has uncommitted changes or local
/// commits not yet pushed to its upstream branch.
///
/// Without --message or --file a text editor opens in which title and body are
/// entered the same way as a git commit message.
#[derive(Debug, Parser)]
#[command(name = "hubplus", version, disable_help_flag = true)]
pub struct Args {
    /// The github handle of the person you wish to assign
    #[arg(short, long)]
    pub assignee: String,

    /// Open the resulting PR in your browser
    #[arg(short = 'o', long)]
    pub browse: bool,

    /// Force open the PR even if there are unpushed changes on the current branch
    #[arg(short, long)]
    pub force: bool,

    /// Path to a file that will be read to populate the PR's first comment
    #[arg(short = 'F', long)]
    pub file: Option<PathBuf>,

    /// A string that will populate the PR's first comment
    #[arg(short, long)]
    pub message: Option<String>,

    /// An existing issue ID or URL to convert into a PR with this branch (deprecated)
    #[arg(short, long)]
    pub issue: Option<String>,

    /// The branch you want to merge your changes into
    #[arg(short, long)]
    pub base: Option<String>,

    /// The branch that has your changes
    #[arg(short = 'h', long)]
    pub head: Option<String>,

    /// Path to the hubplus config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}
