use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use msbuild_selector::cli::input::{CliArgs, Command};
/// use std::path::PathBuf;
///
/// let parser = CliArgs::parse_from(["", "-vv", "project"]);
/// assert_eq!(2, parser.verbose);
/// assert_eq!(parser.command, Command::Project);
///
/// let parser = CliArgs::parse_from(["", "--select", "3", "--dry-run", "file", "src/main.cpp"]);
/// assert_eq!(parser.select, Some(3));
/// assert!(parser.dry_run);
/// assert_eq!(parser.command, Command::File { path: PathBuf::from("src/main.cpp") });
/// ```
#[derive(Parser, Debug, Default)]
#[command(name = "MSBuild Selector")]
#[command(author = "Zero Day Code")]
#[command(version = "0.3.0")]
#[command(
    about = "Picks and launches the MSBuild builds available for a file or a project",
    long_about = "Finds the MSBuild projects that a source file belongs to, and offers to build \
    that file alone, its projects alone or the global solutions, on every configured \
    configuration/platform pair"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, help = "MSBuild Selector maximum allowed verbosity level is: '-vv'")]
    pub verbose: u8,

    #[arg(short, long, help = "The directory holding the project configuration file")]
    pub root: Option<String>,

    #[arg(
        short,
        long,
        help = "The project configuration file, when not named 'msbuild_selector.toml'"
    )]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "The instance level settings file, with the default values")]
    pub settings: Option<PathBuf>,

    #[arg(long, help = "Picks the build at this position instead of asking for it")]
    pub select: Option<usize>,

    #[arg(long, help = "Only lists the available builds")]
    pub list: bool,

    #[arg(long, help = "Prints the available builds as JSON")]
    pub json: bool,

    #[arg(long, help = "Prints the selected build instead of running it")]
    pub dry_run: bool,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq, Clone, Default)]
pub enum Command {
    /// Builds a source file alone, or any of the projects declaring it
    File {
        #[arg(help = "The source file being edited")]
        path: PathBuf,
    },
    /// Builds any of the projects alone
    #[default]
    Project,
}
