//! Command-line argument parsing.
//!
//! The copy parameters are positional and all optional; a missing or blank
//! value is prompted for interactively.

use clap::Parser;

/// Command-line arguments for the `vgc` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use variable_group_copier_cli::cli_args::Args;
///
/// let args = Args::parse_from(["vgc", "ProjA", "GroupX", "ProjB"]);
/// assert_eq!(args.parameters.len(), 3);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[command(about = "Copy variable groups between projects or to and from JSON files")]
pub struct Args {
    /// Path to the YAML file with default account, token and project.
    ///
    /// If not provided, defaults to `~/.variable-group-copier/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Never wait for a key press before exiting.
    ///
    /// By default the tool pauses at the end of an interactive run.
    #[arg(long, action)]
    pub no_pause: bool,

    /// Copy parameters by position:
    /// SOURCE_PROJECT SOURCE_GROUP TARGET_PROJECT TARGET_GROUP TOKEN OVERRIDE ACCOUNT.
    ///
    /// Use `/file` as a project to read or write local JSON files and `*`
    /// as a group to select all groups. Pass "" to skip a position.
    #[arg(num_args(0..=7), value_name = "PARAMETER")]
    pub parameters: Vec<String>,
}
