//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true` on each argument,
//! so `stagehand -v apply …` and `stagehand apply -v …` both work.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Verbosity counter: `-v` info, `-vv` debug, `-vvv` trace.
    /// With no flag only warnings and errors are logged.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - warnings and errors only
    -v      - progress messages (info)
    -vv     - detailed diagnostics (debug)
    -vvv    - everything (trace)"
    )]
    pub verbose: u8,

    /// Silence everything except errors, including the per-file
    /// progress notices.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes. Also triggered by the `NO_COLOR`
    /// environment variable (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Alternate configuration file. Without this flag the default
    /// location is probed and silently skipped when absent.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI renders its output.
///
/// `Auto` resolves to `Human` on a TTY and `Plain` otherwise; the other
/// variants force the choice. `Json` only affects commands that have a
/// machine-readable rendering (currently `plan`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    Human,
    Plain,
    Json,
}
