//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stagehand",
    bin_name = "stagehand",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3ad} Stage scaffold files into your project tree",
    long_about = "Stagehand merges the scaffold files declared by your installed \
                  packages into a single plan and places them in the project tree.",
    after_help = "EXAMPLES:\n\
        \x20 stagehand apply scaffold-plan.json\n\
        \x20 stagehand apply scaffold-plan.json --symlink --continue-on-error\n\
        \x20 stagehand plan scaffold-plan.json\n\
        \x20 stagehand completions bash > /usr/share/bash-completion/completions/stagehand",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the plan and place the scaffold files.
    #[command(
        visible_alias = "a",
        about = "Stage scaffold files into the project tree",
        after_help = "EXAMPLES:\n\
            \x20 stagehand apply scaffold-plan.json\n\
            \x20 stagehand apply scaffold-plan.json --symlink\n\
            \x20 stagehand apply scaffold-plan.json --dry-run"
    )]
    Apply(ApplyArgs),

    /// Print the resolved plan without touching the filesystem.
    #[command(
        visible_alias = "p",
        about = "Show the resolved scaffold plan",
        after_help = "EXAMPLES:\n\
            \x20 stagehand plan scaffold-plan.json\n\
            \x20 stagehand plan scaffold-plan.json --output-format json"
    )]
    Plan(PlanArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stagehand completions bash > ~/.local/share/bash-completion/completions/stagehand\n\
            \x20 stagehand completions zsh  > ~/.zfunc/_stagehand\n\
            \x20 stagehand completions fish > ~/.config/fish/completions/stagehand.fish"
    )]
    Completions(CompletionsArgs),
}

// ── apply ─────────────────────────────────────────────────────────────────────

/// Arguments for `stagehand apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Path to the plan file produced by the package manager.
    #[arg(value_name = "PLAN", help = "Scaffold plan file (JSON)")]
    pub plan: PathBuf,

    /// Override the web root declared in the plan file.
    #[arg(
        long = "web-root",
        value_name = "DIR",
        help = "Destination web root (overrides the plan file)"
    )]
    pub web_root: Option<PathBuf>,

    /// Symlink scaffold files instead of copying them.
    #[arg(
        short = 's',
        long = "symlink",
        help = "Create relative symlinks instead of copies"
    )]
    pub symlink: bool,

    /// Keep going when a file operation fails.
    #[arg(
        long = "continue-on-error",
        help = "Record failures and continue with the next file"
    )]
    pub continue_on_error: bool,

    /// Do not generate the autoload bootstrap file.
    #[arg(long = "no-autoload", help = "Skip generating the autoload file")]
    pub no_autoload: bool,

    /// Directory containing the package manager's autoloader.
    #[arg(
        long = "vendor-dir",
        value_name = "DIR",
        help = "Vendor directory for the autoload require path"
    )]
    pub vendor_dir: Option<PathBuf>,

    /// Resolve and print the plan without writing anything.
    #[arg(long = "dry-run", help = "Show what would be staged without staging")]
    pub dry_run: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `stagehand plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Path to the plan file produced by the package manager.
    #[arg(value_name = "PLAN", help = "Scaffold plan file (JSON)")]
    pub plan: PathBuf,

    /// Override the web root declared in the plan file.
    #[arg(
        long = "web-root",
        value_name = "DIR",
        help = "Destination web root (overrides the plan file)"
    )]
    pub web_root: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stagehand completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_apply_command() {
        let cli = Cli::parse_from([
            "stagehand",
            "apply",
            "scaffold-plan.json",
            "--symlink",
            "--continue-on-error",
        ]);
        let Commands::Apply(args) = cli.command else {
            panic!("expected apply command");
        };
        assert_eq!(args.plan, PathBuf::from("scaffold-plan.json"));
        assert!(args.symlink);
        assert!(args.continue_on_error);
        assert!(!args.dry_run);
    }

    #[test]
    fn apply_alias() {
        let cli = Cli::parse_from(["stagehand", "a", "plan.json"]);
        assert!(matches!(cli.command, Commands::Apply(_)));
    }

    #[test]
    fn parse_plan_with_web_root_override() {
        let cli = Cli::parse_from([
            "stagehand",
            "plan",
            "plan.json",
            "--web-root",
            "/srv/project/web",
        ]);
        let Commands::Plan(args) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.web_root, Some(PathBuf::from("/srv/project/web")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["stagehand", "--quiet", "--verbose", "plan", "p.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn plan_file_is_required() {
        let result = Cli::try_parse_from(["stagehand", "apply"]);
        assert!(result.is_err());
    }
}
