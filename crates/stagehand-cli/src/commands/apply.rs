//! `stagehand apply` - stage scaffold files into the project tree.

use tracing::{debug, info};

use stagehand_adapters::{BufferSink, LocalFilesystem, load_plan};
use stagehand_core::application::{ErrorPolicy, ScaffoldOptions, ScaffoldService};

use crate::{
    cli::ApplyArgs,
    commands::plan::print_collection,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ApplyArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if !args.plan.exists() {
        return Err(CliError::PlanNotFound { path: args.plan });
    }

    let plan = load_plan(&args.plan)?;
    let web_root = args.web_root.unwrap_or_else(|| plan.web_root.clone());

    // CLI flags win over the plan file, which wins over config defaults.
    let options = ScaffoldOptions {
        symlink: args.symlink || plan.symlink || config.scaffold.symlink,
        on_error: if args.continue_on_error {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Abort
        },
        no_autoload: args.no_autoload,
        vendor_dir: args.vendor_dir.or(config.scaffold.vendor_dir),
    };

    debug!(
        plan = %args.plan.display(),
        web_root = %web_root.display(),
        symlink = options.symlink,
        "applying scaffold plan"
    );

    if args.dry_run {
        let service =
            ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(BufferSink::new()));
        let collection = service.resolve(&plan.packages, &web_root)?;
        output.header("Dry run: resolved scaffold plan")?;
        print_collection(&collection, &output)?;
        return Ok(());
    }

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(output.progress_sink()),
    );
    let summary = service.scaffold(&plan.packages, &web_root, &options)?;

    info!(
        written = summary.written.len(),
        skipped = summary.skipped.len(),
        failed = summary.failed.len(),
        "apply finished"
    );

    output.success(&format!(
        "Staged {} file(s) into {} ({} skipped)",
        summary.written.len(),
        web_root.display(),
        summary.skipped.len()
    ))?;

    if !summary.is_success() {
        for failure in &summary.failed {
            output.error(&format!("{}: {}", failure.destination, failure.reason))?;
        }
        return Err(CliError::Incomplete {
            failed: summary.failed.len(),
        });
    }

    Ok(())
}
