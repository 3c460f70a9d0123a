//! `stagehand plan` - show the resolved plan without touching anything.

use stagehand_adapters::{BufferSink, LocalFilesystem, load_plan};
use stagehand_core::application::{ScaffoldFileCollection, ScaffoldService};
use stagehand_core::domain::OpMode;

use crate::{
    cli::{OutputFormat, PlanArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: PlanArgs, output: OutputManager) -> CliResult<()> {
    if !args.plan.exists() {
        return Err(CliError::PlanNotFound { path: args.plan });
    }

    let plan = load_plan(&args.plan)?;
    let web_root = args.web_root.unwrap_or_else(|| plan.web_root.clone());

    // Resolution validates sources against the real filesystem but never
    // writes anything.
    let service =
        ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(BufferSink::new()));
    let collection = service.resolve(&plan.packages, &web_root)?;

    match output.format() {
        OutputFormat::Json => print_json(&collection),
        _ => {
            output.header(&format!("Scaffold plan for {}", web_root.display()))?;
            print_collection(&collection, &output)?;
            Ok(())
        }
    }
}

/// Render one line per resolved destination, plus pending override warnings.
///
/// Shared with `apply --dry-run`.
pub(crate) fn print_collection(
    collection: &ScaffoldFileCollection,
    output: &OutputManager,
) -> CliResult<()> {
    for file in collection.files() {
        let destination = file.destination().relative_path();
        let line = match file.op().mode() {
            OpMode::Skip => {
                format!("  skip     {destination} (disabled by {})", file.package_name())
            }
            mode => {
                let sources = file
                    .op()
                    .sources()
                    .iter()
                    .map(|s| s.relative_path())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "  {:<8} {destination} <- {sources} ({})",
                    mode.as_str(),
                    file.package_name()
                )
            }
        };
        output.print(&line)?;
    }

    for warning in collection.warnings() {
        output.warning(&warning.to_string())?;
    }

    Ok(())
}

fn print_json(collection: &ScaffoldFileCollection) -> CliResult<()> {
    let files: Vec<_> = collection
        .files()
        .map(|file| {
            serde_json::json!({
                "destination": file.destination().relative_path(),
                "package": file.package_name(),
                "mode": file.op().mode().as_str(),
                "sources": file
                    .op()
                    .sources()
                    .iter()
                    .map(|s| s.relative_path())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let doc = serde_json::json!({
        "files": files,
        "warnings": collection
            .warnings()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
    });

    let rendered = serde_json::to_string_pretty(&doc).map_err(|e| CliError::Internal {
        message: format!("could not render plan as JSON: {e}"),
    })?;
    println!("{rendered}");
    Ok(())
}
