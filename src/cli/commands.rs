//! Command implementations

use tracing::info;

use crate::app::AppContainer;
use crate::cli::args::ClipArgs;
use crate::error::FfcutResult;

/// Execute the clip command
pub async fn clip(args: &ClipArgs, container: &dyn AppContainer) -> FfcutResult<()> {
    let request = args.to_request();
    let interactor = container.clip_interactor();

    let prepared = interactor.prepare(&request)?;

    // stdout carries only JSON in --json mode
    if args.json {
        eprintln!("Command: {}", prepared.command);
    } else {
        println!("Command: {}", prepared.command);
    }

    if args.dry_run {
        info!("Dry run requested, not executing");
        return Ok(());
    }

    let report = interactor.run(&prepared).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Done: {}", report.destination.display());
        println!("Size: {}", report.size);
    }

    Ok(())
}
