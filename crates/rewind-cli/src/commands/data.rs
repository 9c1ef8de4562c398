//! Import, export and clear commands.

use std::path::PathBuf;

use clap::Args;
use rewind_core::Config;

use super::{open_session, report_warning};

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file containing a problem array
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (defaults to the configured export filename)
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Confirm deletion of all problems
    #[arg(long)]
    pub yes: bool,
}

pub fn import(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let payload = std::fs::read(&args.file)?;

    let mut controller = open_session()?;
    let update = controller.import(&payload)?;
    report_warning(&update);

    println!(
        "Imported {} problem(s) from {}",
        update.all.len(),
        args.file.display()
    );
    Ok(())
}

pub fn export(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let controller = open_session()?;

    let Some(payload) = controller.export()? else {
        eprintln!("warning: no problems to export");
        return Ok(());
    };

    let path = match args.file {
        Some(path) => path,
        None => PathBuf::from(Config::load()?.export_filename),
    };
    std::fs::write(&path, payload)?;
    println!(
        "Exported {} problem(s) to {}",
        controller.problems().len(),
        path.display()
    );
    Ok(())
}

pub fn clear(args: ClearArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = open_session()?;

    if controller.is_empty() {
        eprintln!("warning: no problems to delete");
        return Ok(());
    }
    if !args.yes {
        eprintln!(
            "This deletes all {} problem(s) and cannot be undone; re-run with --yes to confirm",
            controller.problems().len()
        );
        return Ok(());
    }

    let update = controller.clear();
    report_warning(&update);
    println!("All problems deleted");
    Ok(())
}
