use anyhow::Result;
use pairkit_core::{rename_operation, OutputFormat, OutputFormatter, RenameOptions};
use std::path::Path;

pub fn handle_rename(
    prefix: &str,
    path: &Path,
    create_missing: bool,
    dry_run: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let options = RenameOptions {
        dry_run,
        create_missing,
        journal: !dry_run,
    };
    let report = rename_operation(path, prefix, &options)?;

    if !quiet {
        println!("{}", report.format(output));
    }
    Ok(())
}
