use anyhow::Result;
use pairkit_core::{pairs_operation, OutputFormat, OutputFormatter};
use std::path::Path;

pub fn handle_pairs(
    path: &Path,
    create_missing: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let report = pairs_operation(path, create_missing)?;

    if !quiet {
        println!("{}", report.format(output));
    }
    Ok(())
}
