use anyhow::Result;
use pairkit_core::{convert_operation, OutputFormat, OutputFormatter};
use std::path::Path;

pub fn handle_convert(path: &Path, output: OutputFormat, quiet: bool) -> Result<()> {
    let report = convert_operation(path)?;

    if !quiet {
        println!("{}", report.format(output));
    }
    Ok(())
}
