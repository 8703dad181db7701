use anyhow::Result;
use pairkit_core::{replace_operation, OutputFormat, OutputFormatter, Session};
use std::path::Path;

pub fn handle_replace(
    find: &str,
    replace: &str,
    path: &Path,
    file: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let (session, all) = match file {
        Some(f) => (Session::default().with_current_file(f), false),
        None => (Session::new(path), true),
    };
    let report = replace_operation(&session, all, find, replace)?;

    if !quiet {
        println!("{}", report.format(output));
    }
    Ok(())
}
