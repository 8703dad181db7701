use anyhow::Result;
use pairkit_core::{trigger_operation, OutputFormat, OutputFormatter, Session};
use std::path::Path;

pub fn handle_trigger(
    trigger: &str,
    path: &Path,
    file: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    // --file stands in for the editor's "selected file" scope.
    let (session, all) = match file {
        Some(f) => (Session::default().with_current_file(f), false),
        None => (Session::new(path), true),
    };
    let report = trigger_operation(&session, all, trigger)?;

    if !quiet {
        println!("{}", report.format(output));
    }
    Ok(())
}
