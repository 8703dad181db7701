use crate::output::{ReplaceReport, TriggerReport};
use crate::snapshot::DirectorySnapshot;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Target selection for a batch text operation: every caption file in a
/// directory snapshot, or the single open file.
#[derive(Debug)]
pub enum Scope<'a> {
    AllFiles(&'a DirectorySnapshot),
    SelectedFile(&'a Path),
}

impl Scope<'_> {
    /// Target caption paths, in the snapshot's lexicographic order.
    fn targets(&self) -> Vec<PathBuf> {
        match self {
            Scope::AllFiles(snapshot) => snapshot
                .caption_files()
                .into_iter()
                .map(|name| snapshot.root().join(name))
                .collect(),
            Scope::SelectedFile(path) => vec![path.to_path_buf()],
        }
    }
}

/// Rewrite each target to `trigger + " " + original_content`.
///
/// The trigger is trimmed first; an empty trigger is rejected. A failure on
/// one file aborts the remaining files.
pub fn apply_trigger(scope: &Scope<'_>, trigger: &str) -> Result<TriggerReport> {
    let trigger = trigger.trim();
    if trigger.is_empty() {
        return Err(Error::EmptyTrigger);
    }

    let targets = scope.targets();
    for path in &targets {
        let content = read(path)?;
        write(path, &format!("{trigger} {content}"))?;
    }

    Ok(TriggerReport {
        trigger: trigger.to_string(),
        files_changed: targets.len(),
    })
}

/// Replace all literal occurrences of `find` with `replace` in each target.
///
/// Whole-file, left-to-right, non-overlapping substring semantics; not a
/// regex. An empty `find` leaves every file byte-identical. A failure on one
/// file aborts the remaining files.
pub fn find_replace(scope: &Scope<'_>, find: &str, replace: &str) -> Result<ReplaceReport> {
    let targets = scope.targets();
    let mut files_changed = 0;
    let mut occurrences = 0;

    for path in &targets {
        let content = read(path)?;
        if find.is_empty() {
            continue;
        }
        let count = content.matches(find).count();
        if count == 0 {
            continue;
        }
        write(path, &content.replace(find, replace))?;
        files_changed += 1;
        occurrences += count;
    }

    Ok(ReplaceReport {
        find: find.to_string(),
        replace: replace.to_string(),
        files_examined: targets.len(),
        files_changed,
        occurrences,
    })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}
