use crate::output::{RenameReport, RenamedFile};
use crate::plan::RenamePlan;
use crate::snapshot::DirectorySnapshot;
use crate::{Error, Result, Session};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only journal of individual renames.
///
/// Each staged and committed rename is recorded before and after it
/// happens, so a batch that fails mid-way leaves an exact record of which
/// temp->final renames completed. There is no compensating rollback;
/// the journal is what makes a partial batch recoverable by hand.
pub struct RenameJournal {
    file: Option<(PathBuf, File)>,
}

impl RenameJournal {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::io(path, e))?;
        Ok(Self {
            file: Some((path.to_path_buf(), file)),
        })
    }

    pub fn disabled() -> Self {
        Self { file: None }
    }

    fn log(&mut self, message: &str) -> Result<()> {
        if let Some((path, file)) = &mut self.file {
            writeln!(
                file,
                "[{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                message
            )
            .and_then(|()| file.flush())
            .map_err(|e| Error::io(path.clone(), e))?;
        }
        Ok(())
    }
}

/// Rename every image/caption pair in `snapshot` to `<prefix><index>`.
///
/// Phase 1 stages each pair into a staging namespace no existing name
/// shares; phase 2 commits the staged names to their final names. The split
/// makes the batch collision free when target names overlap names still
/// present mid-operation. An I/O failure aborts the remaining steps and
/// leaves completed renames in place.
///
/// When the session's open caption file is among the renamed files, the
/// session is repointed to its new path.
pub fn rename_pairs(
    snapshot: &DirectorySnapshot,
    prefix: &str,
    session: &mut Session,
    journal: &mut RenameJournal,
) -> Result<RenameReport> {
    let plan = RenamePlan::build(snapshot, prefix)?;
    apply_plan(&plan, session, journal)
}

/// Apply an already-computed plan. Split out so a dry-run can share the
/// plan with the caller before anything is touched.
pub fn apply_plan(
    plan: &RenamePlan,
    session: &mut Session,
    journal: &mut RenameJournal,
) -> Result<RenameReport> {
    journal.log(&format!(
        "starting rename of {} pairs in {} with prefix {:?}",
        plan.entries.len(),
        plan.root.display(),
        plan.prefix,
    ))?;

    // Phase 1: stage everything out of the old namespace.
    for entry in &plan.entries {
        perform_rename(&plan.root, &entry.image.from, &entry.image.staged, session, journal)?;
        if let Some(caption) = &entry.caption {
            perform_rename(&plan.root, &caption.from, &caption.staged, session, journal)?;
        }
    }

    // Phase 2: commit staged names to final names.
    let mut renames = Vec::new();
    for entry in &plan.entries {
        perform_rename(&plan.root, &entry.image.staged, &entry.image.to, session, journal)?;
        renames.push(RenamedFile {
            from: entry.image.from.clone(),
            to: entry.image.to.clone(),
        });
        if let Some(caption) = &entry.caption {
            perform_rename(&plan.root, &caption.staged, &caption.to, session, journal)?;
            renames.push(RenamedFile {
                from: caption.from.clone(),
                to: caption.to.clone(),
            });
        }
    }

    journal.log(&format!("completed rename of {} pairs", plan.entries.len()))?;

    Ok(RenameReport {
        root: plan.root.clone(),
        prefix: plan.prefix.clone(),
        width: plan.width,
        pairs_renamed: plan.entries.len(),
        renames,
        applied: true,
        plan: None,
    })
}

fn perform_rename(
    root: &Path,
    from: &str,
    to: &str,
    session: &mut Session,
    journal: &mut RenameJournal,
) -> Result<()> {
    let from_path = root.join(from);
    let to_path = root.join(to);

    journal.log(&format!("renaming {from} -> {to}"))?;
    fs::rename(&from_path, &to_path).map_err(|e| Error::io(&from_path, e))?;
    session.retarget_current_file(&from_path, &to_path);
    journal.log(&format!("renamed {from} -> {to}"))?;
    Ok(())
}
