use crate::companion::ensure_companions;
use crate::output::RenameReport;
use crate::plan::RenamePlan;
use crate::rename::{apply_plan, RenameJournal};
use crate::snapshot::DirectorySnapshot;
use crate::{Result, Session};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Compute and report the plan without renaming anything.
    pub dry_run: bool,
    /// Create missing `.txt` companions before planning.
    pub create_missing: bool,
    /// Write the rename journal to `<dir>/.pairkit/rename.log`.
    pub journal: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            create_missing: true,
            journal: true,
        }
    }
}

/// Rename every image/caption pair in `dir` to `<prefix><index>`.
pub fn rename_operation(dir: &Path, prefix: &str, options: &RenameOptions) -> Result<RenameReport> {
    let mut snapshot = DirectorySnapshot::read(dir)?;

    // A dry run must not touch the directory, companions included.
    if options.create_missing && !options.dry_run {
        let companions = ensure_companions(&snapshot)?;
        if !companions.created.is_empty() {
            snapshot = DirectorySnapshot::read(dir)?;
        }
    }

    let plan = RenamePlan::build(&snapshot, prefix)?;
    if options.dry_run {
        return Ok(RenameReport::planned(plan));
    }

    let mut journal = if options.journal {
        RenameJournal::open(&dir.join(".pairkit").join("rename.log"))?
    } else {
        RenameJournal::disabled()
    };
    let mut session = Session::new(dir);
    apply_plan(&plan, &mut session, &mut journal)
}
