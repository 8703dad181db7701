use crate::edit::{apply_trigger, Scope};
use crate::output::TriggerReport;
use crate::snapshot::DirectorySnapshot;
use crate::{Result, Session};

/// Prepend a trigger word to every caption in the session's folder, or to
/// the session's open file only.
pub fn trigger_operation(session: &Session, all: bool, trigger: &str) -> Result<TriggerReport> {
    if all {
        let snapshot = DirectorySnapshot::read(session.root()?)?;
        apply_trigger(&Scope::AllFiles(&snapshot), trigger)
    } else {
        apply_trigger(&Scope::SelectedFile(session.current_file()?), trigger)
    }
}
