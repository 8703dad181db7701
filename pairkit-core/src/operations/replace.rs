use crate::edit::{find_replace, Scope};
use crate::output::ReplaceReport;
use crate::snapshot::DirectorySnapshot;
use crate::{Result, Session};

/// Literal find/replace across the session's folder or its open file only.
pub fn replace_operation(
    session: &Session,
    all: bool,
    find: &str,
    replace: &str,
) -> Result<ReplaceReport> {
    if all {
        let snapshot = DirectorySnapshot::read(session.root()?)?;
        find_replace(&Scope::AllFiles(&snapshot), find, replace)
    } else {
        find_replace(&Scope::SelectedFile(session.current_file()?), find, replace)
    }
}
