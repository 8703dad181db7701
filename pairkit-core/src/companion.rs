use crate::output::CompanionReport;
use crate::snapshot::{file_stem, DirectorySnapshot};
use crate::{Error, Result};
use std::fs;

/// Create an empty `.txt` companion for every image that lacks one.
///
/// The dataset contract expects each image to have a caption file before
/// editing or renaming runs; this fills the gaps. Existing captions are
/// never touched.
pub fn ensure_companions(snapshot: &DirectorySnapshot) -> Result<CompanionReport> {
    let mut created = Vec::new();

    for pair in snapshot.pairs() {
        if pair.caption.is_some() {
            continue;
        }
        let name = format!("{}.txt", file_stem(&pair.image));
        let path = snapshot.root().join(&name);
        fs::write(&path, "").map_err(|e| Error::io(&path, e))?;
        created.push(name);
    }

    Ok(CompanionReport {
        root: snapshot.root().to_path_buf(),
        created,
    })
}
