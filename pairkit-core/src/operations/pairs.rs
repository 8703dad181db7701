use crate::companion::ensure_companions;
use crate::output::PairsReport;
use crate::snapshot::DirectorySnapshot;
use crate::Result;
use std::path::Path;

/// List the image/caption pairs in `dir`, optionally creating an empty
/// caption for images without one.
pub fn pairs_operation(dir: &Path, create_missing: bool) -> Result<PairsReport> {
    let mut snapshot = DirectorySnapshot::read(dir)?;

    let mut created = Vec::new();
    if create_missing {
        created = ensure_companions(&snapshot)?.created;
        if !created.is_empty() {
            snapshot = DirectorySnapshot::read(dir)?;
        }
    }

    let pairs = snapshot.pairs();
    let missing_captions = pairs.iter().filter(|p| p.caption.is_none()).count();

    Ok(PairsReport {
        root: dir.to_path_buf(),
        pairs,
        missing_captions,
        created,
    })
}
