use crate::output::{ConvertReport, ConvertedFile};
use crate::snapshot::{file_stem, DirectorySnapshot};
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Extensions the converter rewrites to `.png`.
pub const CONVERTIBLE_EXTENSIONS: [&str; 2] = ["bmp", "webp"];

/// Convert every `.bmp`/`.webp` file in the snapshot to `.png`.
///
/// The stem is preserved so an existing caption keeps its association, and
/// the source file is removed once the `.png` is written. A stem that
/// already has a `.png` is skipped rather than overwritten. A failure on one
/// file aborts the remaining files.
pub fn convert_images(snapshot: &DirectorySnapshot) -> Result<ConvertReport> {
    let mut converted = Vec::new();
    let mut skipped = Vec::new();

    for name in snapshot.files() {
        if !is_convertible(name) {
            continue;
        }
        let target_name = format!("{}.png", file_stem(name));
        if snapshot.contains(&target_name) {
            skipped.push(name.clone());
            continue;
        }

        let source = snapshot.root().join(name);
        let target = snapshot.root().join(&target_name);
        let decoded = image::open(&source).map_err(|e| Error::Image {
            path: source.clone(),
            source: e,
        })?;
        decoded.save(&target).map_err(|e| Error::Image {
            path: target.clone(),
            source: e,
        })?;
        fs::remove_file(&source).map_err(|e| Error::io(&source, e))?;

        converted.push(ConvertedFile {
            from: name.clone(),
            to: target_name,
        });
    }

    Ok(ConvertReport {
        root: snapshot.root().to_path_buf(),
        converted,
        skipped,
    })
}

fn is_convertible(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            CONVERTIBLE_EXTENSIONS
                .iter()
                .any(|c| e.eq_ignore_ascii_case(c))
        })
}
