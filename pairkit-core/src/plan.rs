use crate::snapshot::{file_stem, DirectorySnapshot};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Base prefix of the staging namespace used between the two rename phases.
///
/// Staged names must be disjoint from both the old and the new naming
/// scheme, so a plan whose targets collide lexically with names still
/// present mid-operation (renaming `img_02` -> `img_2` while a different
/// `img_2` exists) cannot overwrite anything. When a snapshot filename
/// already starts with this prefix, `RenamePlan::build` derives a numbered
/// variant (`temp_0_`, `temp_1_`, ...) that no existing name starts with.
pub const STAGING_PREFIX: &str = "temp_";

/// One file's path through the two rename phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameStep {
    pub from: String,
    pub staged: String,
    pub to: String,
}

/// One image and its optional caption companion, with their target index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub index: usize,
    pub image: RenameStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<RenameStep>,
}

/// An ordered rename plan for every image in a directory snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    pub root: PathBuf,
    /// Normalized prefix, always ending in `_`.
    pub prefix: String,
    /// Zero-padding width: the number of decimal digits in the image count.
    pub width: usize,
    pub entries: Vec<PlanEntry>,
}

impl RenamePlan {
    /// Compute a plan from a snapshot and a user prefix.
    ///
    /// Images are taken in the snapshot's lexicographic order and indexed
    /// from 1. Each image keeps its original extension; captions are always
    /// `.txt`. A caption is claimed by at most one image, so a snapshot that
    /// violates the one-image-per-stem invariant still yields a valid plan.
    ///
    /// Fails with `Error::WouldOverwrite` when a final name would land on an
    /// existing file the plan does not itself rename.
    pub fn build(snapshot: &DirectorySnapshot, prefix: &str) -> Result<Self> {
        let prefix = normalize_prefix(prefix)?;

        let images = snapshot.image_files();
        if images.is_empty() {
            return Err(Error::NoImagesFound(snapshot.root().to_path_buf()));
        }

        let staging = staging_prefix(snapshot);
        let width = index_width(images.len());
        let mut claimed_captions = BTreeSet::new();
        let mut entries = Vec::with_capacity(images.len());

        for (index, image) in images.iter().enumerate() {
            let index = index + 1;
            let padded = format!("{index:0width$}");
            let ext = Path::new(image)
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default();

            let caption = snapshot
                .caption_for(file_stem(image))
                .filter(|name| claimed_captions.insert(name.clone()))
                .map(|name| RenameStep {
                    from: name,
                    staged: format!("{staging}{padded}.txt"),
                    to: format!("{prefix}{padded}.txt"),
                });

            entries.push(PlanEntry {
                index,
                image: RenameStep {
                    from: (*image).to_string(),
                    staged: format!("{staging}{padded}.{ext}"),
                    to: format!("{prefix}{padded}.{ext}"),
                },
                caption,
            });
        }

        // A final name may only reuse a name the plan frees up itself.
        let renamed: BTreeSet<&str> = entries
            .iter()
            .flat_map(|entry| {
                std::iter::once(entry.image.from.as_str())
                    .chain(entry.caption.as_ref().map(|c| c.from.as_str()))
            })
            .collect();
        for entry in &entries {
            let steps = std::iter::once(&entry.image).chain(entry.caption.as_ref());
            for step in steps {
                if snapshot.contains(&step.to) && !renamed.contains(step.to.as_str()) {
                    return Err(Error::WouldOverwrite(step.to.clone()));
                }
            }
        }

        Ok(Self {
            root: snapshot.root().to_path_buf(),
            prefix,
            width,
            entries,
        })
    }
}

/// Pick a staging prefix no existing filename starts with, so phase 1 can
/// never land a staged file on top of an existing one.
fn staging_prefix(snapshot: &DirectorySnapshot) -> String {
    let mut candidate = STAGING_PREFIX.to_string();
    let mut n = 0usize;
    while snapshot.files().iter().any(|f| f.starts_with(&candidate)) {
        candidate = format!("{STAGING_PREFIX}{n}_");
        n += 1;
    }
    candidate
}

/// Trim the user prefix and guarantee a trailing `_` separator.
pub fn normalize_prefix(prefix: &str) -> Result<String> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err(Error::InvalidPrefix);
    }
    if prefix.ends_with('_') {
        Ok(prefix.to_string())
    } else {
        Ok(format!("{prefix}_"))
    }
}

/// Number of decimal digits needed to write `count`: 7 -> 1, 12 -> 2,
/// 100 -> 3.
pub fn index_width(count: usize) -> usize {
    count.to_string().len()
}
