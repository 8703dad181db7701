use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Image extensions recognized by pairkit, in association-lookup priority
/// order.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Extension of caption companion files.
pub const CAPTION_EXTENSION: &str = "txt";

/// An image file and its same-stem companion caption, if one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionPair {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// The set of file names in a dataset directory at one point in time.
///
/// Snapshots are never cached: every batch operation reads a fresh one.
/// All listings derived from a snapshot share a single ordering contract:
/// lexicographic by file name bytes. No operation sorts numerically.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    root: PathBuf,
    files: Vec<String>,
}

impl DirectorySnapshot {
    /// List the immediate children of `dir`. Subdirectories are skipped,
    /// as are names that are not valid UTF-8.
    pub fn read(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::InvalidDirectory(dir.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                match e.into_io_error() {
                    Some(source) => Error::io(path, source),
                    None => Error::InvalidDirectory(path),
                }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                files.push(name.to_string());
            }
        }
        files.sort();

        Ok(Self {
            root: dir.to_path_buf(),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All file names, in lexicographic byte order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.binary_search_by(|f| f.as_str().cmp(name)).is_ok()
    }

    /// Image file names, sorted.
    pub fn image_files(&self) -> Vec<&str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(|n| is_image_file(n))
            .collect()
    }

    /// Caption file names, sorted.
    pub fn caption_files(&self) -> Vec<&str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(|n| is_caption_file(n))
            .collect()
    }

    /// Association lookup: the first existing image among `stem.png`,
    /// `stem.jpg`, `stem.jpeg`, in that fixed priority order.
    pub fn find_image(&self, stem: &str) -> Option<String> {
        IMAGE_EXTENSIONS
            .iter()
            .map(|ext| format!("{stem}.{ext}"))
            .find(|name| self.contains(name))
    }

    /// The caption companion for an image stem: a case-sensitive stem match,
    /// with the `.txt` extension matched case-insensitively like every other
    /// caption listing.
    pub fn caption_for(&self, stem: &str) -> Option<String> {
        self.caption_files()
            .into_iter()
            .find(|name| file_stem(name) == stem)
            .map(str::to_string)
    }

    /// One pair per image file, in image name order.
    pub fn pairs(&self) -> Vec<CaptionPair> {
        self.image_files()
            .into_iter()
            .map(|image| CaptionPair {
                caption: self.caption_for(file_stem(image)),
                image: image.to_string(),
            })
            .collect()
    }
}

/// File name without its extension.
pub fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

fn has_extension(name: &str, ext: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

pub fn is_image_file(name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| has_extension(name, ext))
}

pub fn is_caption_file(name: &str) -> bool {
    has_extension(name, CAPTION_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn classifies_extensions_case_insensitively() {
        assert!(is_image_file("cat.png"));
        assert!(is_image_file("cat.JPG"));
        assert!(is_image_file("cat.Jpeg"));
        assert!(!is_image_file("cat.webp"));
        assert!(!is_image_file("cat.txt"));
        assert!(is_caption_file("cat.txt"));
        assert!(is_caption_file("cat.TXT"));
        assert!(!is_caption_file("cat"));
    }

    #[test]
    fn stem_strips_last_extension_only() {
        assert_eq!(file_stem("cat.png"), "cat");
        assert_eq!(file_stem("cat.v2.png"), "cat.v2");
        assert_eq!(file_stem("cat"), "cat");
    }

    #[test]
    fn listing_is_lexicographic_and_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("img_10.png"), []).unwrap();
        fs::write(temp.path().join("img_2.png"), []).unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("img_1.png"), []).unwrap();

        let snapshot = DirectorySnapshot::read(temp.path()).unwrap();
        // Byte order, not numeric order.
        assert_eq!(snapshot.files(), &["img_10.png", "img_2.png"]);
    }

    #[test]
    fn missing_directory_is_invalid() {
        let temp = TempDir::new().unwrap();
        let err = DirectorySnapshot::read(&temp.path().join("gone")).unwrap_err();
        assert!(matches!(err, Error::InvalidDirectory(_)));
    }

    #[test]
    fn association_lookup_respects_priority_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("cat.jpg"), []).unwrap();
        fs::write(temp.path().join("cat.png"), []).unwrap();
        fs::write(temp.path().join("dog.jpeg"), []).unwrap();

        let snapshot = DirectorySnapshot::read(temp.path()).unwrap();
        assert_eq!(snapshot.find_image("cat").as_deref(), Some("cat.png"));
        assert_eq!(snapshot.find_image("dog").as_deref(), Some("dog.jpeg"));
        assert_eq!(snapshot.find_image("bird"), None);
    }

    #[test]
    fn caption_lookup_is_exact() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("cat.png"), []).unwrap();
        fs::write(temp.path().join("cat.txt"), "a cat").unwrap();
        fs::write(temp.path().join("Dog.png"), []).unwrap();
        fs::write(temp.path().join("dog.txt"), "a dog").unwrap();

        let snapshot = DirectorySnapshot::read(temp.path()).unwrap();
        assert_eq!(snapshot.caption_for("cat").as_deref(), Some("cat.txt"));
        // Case-sensitive stem match: "Dog" has no companion.
        assert_eq!(snapshot.caption_for("Dog"), None);

        let pairs = snapshot.pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].image, "Dog.png");
        assert_eq!(pairs[0].caption, None);
        assert_eq!(pairs[1].image, "cat.png");
        assert_eq!(pairs[1].caption.as_deref(), Some("cat.txt"));
    }

    #[test]
    fn caption_lookup_accepts_uppercase_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("cat.png"), []).unwrap();
        fs::write(temp.path().join("cat.TXT"), "a cat").unwrap();

        let snapshot = DirectorySnapshot::read(temp.path()).unwrap();
        assert_eq!(snapshot.caption_for("cat").as_deref(), Some("cat.TXT"));
        assert_eq!(snapshot.pairs()[0].caption.as_deref(), Some("cat.TXT"));
    }
}
