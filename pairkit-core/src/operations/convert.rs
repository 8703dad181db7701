use crate::convert::convert_images;
use crate::output::ConvertReport;
use crate::snapshot::DirectorySnapshot;
use crate::Result;
use std::path::Path;

/// Convert `.bmp`/`.webp` images in `dir` to `.png`.
pub fn convert_operation(dir: &Path) -> Result<ConvertReport> {
    let snapshot = DirectorySnapshot::read(dir)?;
    convert_images(&snapshot)
}
