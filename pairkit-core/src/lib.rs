#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod companion;
pub mod config;
pub mod convert;
pub mod edit;
pub mod errors;
pub mod operations;
pub mod output;
pub mod plan;
pub mod rename;
pub mod session;
pub mod snapshot;

pub use companion::ensure_companions;
pub use config::Config;
pub use convert::{convert_images, CONVERTIBLE_EXTENSIONS};
pub use edit::{apply_trigger, find_replace, Scope};
pub use errors::{Error, Result};
pub use operations::{
    convert_operation, pairs_operation, rename_operation, replace_operation, trigger_operation,
    RenameOptions,
};
pub use output::{
    CompanionReport, ConvertReport, ConvertedFile, OutputFormat, OutputFormatter, PairsReport,
    RenameReport, RenamedFile, ReplaceReport, TriggerReport,
};
pub use plan::{index_width, normalize_prefix, PlanEntry, RenamePlan, RenameStep, STAGING_PREFIX};
pub use rename::{apply_plan, rename_pairs, RenameJournal};
pub use session::Session;
pub use snapshot::{
    file_stem, is_caption_file, is_image_file, CaptionPair, DirectorySnapshot, CAPTION_EXTENSION,
    IMAGE_EXTENSIONS,
};
