//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each pairkit operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod convert;
pub mod pairs;
pub mod rename;
pub mod replace;
pub mod trigger;

pub use convert::convert_operation;
pub use pairs::pairs_operation;
pub use rename::{rename_operation, RenameOptions};
pub use replace::replace_operation;
pub use trigger::trigger_operation;
