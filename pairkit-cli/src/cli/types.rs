use clap::ValueEnum;
use pairkit_core::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormatArg {
    Summary,
    Json,
}

impl OutputFormatArg {
    /// Parse the config-file spelling, falling back to summary.
    pub fn from_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Summary,
        }
    }
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Summary => Self::Summary,
            OutputFormatArg::Json => Self::Json,
        }
    }
}
