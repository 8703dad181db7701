use crate::plan::RenamePlan;
use crate::snapshot::CaptionPair;
use comfy_table::{ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// One completed rename, by file name within the dataset directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedFile {
    pub from: String,
    pub to: String,
}

/// Result of a pair rename operation
#[derive(Debug, Serialize)]
pub struct RenameReport {
    pub root: PathBuf,
    pub prefix: String,
    pub width: usize,
    pub pairs_renamed: usize,
    pub renames: Vec<RenamedFile>,
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<RenamePlan>,
}

impl RenameReport {
    /// A dry-run report: the plan is carried, nothing was touched.
    pub fn planned(plan: RenamePlan) -> Self {
        Self {
            root: plan.root.clone(),
            prefix: plan.prefix.clone(),
            width: plan.width,
            pairs_renamed: plan.entries.len(),
            renames: Vec::new(),
            applied: false,
            plan: Some(plan),
        }
    }
}

/// Result of a trigger-prepend operation
#[derive(Debug, Serialize)]
pub struct TriggerReport {
    pub trigger: String,
    pub files_changed: usize,
}

/// Result of a find/replace operation
#[derive(Debug, Serialize)]
pub struct ReplaceReport {
    pub find: String,
    pub replace: String,
    pub files_examined: usize,
    pub files_changed: usize,
    pub occurrences: usize,
}

/// Result of a companion-creation pass
#[derive(Debug, Serialize)]
pub struct CompanionReport {
    pub root: PathBuf,
    pub created: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedFile {
    pub from: String,
    pub to: String,
}

/// Result of an image conversion pass
#[derive(Debug, Serialize)]
pub struct ConvertReport {
    pub root: PathBuf,
    pub converted: Vec<ConvertedFile>,
    pub skipped: Vec<String>,
}

/// Result of a pairs listing
#[derive(Debug, Serialize)]
pub struct PairsReport {
    pub root: PathBuf,
    pub pairs: Vec<CaptionPair>,
    pub missing_captions: usize,
    pub created: Vec<String>,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameReport {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "rename",
            "root": self.root,
            "prefix": self.prefix,
            "width": self.width,
            "applied": self.applied,
            "summary": {
                "pairs_renamed": self.pairs_renamed,
            },
            "renames": self.renames,
            "plan": self.plan,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut out = String::new();
        if self.applied {
            let _ = writeln!(
                out,
                "Renamed {} pair{} in {} with prefix {:?} (width {})",
                self.pairs_renamed,
                plural(self.pairs_renamed),
                self.root.display(),
                self.prefix,
                self.width,
            );
            for rename in &self.renames {
                let _ = writeln!(out, "  {} -> {}", rename.from, rename.to);
            }
        } else {
            let _ = writeln!(
                out,
                "Would rename {} pair{} in {} with prefix {:?} (width {})",
                self.pairs_renamed,
                plural(self.pairs_renamed),
                self.root.display(),
                self.prefix,
                self.width,
            );
            if let Some(plan) = &self.plan {
                for entry in &plan.entries {
                    let _ = writeln!(out, "  {} -> {}", entry.image.from, entry.image.to);
                    if let Some(caption) = &entry.caption {
                        let _ = writeln!(out, "  {} -> {}", caption.from, caption.to);
                    }
                }
            }
        }
        out.trim_end().to_string()
    }
}

impl OutputFormatter for TriggerReport {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "trigger",
            "trigger": self.trigger,
            "summary": {
                "files_changed": self.files_changed,
            },
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!(
            "Prepended {:?} to {} caption file{}",
            self.trigger,
            self.files_changed,
            plural(self.files_changed),
        )
    }
}

impl OutputFormatter for ReplaceReport {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "replace",
            "find": self.find,
            "replace": self.replace,
            "summary": {
                "files_examined": self.files_examined,
                "files_changed": self.files_changed,
                "occurrences": self.occurrences,
            },
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!(
            "Replaced {} occurrence{} in {} of {} caption file{}",
            self.occurrences,
            plural(self.occurrences),
            self.files_changed,
            self.files_examined,
            plural(self.files_examined),
        )
    }
}

impl OutputFormatter for ConvertReport {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "convert",
            "root": self.root,
            "converted": self.converted,
            "skipped": self.skipped,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Converted {} image{} to png",
            self.converted.len(),
            plural(self.converted.len()),
        );
        for file in &self.converted {
            let _ = writeln!(out, "  {} -> {}", file.from, file.to);
        }
        for name in &self.skipped {
            let _ = writeln!(out, "  skipped {name} (png already exists)");
        }
        out.trim_end().to_string()
    }
}

impl OutputFormatter for PairsReport {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "pairs",
            "root": self.root,
            "pairs": self.pairs,
            "summary": {
                "total": self.pairs.len(),
                "missing_captions": self.missing_captions,
                "created": self.created,
            },
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Image", "Caption"]);
        for pair in &self.pairs {
            table.add_row(vec![
                pair.image.as_str(),
                pair.caption.as_deref().unwrap_or("(missing)"),
            ]);
        }

        let mut out = table.to_string();
        let _ = write!(
            out,
            "\n{} pair{}, {} missing caption{}",
            self.pairs.len(),
            plural(self.pairs.len()),
            self.missing_captions,
            plural(self.missing_captions),
        );
        if !self.created.is_empty() {
            let _ = write!(out, ", {} created", self.created.len());
        }
        out
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
