//! Configuration options for PRD to beads conversion

use std::path::PathBuf;

/// Conventional location of the PRD document
pub const DEFAULT_INPUT_PATH: &str = "tasks/prd.json";
/// Conventional location of the generated import file
pub const DEFAULT_OUTPUT_PATH: &str = "tasks/prd-beads.jsonl";
pub const DEFAULT_LABEL: &str = "pnpm-migration";
pub const DEFAULT_CREATED_BY: &str = "prd-import";
pub const DEFAULT_ISSUE_TYPE: &str = "task";
/// Tracker command suggested after a successful run
pub const DEFAULT_IMPORT_COMMAND: &str = "bd import -i";

/// Conversion configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// PRD JSON to read
    pub input_path: PathBuf,
    /// JSONL file to write
    pub output_path: PathBuf,
    /// Label attached to every issue
    pub label: String,
    /// Author tag recorded in `created_by`
    pub created_by: String,
    /// Issue type for every issue
    pub issue_type: String,
    /// Import command printed in the success report
    pub import_command: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            label: DEFAULT_LABEL.to_string(),
            created_by: DEFAULT_CREATED_BY.to_string(),
            issue_type: DEFAULT_ISSUE_TYPE.to_string(),
            import_command: DEFAULT_IMPORT_COMMAND.to_string(),
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub fn with_issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }

    /// The full import command line for the configured output file
    pub fn import_hint(&self) -> String {
        format!("{} {}", self.import_command, self.output_path.display())
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("Label must not be empty".to_string());
        }

        if self.created_by.trim().is_empty() {
            return Err("Author tag must not be empty".to_string());
        }

        if self.issue_type.trim().is_empty() {
            return Err("Issue type must not be empty".to_string());
        }

        if self.input_path == self.output_path {
            return Err(format!(
                "Output path must differ from input path: {}",
                self.input_path.display()
            ));
        }

        Ok(())
    }
}
