//! PRD to beads converter
//!
//! Reads the user stories of a product-requirements document (JSON) and
//! produces a JSONL file of issues for `bd import`.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

// Re-export commonly used types
pub use conversion::{BeadsData, ConversionConfig, ConversionEngine, ConversionSummary};
pub use error::{ConversionError, ConversionResult, ParseError};
pub use model::{BeadsIssue, IssueStatus, Prd, UserStory};
pub use parser::PrdSource;

/// Convert PRD JSON to beads JSONL with default configuration
pub fn convert_prd(json: &str) -> Result<String, ConversionError> {
    convert_prd_with_config(json, &ConversionConfig::default())
}

/// Convert PRD JSON to beads JSONL with custom configuration, stamped with the current time
pub fn convert_prd_with_config(
    json: &str,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let result = conversion::convert_prd_str(json, config, chrono::Utc::now())?;
    Ok(result.content)
}
