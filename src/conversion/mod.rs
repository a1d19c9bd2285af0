//! PRD to beads conversion module
//!
//! This module contains the core conversion logic, configuration, and the
//! run summary.

pub mod config;
pub mod description;
pub mod engine;
pub mod priority;
pub mod stats;

pub use config::ConversionConfig;
pub use description::compose_description;
pub use engine::{convert_prd_str, to_jsonl, BeadsData, ConversionEngine};
pub use priority::map_priority;
pub use stats::ConversionSummary;

pub use crate::error::ConversionResult;
