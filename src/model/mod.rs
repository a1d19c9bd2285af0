//! Data model for the PRD input document and the beads issue output

pub mod issue;
pub mod story;

pub use issue::{format_timestamp, BeadsIssue, IssueStatus};
pub use story::{Prd, UserStory};
