//! Summary of a conversion run

use crate::model::{BeadsIssue, IssueStatus};

/// Counts collected over the issues produced by one run
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// Number of stories converted
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    /// Issues that block at least one other story
    pub with_dependencies: usize,
    /// Run timestamp shared by every issue
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl ConversionSummary {
    pub fn from_issues(issues: &[BeadsIssue], generated_at: chrono::DateTime<chrono::Utc>) -> Self {
        let closed = issues
            .iter()
            .filter(|issue| issue.status == IssueStatus::Closed)
            .count();

        Self {
            total: issues.len(),
            open: issues.len() - closed,
            closed,
            with_dependencies: issues.iter().filter(|issue| !issue.blocks.is_empty()).count(),
            generated_at,
        }
    }

    /// One-line report
    pub fn format_summary(&self) -> String {
        format!(
            "{} issues ({} open, {} closed, {} with dependencies)",
            self.total, self.open, self.closed, self.with_dependencies
        )
    }
}
