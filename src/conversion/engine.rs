//! Core conversion engine for PRD to beads transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::description::compose_description;
use crate::conversion::priority::map_priority;
use crate::conversion::stats::ConversionSummary;
use crate::error::{ConversionError, ConversionResult};
use crate::model::{format_timestamp, BeadsIssue, IssueStatus, Prd, UserStory};
use crate::output::write_atomic;
use crate::parser::PrdSource;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Core conversion result
#[derive(Debug, Clone)]
pub struct BeadsData {
    /// Serialized JSONL, one issue per line
    pub content: String,
    pub issues: Vec<BeadsIssue>,
    pub summary: ConversionSummary,
}

impl BeadsData {
    /// Get the serialized output
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Number of issues produced
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Transform one story into a beads issue stamped with `now`
    pub fn convert_story(&self, story: &UserStory, now: DateTime<Utc>) -> BeadsIssue {
        BeadsIssue {
            id: story.id.clone(),
            title: story.title.clone(),
            description: compose_description(
                &story.description,
                story.criteria(),
                story.dependencies(),
            ),
            status: IssueStatus::from_passes(story.passes),
            priority: map_priority(story.priority),
            issue_type: self.config.issue_type.clone(),
            labels: vec![self.config.label.clone()],
            created_at: now,
            created_by: self.config.created_by.clone(),
            updated_at: now,
            blocks: story.dependencies().to_vec(),
        }
    }

    /// Convert every story in the PRD, in order, with one shared timestamp
    pub fn convert(&self, prd: &Prd, now: DateTime<Utc>) -> ConversionResult<BeadsData> {
        let issues: Vec<BeadsIssue> = prd
            .user_stories
            .iter()
            .map(|story| {
                debug!(id = %story.id, "converting story");
                self.convert_story(story, now)
            })
            .collect();

        let content = to_jsonl(&issues)?;
        let summary = ConversionSummary::from_issues(&issues, now);
        info!(
            generated_at = %format_timestamp(&summary.generated_at),
            "converted {}",
            summary.format_summary()
        );

        Ok(BeadsData {
            content,
            issues,
            summary,
        })
    }

    /// Convert a PRD from a source
    pub fn convert_from_source(
        &self,
        source: &PrdSource,
        now: DateTime<Utc>,
    ) -> ConversionResult<BeadsData> {
        let prd = source.load()?;
        info!(source = %source.description(), stories = prd.user_stories.len(), "loaded PRD");
        self.convert(&prd, now)
    }

    /// Convert a PRD JSON string
    pub fn convert_string(&self, json_str: &str, now: DateTime<Utc>) -> ConversionResult<BeadsData> {
        self.convert_from_source(&PrdSource::String(json_str.to_string()), now)
    }

    /// Read the configured input, convert it and write the configured output.
    ///
    /// Nothing is written unless every story converts and serializes.
    pub fn run(&self, now: DateTime<Utc>) -> ConversionResult<BeadsData> {
        self.config.validate().map_err(ConversionError::configuration)?;

        let source = PrdSource::File(self.config.input_path.clone());
        let data = self.convert_from_source(&source, now)?;

        write_atomic(&self.config.output_path, &data.content)?;
        info!(path = %self.config.output_path.display(), "wrote beads issues");

        Ok(data)
    }
}

/// Serialize issues as JSONL: one compact object per line, each line
/// newline-terminated. An empty list yields a single newline.
pub fn to_jsonl(issues: &[BeadsIssue]) -> ConversionResult<String> {
    let lines = issues
        .iter()
        .map(|issue| {
            serde_json::to_string(issue).map_err(|e| {
                ConversionError::serialization(format!("issue {}: {}", issue.id, e))
            })
        })
        .collect::<ConversionResult<Vec<String>>>()?;

    let mut content = lines.join("\n");
    content.push('\n');
    Ok(content)
}

/// High-level conversion functions
/// Convert a PRD JSON string with the given configuration and timestamp
pub fn convert_prd_str(
    json_str: &str,
    config: &ConversionConfig,
    now: DateTime<Utc>,
) -> ConversionResult<BeadsData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_string(json_str, now)
}
