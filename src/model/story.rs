//! PRD input document types
//!
//! Deserialization is deliberately forgiving for the two optional scalar
//! fields: `priority` accepts anything and keeps only values that read as an
//! integer, `passes` follows JSON truthiness. Required text fields stay strict.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A product-requirements document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prd {
    #[serde(rename = "userStories")]
    pub user_stories: Vec<UserStory>,
}

/// One user story from the PRD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    /// Level on the 1 (highest) to 3 (lowest) scale, `None` when absent or unreadable
    #[serde(
        default,
        deserialize_with = "deserialize_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub passes: bool,
}

impl UserStory {
    /// Create a story with only the required fields set
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            acceptance_criteria: None,
            depends_on: None,
            priority: None,
            passes: false,
        }
    }

    pub fn with_acceptance_criteria<I, S>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acceptance_criteria = Some(criteria.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_depends_on<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_passes(mut self, passes: bool) -> Self {
        self.passes = passes;
        self
    }

    /// Acceptance criteria, empty when the field was absent
    pub fn criteria(&self) -> &[String] {
        self.acceptance_criteria.as_deref().unwrap_or_default()
    }

    /// Dependency ids, empty when the field was absent
    pub fn dependencies(&self) -> &[String] {
        self.depends_on.as_deref().unwrap_or_default()
    }
}

/// Read a priority level out of an arbitrary JSON value
///
/// Integers, integral floats and strings holding an integer in canonical
/// form are accepted; `"+1"` or `"01"` are not.
pub fn priority_level(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.parse::<i64>().ok().filter(|n| n.to_string() == *s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// JSON truthiness
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn deserialize_priority<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(priority_level))
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(is_truthy))
}
