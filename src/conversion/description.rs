//! Issue description composition

const CRITERIA_HEADER: &str = "**Acceptance Criteria:**";
const DEPENDENCIES_HEADER: &str = "**Dependencies:**";

/// Build an issue description from a story's description, acceptance
/// criteria and dependencies.
///
/// Criteria become unchecked checklist lines under a header, dependencies a
/// single comma-separated line. Text is inserted verbatim and the result is
/// trimmed.
pub fn compose_description<S: AsRef<str>>(base: &str, criteria: &[S], dependencies: &[S]) -> String {
    let mut description = String::from(base);

    if !criteria.is_empty() {
        description.push_str("\n\n");
        description.push_str(CRITERIA_HEADER);
        description.push('\n');
        for criterion in criteria {
            description.push_str("- [ ] ");
            description.push_str(criterion.as_ref());
            description.push('\n');
        }
    }

    if !dependencies.is_empty() {
        let ids: Vec<&str> = dependencies.iter().map(AsRef::as_ref).collect();
        description.push_str("\n\n");
        description.push_str(DEPENDENCIES_HEADER);
        description.push(' ');
        description.push_str(&ids.join(", "));
    }

    description.trim().to_string()
}
