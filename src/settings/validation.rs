//! Validation results for settings containers.

use std::fmt;

/// A single problem found while validating a settings container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Section of the offending container, e.g. `free_time`
    pub section: &'static str,
    /// Offending field
    pub field: &'static str,
    /// What is wrong
    pub message: String,
}

impl ValidationIssue {
    /// Creates a new issue.
    pub fn new(section: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            section,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Joins issues into one line-per-issue message.
pub fn describe_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::new("free_time", "min_minutes", "must not exceed max_minutes");
        assert_eq!(
            issue.to_string(),
            "free_time.min_minutes: must not exceed max_minutes"
        );
    }

    #[test]
    fn test_describe_issues() {
        let issues = vec![
            ValidationIssue::new("a", "x", "bad"),
            ValidationIssue::new("b", "y", "worse"),
        ];
        assert_eq!(describe_issues(&issues), "a.x: bad\nb.y: worse");
        assert_eq!(describe_issues(&[]), "");
    }
}
