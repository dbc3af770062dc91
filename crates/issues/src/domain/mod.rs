//! Domain types for issue tracking.
//!
//! This module contains the core domain types: the [`Issue`] record, its
//! integer identity, its status, and the validated inputs the store accepts.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum length (in characters, after trimming) of a title or description.
pub const MIN_TEXT_LENGTH: usize = 3;

/// Unique identifier for an issue.
///
/// Identifiers are assigned by the store, start at 1, and are never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct IssueId(pub i64);

impl IssueId {
    /// Create a new issue ID
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the numeric value of this ID.
    pub fn value(self) -> i64 {
        self.0
    }

    /// Parse an identifier supplied by a caller (for example a URL path segment).
    ///
    /// Surrounding whitespace is ignored. Anything that is not a base-10 integer
    /// is rejected with [`Error::InvalidId`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidId` if the input is empty or not an integer.
    pub fn parse(input: &str) -> Result<Self> {
        input
            .trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| Error::InvalidId {
                input: input.to_string(),
            })
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for IssueId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Represents an issue in the tracking system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique identifier for the issue
    pub id: IssueId,

    /// Issue title (stored trimmed)
    pub title: String,

    /// Issue description (stored trimmed)
    pub description: String,

    /// Current status
    pub status: IssueStatus,

    /// Creation timestamp (ISO 8601, UTC). Never changes after creation.
    #[serde(with = "timestamp")]
    #[schemars(with = "String")]
    pub created_at: DateTime<Utc>,
}

impl Issue {
    /// Check the invariants every stored issue must satisfy.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the title or description is too short or
    /// carries surrounding whitespace.
    pub fn validate(&self) -> Result<()> {
        validate_stored_text("title", &self.title)?;
        validate_stored_text("description", &self.description)?;
        Ok(())
    }
}

fn validate_stored_text(field: &str, value: &str) -> Result<()> {
    if value.trim() != value {
        return Err(Error::Validation(format!(
            "{field} must not have leading or trailing whitespace"
        )));
    }
    if value.chars().count() < MIN_TEXT_LENGTH {
        return Err(Error::Validation(format!(
            "{field} must be at least {MIN_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Status of an issue
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    /// Issue is open and waiting to be worked on
    #[default]
    Open,

    /// Issue is currently being worked on
    InProgress,

    /// Issue has been resolved
    Closed,
}

impl IssueStatus {
    /// Every valid status, in display order.
    pub const ALL: [IssueStatus; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// The wire representation of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Closed => "closed",
        }
    }

    /// Comma-separated list of the valid wire values, for error messages.
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}

/// Data for creating a new issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Issue title
    pub title: String,

    /// Issue description
    pub description: String,

    /// Initial status (defaults to [`IssueStatus::Open`])
    pub status: Option<IssueStatus>,
}

/// Data for updating an existing issue.
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueUpdate {
    /// New title (if updating)
    pub title: Option<String>,

    /// New description (if updating)
    pub description: Option<String>,

    /// New status (if updating)
    pub status: Option<IssueStatus>,
}

impl IssueUpdate {
    /// Returns true when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

/// Millisecond-precision RFC 3339 timestamps (`2026-02-18T10:00:00.000Z`).
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a UTC timestamp with millisecond precision and a `Z` suffix.
    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Deserialize any RFC 3339 timestamp into UTC.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn sample_issue() -> Issue {
        Issue {
            id: IssueId::new(1),
            title: "Login not working".to_string(),
            description: "Button does nothing".to_string(),
            status: IssueStatus::Open,
            created_at: Utc.with_ymd_and_hms(2026, 2, 18, 10, 0, 0).unwrap(),
        }
    }

    #[rstest]
    #[case::plain("7", 7)]
    #[case::padded("  42 ", 42)]
    #[case::zero("0", 0)]
    #[case::negative("-3", -3)]
    fn test_parse_issue_id_valid(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(IssueId::parse(input).unwrap(), IssueId::new(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    #[case::word("abc")]
    #[case::fraction("1.5")]
    #[case::integral_decimal("1.0")]
    #[case::exponent("1e2")]
    #[case::hex("0x10")]
    #[case::out_of_range("99999999999999999999")]
    #[case::trailing_garbage("12abc")]
    fn test_parse_issue_id_invalid(#[case] input: &str) {
        let err = IssueId::parse(input).unwrap_err();
        assert!(matches!(err, Error::InvalidId { .. }));
        assert_eq!(err.to_string(), "Invalid id");
    }

    #[rstest]
    #[case::open("open", IssueStatus::Open)]
    #[case::in_progress("in-progress", IssueStatus::InProgress)]
    #[case::closed("closed", IssueStatus::Closed)]
    fn test_status_from_str(#[case] input: &str, #[case] expected: IssueStatus) {
        assert_eq!(input.parse::<IssueStatus>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case::unknown("done")]
    #[case::snake_case("in_progress")]
    #[case::uppercase("OPEN")]
    fn test_status_from_str_rejects(#[case] input: &str) {
        let err = input.parse::<IssueStatus>().unwrap_err();
        assert!(matches!(err, Error::InvalidStatus(ref s) if s == input));
    }

    #[test]
    fn test_valid_values_message() {
        assert_eq!(IssueStatus::valid_values(), "open, in-progress, closed");
    }

    #[test]
    fn test_issue_json_shape() {
        let json = serde_json::to_value(sample_issue()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Login not working",
                "description": "Button does nothing",
                "status": "open",
                "createdAt": "2026-02-18T10:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_in_progress_serializes_kebab_case() {
        let mut issue = sample_issue();
        issue.status = IssueStatus::InProgress;
        let json = serde_json::to_value(issue).unwrap();
        assert_eq!(json["status"], "in-progress");
    }

    #[test]
    fn test_issue_deserializes_from_wire_format() {
        let issue: Issue = serde_json::from_str(
            r#"{"id":1,"title":"Login not working","description":"Button does nothing","status":"open","createdAt":"2026-02-18T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(issue, sample_issue());
    }

    #[test]
    fn test_validate_accepts_trimmed_issue() {
        assert!(sample_issue().validate().is_ok());
    }

    #[rstest]
    #[case::short_title("ab", "Button does nothing", "title must be at least 3")]
    #[case::padded_title(" Login ", "Button does nothing", "title must not have")]
    #[case::short_description("Login not working", "no", "description must be at least 3")]
    fn test_validate_rejects(
        #[case] title: &str,
        #[case] description: &str,
        #[case] expected: &str,
    ) {
        let mut issue = sample_issue();
        issue.title = title.to_string();
        issue.description = description.to_string();
        let err = issue.validate().unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        let mut issue = sample_issue();
        issue.title = "äöü".to_string();
        assert!(issue.validate().is_ok());
    }

    #[test]
    fn test_issue_update_is_empty() {
        assert!(IssueUpdate::default().is_empty());
        let update = IssueUpdate {
            status: Some(IssueStatus::Closed),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
