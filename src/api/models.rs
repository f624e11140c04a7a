//! Wire types exchanged with the review service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of an edit awaiting review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditId(u64);

impl EditId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EditId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Label a reviewer assigns to an edit.
///
/// The set of accepted labels is owned by the server; the client only
/// forwards the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classification(String);

impl Classification {
    /// Label for a malicious edit.
    pub const VANDALISM: &'static str = "vandalism";
    /// Label for a good-faith edit.
    pub const CONSTRUCTIVE: &'static str = "constructive";
    /// Label for an edit the reviewer cannot judge.
    pub const SKIPPED: &'static str = "skip";

    /// Creates a classification from a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Maps the single-key shortcuts used by the front-ends to labels.
    ///
    /// `v` is vandalism, `c` constructive and `s` skip; any other key maps
    /// to `None`.
    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'v' => Some(Self::new(Self::VANDALISM)),
            'c' => Some(Self::new(Self::CONSTRUCTIVE)),
            's' => Some(Self::new(Self::SKIPPED)),
            _ => None,
        }
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Body returned by `GET /api/edit/next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NextEditResponse {
    /// Identifier of the next edit to review.
    pub edit_id: EditId,
}

/// Body sent to `POST /api/user-classification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRequest {
    /// Edit being classified.
    pub edit_id: EditId,
    /// Free-text reviewer comment, possibly empty.
    pub comment: String,
    /// Label chosen by the reviewer.
    pub classification: Classification,
    /// Whether the reviewer already confirmed this submission.
    pub confirmation: bool,
}

impl ClassificationRequest {
    /// Returns the same submission flagged as confirmed.
    #[must_use]
    pub fn confirmed(self) -> Self {
        Self {
            confirmation: true,
            ..self
        }
    }
}

/// Body returned by `POST /api/user-classification`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ClassificationResponse {
    /// The server wants the submission repeated with `confirmation: true`.
    #[serde(default)]
    pub require_confirmation: bool,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn classification_request_serialises_with_wire_field_names() {
        let request = ClassificationRequest {
            edit_id: EditId::new(42),
            comment: "reverted".to_owned(),
            classification: Classification::new(Classification::VANDALISM),
            confirmation: false,
        };

        let value = serde_json::to_value(&request).expect("request should serialise");

        assert_eq!(
            value,
            json!({
                "edit_id": 42,
                "comment": "reverted",
                "classification": "vandalism",
                "confirmation": false
            })
        );
    }

    #[test]
    fn next_edit_response_reads_integer_id() {
        let body: NextEditResponse =
            serde_json::from_value(json!({"edit_id": 42})).expect("body should decode");
        assert_eq!(body.edit_id, EditId::new(42));
    }

    #[test]
    fn missing_require_confirmation_defaults_to_false() {
        let body: ClassificationResponse =
            serde_json::from_value(json!({})).expect("empty body should decode");
        assert!(!body.require_confirmation);
    }

    #[rstest]
    #[case('v', Some(Classification::VANDALISM))]
    #[case('C', Some(Classification::CONSTRUCTIVE))]
    #[case('s', Some(Classification::SKIPPED))]
    #[case('x', None)]
    fn shortcuts_map_to_labels(#[case] key: char, #[case] expected: Option<&str>) {
        let label = Classification::from_shortcut(key);
        assert_eq!(label.as_ref().map(Classification::as_str), expected);
    }

    #[test]
    fn confirmed_keeps_everything_but_the_flag() {
        let request = ClassificationRequest {
            edit_id: EditId::new(7),
            comment: String::new(),
            classification: Classification::new("constructive"),
            confirmation: false,
        };

        let confirmed = request.clone().confirmed();

        assert!(confirmed.confirmation);
        assert_eq!(confirmed.edit_id, request.edit_id);
        assert_eq!(confirmed.classification, request.classification);
    }
}
