use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use super::{Draft, Field};

/// Message recorded when a portfolio link is present but malformed.
pub const INVALID_URL_MESSAGE: &str = "Portfolio URL is not valid";

/// Optional scheme, one or more `label.` segments, a final label, then an
/// optional path.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]+(/[A-Za-z0-9_\- ./?%&=]*)?$")
        .expect("URL pattern is a valid regex")
});

/// Field-level validation failures, keyed by field.
///
/// A draft is valid iff this mapping is empty. Entries iterate in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// Records `message` for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// The message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` has a recorded failure.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Whether there are no failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The failing fields, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Iterates over `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Whether `url` has the shape of a link: optional `http://` or `https://`,
/// dotted host labels, and an optional path.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

/// Validates a draft.
///
/// Each check is independent and inserts at most one message, keyed by the
/// field it concerns. Conditional requirements come from
/// [`Position::conditional_fields`](super::Position::conditional_fields).
#[must_use]
pub fn validate(draft: &Draft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for field in [
        Field::FullName,
        Field::Email,
        Field::PhoneNumber,
        Field::InterviewTime,
    ] {
        if draft.value(field).trim().is_empty() {
            errors.insert(field, field.required_message());
        }
    }

    if !draft.position.is_selected() {
        errors.insert(Field::Position, Field::Position.required_message());
    }

    for &field in draft.position.conditional_fields() {
        let value = draft.value(field);
        if value.trim().is_empty() {
            errors.insert(field, field.required_message());
        } else if field == Field::PortfolioUrl && !is_valid_url(&value) {
            errors.insert(field, INVALID_URL_MESSAGE);
        }
    }

    if draft.additional_skills.is_empty() {
        errors.insert(
            Field::AdditionalSkills,
            Field::AdditionalSkills.required_message(),
        );
    }

    tracing::debug!(failures = errors.len(), "validated draft");
    errors
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::{Position, Skill};

    fn complete_draft(position: &str) -> Draft {
        Draft::default()
            .with_field(Field::FullName, "Grace Hopper".to_string())
            .with_field(Field::Email, "grace@example.com".to_string())
            .with_field(Field::PhoneNumber, "555-0100".to_string())
            .with_field(Field::Position, position.to_string())
            .with_field(Field::RelevantExperience, "12".to_string())
            .with_field(Field::PortfolioUrl, "https://example.com/p".to_string())
            .with_field(Field::ManagementExperience, "8 years".to_string())
            .with_skill(Skill::Python, true)
            .with_field(Field::InterviewTime, "2024-05-01T10:00".to_string())
    }

    #[test]
    fn empty_draft_has_six_errors() {
        let errors = validate(&Draft::default());

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            [
                Field::FullName,
                Field::Email,
                Field::PhoneNumber,
                Field::Position,
                Field::AdditionalSkills,
                Field::InterviewTime,
            ]
        );
        assert_eq!(errors.get(Field::FullName), Some("Full Name is required"));
        assert_eq!(
            errors.get(Field::AdditionalSkills),
            Some("At least one skill is required")
        );
        assert_eq!(
            errors.get(Field::InterviewTime),
            Some("Preferred Interview Time is required")
        );
    }

    #[test]
    fn whitespace_only_values_are_empty() {
        let draft = complete_draft("Developer").with_field(Field::Email, "   ".to_string());
        let errors = validate(&draft);
        assert_eq!(errors.fields().collect::<Vec<_>>(), [Field::Email]);
    }

    #[test]
    fn developer_requires_relevant_experience() {
        let draft = complete_draft("Developer").with_field(Field::RelevantExperience, String::new());
        let errors = validate(&draft);
        assert_eq!(
            errors.get(Field::RelevantExperience),
            Some("Relevant Experience is required")
        );

        let draft = draft.with_field(Field::RelevantExperience, "2".to_string());
        assert!(!validate(&draft).contains(Field::RelevantExperience));
    }

    #[test]
    fn designer_rejects_malformed_portfolio() {
        let draft = complete_draft("Designer").with_field(Field::PortfolioUrl, "not a url".to_string());
        let errors = validate(&draft);
        assert_eq!(
            errors.get(Field::PortfolioUrl),
            Some("Portfolio URL is not valid")
        );

        let draft = draft.with_field(Field::PortfolioUrl, "https://example.com/p".to_string());
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn designer_requires_portfolio() {
        let draft = complete_draft("Designer").with_field(Field::PortfolioUrl, " ".to_string());
        assert_eq!(
            validate(&draft).get(Field::PortfolioUrl),
            Some("Portfolio URL is required")
        );
    }

    #[test]
    fn manager_requires_only_management_experience() {
        let draft = complete_draft("Manager")
            .with_field(Field::RelevantExperience, String::new())
            .with_field(Field::PortfolioUrl, String::new())
            .with_field(Field::ManagementExperience, String::new());
        let errors = validate(&draft);

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            [Field::ManagementExperience]
        );
        assert_eq!(
            errors.get(Field::ManagementExperience),
            Some("Management Experience is required")
        );
    }

    #[test]
    fn required_conditional_fields_match_visible_ones() {
        for position in Position::OPTIONS {
            let mut draft = complete_draft(position.as_str());
            for field in Field::ALL.into_iter().filter(|f| f.is_conditional()) {
                draft = draft.with_field(field, String::new());
            }
            let missing: Vec<_> = validate(&draft)
                .fields()
                .filter(|field| field.is_conditional())
                .collect();
            assert_eq!(missing, position.conditional_fields());
        }
    }

    #[test]
    fn complete_draft_is_valid_for_every_position() {
        for position in ["Developer", "Designer", "Manager"] {
            assert!(validate(&complete_draft(position)).is_empty(), "{position}");
        }
    }

    #[test_case("https://example.com/p", true; "https with path")]
    #[test_case("http://example.com", true; "http without path")]
    #[test_case("example.com", true; "no scheme")]
    #[test_case("www.my-site.co.uk/work?id=1&x=%20", true; "query characters")]
    #[test_case("https://example.com/my work", true; "space in path")]
    #[test_case("not a url", false; "spaces without dots")]
    #[test_case("localhost", false; "single label")]
    #[test_case("ftp://example.com", false; "other scheme")]
    #[test_case("https://example..com", false; "empty label")]
    #[test_case("https://example.com/#top", false; "fragment")]
    fn url_shape(url: &str, expected: bool) {
        assert_eq!(is_valid_url(url), expected);
    }
}
