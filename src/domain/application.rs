// The finished, immutable application record.

use std::borrow::Cow;

use non_empty_string::NonEmptyString;
use serde::{Serialize, Serializer};

use super::{Draft, Field, Position, SkillSet};

/// A validated application.
///
/// Only a successful submit produces one, and it cannot be edited. Required
/// text fields are guaranteed non-empty; fields that do not apply to the
/// chosen position may be empty and are skipped when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(serialize_with = "non_empty")]
    full_name: NonEmptyString,
    #[serde(serialize_with = "non_empty")]
    email: NonEmptyString,
    #[serde(serialize_with = "non_empty")]
    phone_number: NonEmptyString,
    position: Position,
    #[serde(skip_serializing_if = "String::is_empty")]
    relevant_experience: String,
    #[serde(rename = "portfolioURL", skip_serializing_if = "String::is_empty")]
    portfolio_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    management_experience: String,
    additional_skills: SkillSet,
    #[serde(serialize_with = "non_empty")]
    interview_time: NonEmptyString,
}

fn non_empty<S: Serializer>(value: &NonEmptyString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_str())
}

impl Application {
    /// Freezes a draft that has already passed validation.
    ///
    /// Returns `None` if a required value is missing, which cannot happen for
    /// a draft with no validation errors.
    pub(crate) fn from_draft(draft: Draft) -> Option<Self> {
        if !draft.position.is_selected() || draft.additional_skills.is_empty() {
            return None;
        }

        Some(Self {
            full_name: NonEmptyString::new(draft.full_name).ok()?,
            email: NonEmptyString::new(draft.email).ok()?,
            phone_number: NonEmptyString::new(draft.phone_number).ok()?,
            position: draft.position,
            relevant_experience: draft.relevant_experience,
            portfolio_url: draft.portfolio_url,
            management_experience: draft.management_experience,
            additional_skills: draft.additional_skills,
            interview_time: NonEmptyString::new(draft.interview_time).ok()?,
        })
    }

    /// The applicant's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    /// Contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Contact phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    /// The position applied for. Never [`Position::Unselected`].
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Selected skills; never empty.
    #[must_use]
    pub const fn additional_skills(&self) -> &SkillSet {
        &self.additional_skills
    }

    /// Preferred interview date and time.
    #[must_use]
    pub fn interview_time(&self) -> &str {
        self.interview_time.as_str()
    }

    /// The value of `field` as display text, empty when not filled in.
    #[must_use]
    pub fn value(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::FullName => Cow::Borrowed(self.full_name.as_str()),
            Field::Email => Cow::Borrowed(self.email.as_str()),
            Field::PhoneNumber => Cow::Borrowed(self.phone_number.as_str()),
            Field::Position => Cow::Borrowed(self.position.as_str()),
            Field::RelevantExperience => Cow::Borrowed(&self.relevant_experience),
            Field::PortfolioUrl => Cow::Borrowed(&self.portfolio_url),
            Field::ManagementExperience => Cow::Borrowed(&self.management_experience),
            Field::AdditionalSkills => Cow::Owned(self.additional_skills.to_string()),
            Field::InterviewTime => Cow::Borrowed(self.interview_time.as_str()),
        }
    }
}
