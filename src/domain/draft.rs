// The in-progress application record.

use std::borrow::Cow;

use super::{Field, Position, Skill, SkillSet};

/// The mutable application record being edited.
///
/// Updates are expressed as consuming builders that return the next draft,
/// so every edit replaces the whole draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// The applicant's full name.
    pub full_name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// The position being applied for.
    pub position: Position,
    /// Years of relevant experience.
    pub relevant_experience: String,
    /// Portfolio link.
    pub portfolio_url: String,
    /// Management experience.
    pub management_experience: String,
    /// Selected additional skills.
    pub additional_skills: SkillSet,
    /// Preferred interview date and time.
    pub interview_time: String,
}

impl Draft {
    /// Returns the draft with `field` replaced by `value`.
    ///
    /// `position` values are parsed; anything that is not an option leaves
    /// the position unselected. `additionalSkills` takes a comma-separated
    /// list and replaces the whole set.
    #[must_use]
    pub fn with_field(self, field: Field, value: String) -> Self {
        match field {
            Field::FullName => Self {
                full_name: value,
                ..self
            },
            Field::Email => Self {
                email: value,
                ..self
            },
            Field::PhoneNumber => Self {
                phone_number: value,
                ..self
            },
            Field::Position => Self {
                position: value.parse().unwrap_or_default(),
                ..self
            },
            Field::RelevantExperience => Self {
                relevant_experience: value,
                ..self
            },
            Field::PortfolioUrl => Self {
                portfolio_url: value,
                ..self
            },
            Field::ManagementExperience => Self {
                management_experience: value,
                ..self
            },
            Field::AdditionalSkills => Self {
                additional_skills: SkillSet::parse_lossy(&value),
                ..self
            },
            Field::InterviewTime => Self {
                interview_time: value,
                ..self
            },
        }
    }

    /// Returns the draft with `skill` selected or deselected.
    #[must_use]
    pub fn with_skill(self, skill: Skill, selected: bool) -> Self {
        let additional_skills = if selected {
            self.additional_skills.with(skill)
        } else {
            self.additional_skills.without(skill)
        };
        Self {
            additional_skills,
            ..self
        }
    }

    /// The current value of `field` as text.
    ///
    /// The position renders as its option value and the skills as a
    /// comma-joined listing.
    #[must_use]
    pub fn value(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::FullName => Cow::Borrowed(&self.full_name),
            Field::Email => Cow::Borrowed(&self.email),
            Field::PhoneNumber => Cow::Borrowed(&self.phone_number),
            Field::Position => Cow::Borrowed(self.position.as_str()),
            Field::RelevantExperience => Cow::Borrowed(&self.relevant_experience),
            Field::PortfolioUrl => Cow::Borrowed(&self.portfolio_url),
            Field::ManagementExperience => Cow::Borrowed(&self.management_experience),
            Field::AdditionalSkills => Cow::Owned(self.additional_skills.to_string()),
            Field::InterviewTime => Cow::Borrowed(&self.interview_time),
        }
    }
}
