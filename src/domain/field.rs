use std::{fmt, str::FromStr};

use serde::Serialize;

/// A field of the job application form.
///
/// Variants are declared in form order, so ordered collections keyed by
/// `Field` list fields the way the form displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The applicant's full name.
    FullName,
    /// Contact email address.
    Email,
    /// Contact phone number.
    PhoneNumber,
    /// The position being applied for.
    Position,
    /// Years of relevant experience (developers and designers).
    RelevantExperience,
    /// Portfolio link (designers).
    #[serde(rename = "portfolioURL")]
    PortfolioUrl,
    /// Management experience (managers).
    ManagementExperience,
    /// Selected additional skills.
    AdditionalSkills,
    /// Preferred interview date and time.
    InterviewTime,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 9] = [
        Self::FullName,
        Self::Email,
        Self::PhoneNumber,
        Self::Position,
        Self::RelevantExperience,
        Self::PortfolioUrl,
        Self::ManagementExperience,
        Self::AdditionalSkills,
        Self::InterviewTime,
    ];

    /// The record key of this field, e.g. `fullName` or `portfolioURL`.
    ///
    /// Validation errors and summary rows are keyed by this name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Position => "position",
            Self::RelevantExperience => "relevantExperience",
            Self::PortfolioUrl => "portfolioURL",
            Self::ManagementExperience => "managementExperience",
            Self::AdditionalSkills => "additionalSkills",
            Self::InterviewTime => "interviewTime",
        }
    }

    /// The label shown next to the input control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Position => "Applying for Position",
            Self::RelevantExperience => "Relevant Experience (Years)",
            Self::PortfolioUrl => "Portfolio URL",
            Self::ManagementExperience => "Management Experience",
            Self::AdditionalSkills => "Additional Skills",
            Self::InterviewTime => "Preferred Interview Time",
        }
    }

    /// The message recorded when a required field is left empty.
    #[must_use]
    pub const fn required_message(self) -> &'static str {
        match self {
            Self::FullName => "Full Name is required",
            Self::Email => "Email is required",
            Self::PhoneNumber => "Phone Number is required",
            Self::Position => "Position is required",
            Self::RelevantExperience => "Relevant Experience is required",
            Self::PortfolioUrl => "Portfolio URL is required",
            Self::ManagementExperience => "Management Experience is required",
            Self::AdditionalSkills => "At least one skill is required",
            Self::InterviewTime => "Preferred Interview Time is required",
        }
    }

    /// Whether the field is only shown for some positions.
    #[must_use]
    pub const fn is_conditional(self) -> bool {
        matches!(
            self,
            Self::RelevantExperience | Self::PortfolioUrl | Self::ManagementExperience
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string does not name a form field.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown field '{0}'")]
pub struct ParseFieldError(String);

impl FromStr for Field {
    type Err = ParseFieldError;

    /// Parses a record key (`phoneNumber`) or its kebab-case form
    /// (`phone-number`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|field| field.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}
