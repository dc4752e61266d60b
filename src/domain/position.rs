use std::{fmt, str::FromStr};

use serde::Serialize;

use super::Field;

/// The position being applied for.
///
/// This is the form's discriminant: it alone decides which conditional
/// fields are shown and required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    /// The empty "Select" option.
    #[default]
    #[serde(rename = "")]
    Unselected,
    /// Software developer.
    Developer,
    /// Designer.
    Designer,
    /// Manager.
    Manager,
}

impl Position {
    /// The select options, in display order.
    pub const OPTIONS: [Self; 4] = [
        Self::Unselected,
        Self::Developer,
        Self::Designer,
        Self::Manager,
    ];

    /// The option value. `Unselected` is the empty string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unselected => "",
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }

    /// The option text shown in a select control.
    #[must_use]
    pub const fn option_label(self) -> &'static str {
        match self {
            Self::Unselected => "Select",
            other => other.as_str(),
        }
    }

    /// Whether an actual position has been chosen.
    #[must_use]
    pub const fn is_selected(self) -> bool {
        !matches!(self, Self::Unselected)
    }

    /// The conditional fields this position shows and requires.
    ///
    /// This is the single table consulted by both rendering and validation.
    #[must_use]
    pub const fn conditional_fields(self) -> &'static [Field] {
        match self {
            Self::Unselected => &[],
            Self::Developer => &[Field::RelevantExperience],
            Self::Designer => &[Field::RelevantExperience, Field::PortfolioUrl],
            Self::Manager => &[Field::ManagementExperience],
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the position options.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Unknown position '{0}': expected Developer, Designer or Manager")]
pub struct ParsePositionError(String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::OPTIONS
            .into_iter()
            .find(|position| position.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("", Position::Unselected; "empty option")]
    #[test_case("Developer", Position::Developer; "developer")]
    #[test_case("designer", Position::Designer; "lower case")]
    #[test_case(" MANAGER ", Position::Manager; "padded upper case")]
    fn parses_options(input: &str, expected: Position) {
        assert_eq!(input.parse::<Position>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_position() {
        assert!("Intern".parse::<Position>().is_err());
    }

    #[test_case(Position::Unselected, &[]; "nothing without a position")]
    #[test_case(Position::Developer, &[Field::RelevantExperience]; "developer")]
    #[test_case(Position::Designer, &[Field::RelevantExperience, Field::PortfolioUrl]; "designer")]
    #[test_case(Position::Manager, &[Field::ManagementExperience]; "manager")]
    fn conditional_fields_by_position(position: Position, expected: &[Field]) {
        assert_eq!(position.conditional_fields(), expected);
    }

    #[test]
    fn conditional_table_only_names_conditional_fields() {
        for position in Position::OPTIONS {
            assert!(
                position
                    .conditional_fields()
                    .iter()
                    .all(|field| field.is_conditional())
            );
        }
    }

    #[test]
    fn unselected_renders_empty() {
        assert_eq!(Position::Unselected.to_string(), "");
        assert_eq!(Position::Unselected.option_label(), "Select");
        assert!(!Position::Unselected.is_selected());
        assert!(Position::Manager.is_selected());
    }
}
