use std::{fmt, str::FromStr};

use serde::Serialize;

/// One of the additional skills offered as a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Skill {
    /// JavaScript.
    JavaScript,
    /// CSS.
    #[serde(rename = "CSS")]
    Css,
    /// Python.
    Python,
}

impl Skill {
    /// Every skill, in checkbox order.
    pub const ALL: [Self; 3] = [Self::JavaScript, Self::Css, Self::Python];

    /// The checkbox value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Css => "CSS",
            Self::Python => "Python",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a recognized skill.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Unknown skill '{0}': expected JavaScript, CSS or Python")]
pub struct ParseSkillError(String);

impl FromStr for Skill {
    type Err = ParseSkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseSkillError(s.to_string()))
    }
}

/// The set of selected skills.
///
/// Holds each skill at most once, in the order it was selected. Updates are
/// pure: [`SkillSet::with`] and [`SkillSet::without`] return a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<Skill>);

impl SkillSet {
    /// Creates an empty skill set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns a set that also contains `skill`.
    ///
    /// If `skill` is already present, the returned set is unchanged.
    #[must_use]
    pub fn with(&self, skill: Skill) -> Self {
        let mut skills = self.0.clone();
        if !skills.contains(&skill) {
            skills.push(skill);
        }
        Self(skills)
    }

    /// Returns a set without `skill`.
    #[must_use]
    pub fn without(&self, skill: Skill) -> Self {
        Self(self.0.iter().copied().filter(|s| *s != skill).collect())
    }

    /// Whether `skill` is selected.
    #[must_use]
    pub fn contains(&self, skill: Skill) -> bool {
        self.0.contains(&skill)
    }

    /// Whether no skill is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of selected skills.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the selected skills in selection order.
    pub fn iter(&self) -> impl Iterator<Item = Skill> + '_ {
        self.0.iter().copied()
    }

    /// Parses a comma-separated list, skipping blank and unrecognized entries.
    #[must_use]
    pub fn parse_lossy(list: &str) -> Self {
        list.split(',')
            .filter(|entry| !entry.trim().is_empty())
            .filter_map(|entry| match entry.parse() {
                Ok(skill) => Some(skill),
                Err(e) => {
                    tracing::debug!("ignoring skill entry: {e}");
                    None
                }
            })
            .collect()
    }
}

impl FromIterator<Skill> for SkillSet {
    fn from_iter<T: IntoIterator<Item = Skill>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |skills, skill| skills.with(skill))
    }
}

impl fmt::Display for SkillSet {
    /// Comma-joined listing, e.g. `JavaScript, Python`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let listing = self
            .0
            .iter()
            .map(|skill| skill.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_on_then_off_restores_the_set() {
        let before = SkillSet::new().with(Skill::Css);
        let after = before.with(Skill::Python).without(Skill::Python);
        assert_eq!(after, before);
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let once = SkillSet::new().with(Skill::JavaScript);
        let twice = once.with(Skill::JavaScript);
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn removing_absent_skill_is_a_no_op() {
        let skills = SkillSet::new().with(Skill::Python);
        assert_eq!(skills.without(Skill::Css), skills);
    }

    #[test]
    fn with_does_not_touch_the_original() {
        let original = SkillSet::new();
        let _updated = original.with(Skill::Css);
        assert!(original.is_empty());
    }

    #[test]
    fn keeps_selection_order() {
        let skills = SkillSet::new().with(Skill::Python).with(Skill::JavaScript);
        assert_eq!(
            skills.iter().collect::<Vec<_>>(),
            [Skill::Python, Skill::JavaScript]
        );
        assert_eq!(skills.to_string(), "Python, JavaScript");
    }

    #[test]
    fn collecting_removes_duplicates() {
        let skills: SkillSet = [Skill::Css, Skill::Css, Skill::Python].into_iter().collect();
        assert_eq!(skills.to_string(), "CSS, Python");
    }

    #[test]
    fn parse_lossy_drops_unknown_entries() {
        let skills = SkillSet::parse_lossy("javascript, Rust, ,python,JavaScript");
        assert_eq!(skills.to_string(), "JavaScript, Python");
    }

    #[test]
    fn parses_skills_case_insensitively() {
        assert_eq!("css".parse::<Skill>().unwrap(), Skill::Css);
        assert!("Go".parse::<Skill>().is_err());
    }

    #[test]
    fn serializes_as_string_list() {
        let skills = SkillSet::new().with(Skill::JavaScript).with(Skill::Css);
        assert_eq!(
            serde_json::to_string(&skills).unwrap(),
            r#"["JavaScript","CSS"]"#
        );
    }
}
