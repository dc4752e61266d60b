//! The form controller.
//!
//! [`FormController`] owns the draft and the errors from the last rejected
//! submit. It decides which controls are visible from the current position,
//! and hands a frozen [`Application`] to the caller once the draft validates.

use tracing::instrument;

use crate::domain::{Application, Draft, Field, Skill, ValidationErrors, validate};

/// The kind of input control used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text.
    Text,
    /// Email address.
    Email,
    /// Telephone number.
    Tel,
    /// Single choice among [`Position::OPTIONS`](crate::Position::OPTIONS).
    Select,
    /// Numeric text.
    Number,
    /// One checkbox per [`Skill`].
    Checkboxes,
    /// Local date and time.
    DateTime,
}

impl InputKind {
    /// The control used for `field`.
    #[must_use]
    pub const fn for_field(field: Field) -> Self {
        match field {
            Field::FullName | Field::PortfolioUrl | Field::ManagementExperience => Self::Text,
            Field::Email => Self::Email,
            Field::PhoneNumber => Self::Tel,
            Field::Position => Self::Select,
            Field::RelevantExperience => Self::Number,
            Field::AdditionalSkills => Self::Checkboxes,
            Field::InterviewTime => Self::DateTime,
        }
    }
}

/// One rendered input control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// The field this control edits.
    pub field: Field,
    /// The label shown next to the control.
    pub label: &'static str,
    /// The kind of control.
    pub kind: InputKind,
    /// The current value as text.
    pub value: String,
    /// The inline error from the last rejected submit.
    pub error: Option<String>,
}

/// The result of submitting the form.
#[derive(Debug)]
pub enum Submission {
    /// The draft was valid and is now a finished application.
    Accepted(Application),
    /// The draft was invalid. The controller keeps the draft and carries the
    /// errors for display.
    Rejected(FormController),
}

/// Owns the draft application and the current validation errors.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    draft: Draft,
    errors: ValidationErrors,
}

impl FormController {
    /// Starts a form with an empty draft and no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The errors from the last rejected submit.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Replaces the value of `field` in the draft.
    ///
    /// Does not validate; errors from an earlier submit stay until the next
    /// one.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        tracing::trace!(%field, %value, "update field");
        self.draft = std::mem::take(&mut self.draft).with_field(field, value);
    }

    /// Selects or deselects `skill`. Idempotent.
    pub fn toggle_skill(&mut self, skill: Skill, selected: bool) {
        tracing::trace!(%skill, selected, "toggle skill");
        self.draft = std::mem::take(&mut self.draft).with_skill(skill, selected);
    }

    /// The conditional fields shown for the current position.
    #[must_use]
    pub const fn conditional_fields(&self) -> &'static [Field] {
        self.draft.position.conditional_fields()
    }

    /// The visible fields, in form order.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<Field> {
        let conditional = self.conditional_fields();
        Field::ALL
            .into_iter()
            .filter(|field| !field.is_conditional() || conditional.contains(field))
            .collect()
    }

    /// Renders the visible controls with their values and inline errors.
    #[must_use]
    pub fn render(&self) -> Vec<Control> {
        self.visible_fields()
            .into_iter()
            .map(|field| Control {
                field,
                label: field.label(),
                kind: InputKind::for_field(field),
                value: self.draft.value(field).into_owned(),
                error: self.errors.get(field).map(str::to_string),
            })
            .collect()
    }

    /// Validates the draft.
    ///
    /// A valid draft becomes an [`Application`] and the controller is
    /// consumed. Otherwise the controller comes back with the new errors and
    /// its draft unchanged.
    #[instrument(level = "debug", skip(self), fields(position = %self.draft.position))]
    pub fn submit(self) -> Submission {
        let errors = validate(&self.draft);
        if errors.is_empty() {
            if let Some(application) = Application::from_draft(self.draft.clone()) {
                tracing::info!("application accepted");
                return Submission::Accepted(application);
            }
        }

        tracing::info!(failures = errors.len(), "application rejected");
        Submission::Rejected(Self {
            draft: self.draft,
            errors,
        })
    }
}
