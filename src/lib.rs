//! Job application form
//!
//! A draft application is edited field by field, validated on submit, and
//! handed off as an immutable record to a read-only summary.

pub mod domain;
pub use domain::{
    Application, Config, Draft, Field, OutputFormat, Position, Skill, SkillSet,
    ValidationErrors, validate,
};

/// The form controller: draft state, conditional controls and submission.
pub mod form;
pub use form::{Control, FormController, InputKind, Submission};

/// Read-only rendering of a finished application.
pub mod summary;
pub use summary::Summary;
