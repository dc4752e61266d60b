//! Domain models for job applications.
//!
//! This module contains the form fields, the position discriminant, the skill
//! set, the draft and finished records, validation, and configuration.

/// Form field identifiers.
pub mod field;
pub use field::{Field, ParseFieldError};

/// The position being applied for, and the fields it makes required.
pub mod position;
pub use position::{ParsePositionError, Position};

/// Skills and the skill set.
pub mod skill;
pub use skill::{ParseSkillError, Skill, SkillSet};

mod draft;
pub use draft::Draft;

mod application;
pub use application::Application;

/// Draft validation.
pub mod validation;
pub use validation::{ValidationErrors, validate};

mod config;
pub use config::{Config, ConfigError, OutputFormat};
