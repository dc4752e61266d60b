//! Read-only summary of a finished application.

use std::fmt;

use crate::domain::{Application, Field};

/// The filled-in fields of an application as `(field, value)` rows.
///
/// Rows follow record order. Fields with an empty value are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    rows: Vec<(Field, String)>,
}

impl Summary {
    /// Builds the summary rows for `application`.
    ///
    /// Skills are listed comma-separated; every other field shows its value
    /// as entered. No validation happens here.
    #[must_use]
    pub fn render(application: &Application) -> Self {
        let rows = Field::ALL
            .into_iter()
            .filter_map(|field| {
                let value = application.value(field);
                (!value.is_empty()).then(|| (field, value.into_owned()))
            })
            .collect();
        Self { rows }
    }

    /// The rows, in record order.
    #[must_use]
    pub fn rows(&self) -> &[(Field, String)] {
        &self.rows
    }

    /// The rendered value of `field`, if it has a row.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.rows
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for Summary {
    /// One `fieldName: value` line per row.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (field, value) in &self.rows {
            writeln!(f, "{field}: {value}")?;
        }
        Ok(())
    }
}
