//! Field rules for [`CarResource`](crate::model::CarResource) bodies.
//!
//! Presence of every field is enforced by deserialization. The rules here cover what a
//! type cannot: `assembler` and `model` must not be blank.

use crate::model::CarResource;
use serde::Serialize;
use std::fmt;

/// One broken rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Every rule a request broke, reported together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// A single violation, e.g. for an unparsable body or path segment.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

/// Checks a car body against the field rules.
pub fn validate_car(resource: &CarResource) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if resource.assembler.trim().is_empty() {
        errors.push("assembler", "must not be blank");
    }
    if resource.model.trim().is_empty() {
        errors.push("model", "must not be blank");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
