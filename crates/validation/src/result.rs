//! Validation outcome model and the declarative rule table.

use serde::Serialize;
use thiserror::Error;

/// Outcome of a validation call.
///
/// Either valid with no errors, or invalid with the complete, ordered list of
/// violated rules. Never partially filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A result holding exactly one violation (used for required-field checks).
    pub fn single(message: impl Into<String>) -> Self {
        Self::from_errors(vec![message.into()])
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Append another report's violations after this one's.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.errors.extend(other.errors);
        self.is_valid = self.errors.is_empty();
        self
    }

    /// Turn the report into a `Result` so handlers can use `?`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        iter.into_iter().fold(Self::valid(), Self::merge)
    }
}

/// One or more field violations, always the complete set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("validation failed: {}", .errors.join("; "))]
pub struct ValidationError {
    pub errors: Vec<String>,
}

/// A named predicate plus the message reported when it does not hold.
pub struct Rule<T: ?Sized> {
    pub message: &'static str,
    pub check: fn(&T) -> bool,
}

impl<T: ?Sized> Rule<T> {
    pub fn passes(&self, input: &T) -> bool {
        (self.check)(input)
    }
}

impl<T: ?Sized> core::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

/// Evaluate every rule in the table against `input`; no short-circuiting.
pub fn evaluate<T: ?Sized>(rules: &[Rule<T>], input: &T) -> ValidationResult {
    let errors = rules
        .iter()
        .filter(|rule| !rule.passes(input))
        .map(|rule| rule.message.to_string())
        .collect();
    ValidationResult::from_errors(errors)
}
