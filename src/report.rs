// Copyright (c) 2024-2026  config-validator authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Validation results consumed by [`Reporter`]s.
//!
//! How these results are produced is outside of this crate: the validation
//! collaborator hands over a finished, ordered list of them, one per checked
//! file.
//!
//! [`Reporter`]: crate::reporter::Reporter

use derive_more::{Display, Error, From};

/// Failed validation of a single file.
///
/// Reporters only ever use the string form of the underlying problem, so
/// this type carries the message alone.
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
#[display("{message}")]
pub struct ValidationError {
    /// Human-readable description of what went wrong.
    message: String,
}

impl ValidationError {
    /// Creates a new [`ValidationError`] with the given `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message of this [`ValidationError`].
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Outcome of validating a single file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    /// Path of the validated file.
    file_path: String,

    /// Error the validation finished with, if any.
    error: Option<ValidationError>,
}

impl Report {
    /// Creates a [`Report`] for a successfully validated file.
    #[must_use]
    pub fn valid(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            error: None,
        }
    }

    /// Creates a [`Report`] for a file that failed validation.
    #[must_use]
    pub fn invalid(
        file_path: impl Into<String>,
        error: impl Into<ValidationError>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            error: Some(error.into()),
        }
    }

    /// Returns the path of the validated file, as supplied by the validator.
    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Indicates whether the file passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the [`ValidationError`] of a failed validation.
    ///
    /// Present if, and only if, the file is invalid.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_report_carries_no_error() {
        let report = Report::valid("cfg/app.yaml");

        assert_eq!(report.file_path(), "cfg/app.yaml");
        assert!(report.is_valid());
        assert_eq!(report.error(), None);
    }

    #[test]
    fn invalid_report_exposes_error_string_form() {
        let report = Report::invalid("cfg/db.yaml", "bad key");

        assert!(!report.is_valid());
        assert_eq!(report.error().map(ToString::to_string).as_deref(), Some("bad key"));
    }

    #[test]
    fn validation_error_converts_from_string_forms() {
        let from_str: ValidationError = "broken".into();
        let from_string: ValidationError = "broken".to_string().into();

        assert_eq!(from_str, from_string);
        assert_eq!(from_str.message(), "broken");
    }
}
