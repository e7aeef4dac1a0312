// Copyright (c) 2024-2026  config-validator authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reporter error types.
//!
//! Rendering a report can fail in two structural ways (an invalid property
//! or a tree that cannot be encoded as text) and one environmental way (the
//! output sink rejecting the write). All of them are deterministic, surfaced
//! synchronously, and abort the render before any output is produced.

use std::{fmt, io};

use derive_more::{Display, Error, From};

/// Element owning a [`Property`] reported in an invariant violation.
///
/// [`Property`]: crate::reporter::junit::Property
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum PropertyOwner {
    /// Property attached to a `testsuite` element.
    #[display("testsuite {_0}")]
    Suite(String),

    /// Property attached to a `testcase` element.
    #[display("testcase {_0}")]
    Case(String),
}

/// Errors of rendering a JUnit XML report.
#[derive(Debug, Display, Error, From)]
pub enum ReporterError {
    /// Failed to write the rendered report into the output sink.
    #[display("I/O error: {_0}")]
    Io(io::Error),

    /// Failed to encode the report tree as XML text.
    #[display("XML generation failed: {_0}")]
    Xml(fmt::Error),

    /// Failed to format a `timestamp` attribute.
    #[display("timestamp formatting failed: {_0}")]
    Timestamp(time::error::Format),

    /// A property carried both of its mutually exclusive value forms.
    #[display(
        "property {name} in {owner} should contain value or a text value, \
         not both"
    )]
    #[from(ignore)]
    InvalidProperty {
        /// Name of the offending property.
        name: String,

        /// Suite or case owning the offending property.
        owner: PropertyOwner,
    },
}

impl ReporterError {
    /// Creates a [`ReporterError::InvalidProperty`] for the `name`d property
    /// owned by `owner`.
    #[must_use]
    pub fn invalid_property(name: impl Into<String>, owner: PropertyOwner) -> Self {
        Self::InvalidProperty {
            name: name.into(),
            owner,
        }
    }

    /// Indicates whether this error is a property invariant violation.
    #[must_use]
    pub fn is_invalid_property(&self) -> bool {
        matches!(self, Self::InvalidProperty { .. })
    }
}

/// Result of reporter operations.
pub type Result<T> = std::result::Result<T, ReporterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_suite_violation_message() {
        let err = ReporterError::invalid_property(
            "build",
            PropertyOwner::Suite("config-file-validator".into()),
        );

        assert_eq!(
            err.to_string(),
            "property build in testsuite config-file-validator should \
             contain value or a text value, not both",
        );
    }

    #[test]
    fn formats_case_violation_message() {
        let err = ReporterError::invalid_property(
            "commit",
            PropertyOwner::Case("cfg/a.yaml validation".into()),
        );

        assert_eq!(
            err.to_string(),
            "property commit in testcase cfg/a.yaml validation should \
             contain value or a text value, not both",
        );
        assert!(err.is_invalid_property());
    }

    #[test]
    fn converts_io_errors() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ReporterError = io_err.into();

        assert!(matches!(err, ReporterError::Io(_)));
        assert!(!err.is_invalid_property());
    }
}
