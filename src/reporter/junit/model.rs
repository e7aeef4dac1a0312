// Copyright (c) 2024-2026  config-validator authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [JUnit XML report][1] tree.
//!
//! The tree is built fresh for a single render, is immutable afterwards, and
//! each parent exclusively owns its children. Optional substructures are
//! [`Option`]s rather than empty collections, so an absent collection
//! suppresses the whole XML subtree.
//!
//! [1]: https://llg.cubic.org/docs/junit

use time::OffsetDateTime;

/// Root of a JUnit XML report: the `<testsuites>` element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestSuites {
    /// Name of the whole report.
    pub name: String,

    /// Total number of tests across all suites.
    pub tests: usize,

    /// Total number of failed tests across all suites.
    pub failures: usize,

    /// Total number of errored tests across all suites.
    pub errors: usize,

    /// Total number of skipped tests across all suites.
    pub skipped: usize,

    /// Total number of assertions across all suites.
    pub assertions: usize,

    /// Aggregated execution time of all suites, in seconds.
    pub time: f32,

    /// Moment the whole run has started at.
    pub timestamp: Option<OffsetDateTime>,

    /// Suites of this report, in execution order.
    pub suites: Vec<TestSuite>,
}

impl TestSuites {
    /// Creates a new empty [`TestSuites`] report with the given `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One logical group of checks: a `<testsuite>` element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestSuite {
    /// Name of this suite. Always rendered, even if empty.
    pub name: String,

    /// Number of tests in this suite.
    pub tests: usize,

    /// Number of failed tests in this suite.
    pub failures: usize,

    /// Number of errored tests in this suite.
    pub errors: usize,

    /// Number of skipped tests in this suite.
    pub skipped: usize,

    /// Number of assertions in this suite.
    pub assertions: usize,

    /// Execution time of this suite, in seconds.
    pub time: f32,

    /// Moment this suite has started at.
    pub timestamp: Option<OffsetDateTime>,

    /// Source file this suite was built from.
    pub file: String,

    /// Cases of this suite, in execution order.
    pub cases: Option<Vec<TestCase>>,

    /// Additional `name`/`value` annotations of this suite.
    pub properties: Option<Vec<Property>>,

    /// Captured standard output of this suite.
    pub system_out: Option<String>,

    /// Captured standard error of this suite.
    pub system_err: Option<String>,
}

impl TestSuite {
    /// Creates a new empty [`TestSuite`] with the given `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One individual check: a `<testcase>` element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestCase {
    /// Name of this case. Always rendered, even if empty.
    pub name: String,

    /// Owning-class label of this case. Always rendered, even if empty.
    pub classname: String,

    /// Number of assertions this case checked.
    pub assertions: usize,

    /// Execution time of this case, in seconds.
    pub time: f32,

    /// Source file this case was built from.
    pub file: String,

    /// Line in [`TestCase::file`] this case points at.
    pub line: usize,

    /// Outcome of this case.
    pub result: TestResult,

    /// Additional `name`/`value` annotations of this case.
    pub properties: Option<Vec<Property>>,
}

impl TestCase {
    /// Creates a new passed [`TestCase`] with the given `name` and
    /// `classname`.
    #[must_use]
    pub fn new(name: impl Into<String>, classname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classname: classname.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a single [`TestCase`].
///
/// A case carries at most one of the `skipped`/`error`/`failure` markers, so
/// their mutual exclusion holds by construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TestResult {
    /// No marker element is rendered.
    #[default]
    Passed,

    /// `<skipped>` marker.
    Skipped(Fault),

    /// `<error>` record.
    Error(Fault),

    /// `<failure>` record.
    Failure(Fault),
}

/// Details of a non-passed [`TestResult`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Fault {
    /// Short description of the outcome, rendered as the `message`
    /// attribute.
    pub message: String,

    /// Category label, rendered as the `type` attribute.
    pub kind: String,

    /// Free-text body, e.g. a stack trace or a diagnostic dump.
    pub body: String,
}

impl Fault {
    /// Creates a new [`Fault`] carrying the given `message` only.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// A `name`/`value` annotation attached to a [`TestSuite`] or a
/// [`TestCase`].
///
/// The value may be expressed either as the `value` attribute or as inline
/// text, never as both at once. Both forms being empty is valid and means an
/// empty value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Property {
    /// Name of this property.
    pub name: String,

    /// Attribute-style value of this property.
    pub value: String,

    /// Inline text value of this property.
    pub text: String,
}

impl Property {
    /// Creates a new [`Property`] with an attribute-style `value`.
    #[must_use]
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            text: String::new(),
        }
    }

    /// Creates a new [`Property`] with an inline `text` value.
    #[must_use]
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            text: text.into(),
        }
    }

    /// Indicates whether both value forms are populated at once, violating
    /// the report invariant.
    #[must_use]
    pub fn has_both_values(&self) -> bool {
        !self.value.is_empty() && !self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_is_passed_by_default() {
        let case = TestCase::new("cfg/a.yaml validation", "config-file-validator");

        assert_eq!(case.result, TestResult::Passed);
        assert!(case.properties.is_none());
    }

    #[test]
    fn property_constructors_populate_one_form_only() {
        let by_value = Property::value("commit", "40de791");
        let by_text = Property::text("commit", "40de791");

        assert!(!by_value.has_both_values());
        assert!(!by_text.has_both_values());
        assert!(!Property::default().has_both_values());
    }

    #[test]
    fn property_with_both_forms_is_detected() {
        let prop = Property {
            name: "commit".into(),
            value: "x".into(),
            text: "y".into(),
        };

        assert!(prop.has_both_values());
    }
}
