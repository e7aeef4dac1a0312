// Copyright (c) 2024-2026  config-validator authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Structural validity check of a report tree.

use crate::error::{PropertyOwner, ReporterError, Result};

use super::model::TestSuites;

impl TestSuites {
    /// Checks the [`Property`] invariant across this whole report.
    ///
    /// Every property attached to any suite or case may carry either its
    /// `value` attribute or its inline text, never both at once. Each
    /// property collection is walked exactly once and the first violation is
    /// reported, naming the property and its owning suite or case.
    ///
    /// [`Property`]: super::model::Property
    ///
    /// # Errors
    ///
    /// [`ReporterError::InvalidProperty`] on the first violating property.
    pub fn validate(&self) -> Result<()> {
        for suite in &self.suites {
            for prop in suite.properties.iter().flatten() {
                if prop.has_both_values() {
                    return Err(ReporterError::invalid_property(
                        prop.name.clone(),
                        PropertyOwner::Suite(suite.name.clone()),
                    ));
                }
            }
            for case in suite.cases.iter().flatten() {
                for prop in case.properties.iter().flatten() {
                    if prop.has_both_values() {
                        return Err(ReporterError::invalid_property(
                            prop.name.clone(),
                            PropertyOwner::Case(case.name.clone()),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::reporter::junit::{Property, TestCase, TestSuite};

    use super::*;

    fn report_with_suite(suite: TestSuite) -> TestSuites {
        let mut suites = TestSuites::new("config-file-validator");
        suites.suites.push(suite);
        suites
    }

    #[test]
    fn accepts_report_without_properties() {
        let mut suite = TestSuite::new("config-file-validator");
        suite.cases = Some(vec![TestCase::new("a", "b")]);

        assert!(report_with_suite(suite).validate().is_ok());
    }

    #[test]
    fn accepts_single_form_and_empty_properties() {
        let mut case = TestCase::new("cfg/a.yaml validation", "config-file-validator");
        case.properties = Some(vec![
            Property::value("commit", "40de791"),
            Property::text("log", "all checks ran"),
            Property::default(),
        ]);
        let mut suite = TestSuite::new("config-file-validator");
        suite.properties = Some(vec![Property::value("host", "ci-03")]);
        suite.cases = Some(vec![case]);

        assert!(report_with_suite(suite).validate().is_ok());
    }

    #[test]
    fn rejects_suite_property_with_both_forms() {
        let mut suite = TestSuite::new("config-file-validator");
        suite.properties = Some(vec![Property {
            name: "build".into(),
            value: "x".into(),
            text: "y".into(),
        }]);

        let err = report_with_suite(suite).validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "property build in testsuite config-file-validator should \
             contain value or a text value, not both",
        );
    }

    #[test]
    fn rejects_case_property_with_both_forms() {
        let mut case = TestCase::new("cfg/a.yaml validation", "config-file-validator");
        case.properties = Some(vec![Property {
            name: "commit".into(),
            value: "x".into(),
            text: "y".into(),
        }]);
        let mut suite = TestSuite::new("config-file-validator");
        suite.cases = Some(vec![case]);

        let err = report_with_suite(suite).validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "property commit in testcase cfg/a.yaml validation should \
             contain value or a text value, not both",
        );
    }

    #[test]
    fn reports_first_violation_only() {
        let mut suite = TestSuite::new("config-file-validator");
        suite.properties = Some(vec![
            Property {
                name: "first".into(),
                value: "x".into(),
                text: "y".into(),
            },
            Property {
                name: "second".into(),
                value: "x".into(),
                text: "y".into(),
            },
        ]);

        let err = report_with_suite(suite).validate().unwrap_err();

        assert!(err.to_string().contains("property first"));
    }
}
