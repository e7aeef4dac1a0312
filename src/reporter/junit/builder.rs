//! Adaptation of validation results into the report tree.

use crate::report::Report;

use super::model::{Fault, TestCase, TestResult, TestSuite, TestSuites};

/// Tool label used as the report, suite and `classname` identifier.
pub const TOOL_NAME: &str = "config-file-validator";

/// Builds the report tree for the given validation `results`.
///
/// Each result becomes one case of a single suite, preserving input order.
/// An invalid result attaches a failure record carrying the string form of
/// its error, and is counted in the suite's `errors` total: by this tool's
/// convention validation problems are tallied as errors, never as failures.
#[must_use]
pub fn build(results: &[Report]) -> TestSuites {
    let mut errors = 0;
    let cases = results
        .iter()
        .map(|report| {
            // Separator-agnostic paths, so reports are identical across
            // host platforms.
            let path = report.file_path().replace('\\', "/");

            tracing::trace!(
                file = %path,
                valid = report.is_valid(),
                "collected validation result",
            );

            let mut case = TestCase::new(format!("{path} validation"), TOOL_NAME);
            case.file = path;
            if let Some(err) = report.error() {
                errors += 1;
                case.result = TestResult::Failure(Fault::message(err.to_string()));
            }
            case
        })
        .collect();

    let mut suite = TestSuite::new(TOOL_NAME);
    suite.errors = errors;
    suite.cases = Some(cases);

    let mut suites = TestSuites::new(TOOL_NAME);
    suites.tests = results.len();
    suites.suites.push(suite);
    suites
}
