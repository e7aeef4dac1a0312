//! Main JUnit XML reporter implementation.

use std::io;

use crate::{
    error::Result,
    report::Report,
    reporter::{out::WriteStrExt as _, Reporter},
};

use super::builder;

/// Fixed declaration line prepended to every rendered report.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// [JUnit XML report][1] [`Reporter`] implementation outputting XML into an
/// [`io::Write`] implementor.
///
/// Rendering is a single pure computation over the given results followed by
/// one write: either the whole report reaches the output, or an error is
/// returned and the output stays untouched.
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Clone, Debug)]
pub struct JUnit<Out: io::Write> {
    /// [`io::Write`] implementor to output the XML report into.
    output: Out,
}

impl<Out: io::Write> JUnit<Out> {
    /// Creates a new [`JUnit`] [`Reporter`] outputting the XML report into
    /// the given `output`.
    #[must_use]
    pub fn new(output: Out) -> Self {
        Self { output }
    }

    /// Returns the underlying output sink, consuming this [`Reporter`].
    #[must_use]
    pub fn into_inner(self) -> Out {
        self.output
    }
}

impl<Out: io::Write> Reporter for JUnit<Out> {
    fn report(&mut self, results: &[Report]) -> Result<()> {
        let suites = builder::build(results);

        tracing::debug!(tests = suites.tests, "rendering JUnit report");

        let body = suites.to_xml()?;

        self.output.write_line(format!("{XML_DECLARATION}\n{body}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::reporter::out::WritableString;

    use super::*;

    fn render(results: &[Report]) -> String {
        let mut reporter = JUnit::new(WritableString::default());
        reporter.report(results).unwrap();
        reporter.into_inner().0
    }

    #[test]
    fn prepends_declaration_and_trailing_newline() {
        let output = render(&[]);

        assert_eq!(
            output,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n \
             <testsuites name=\"config-file-validator\">\n   \
             <testsuite name=\"config-file-validator\"/>\n \
             </testsuites>\n",
        );
    }

    #[test]
    fn renders_mixed_results_exactly() {
        let results = [
            Report::valid("cfg/a.yaml"),
            Report::invalid("cfg\\b.yaml", "bad key"),
        ];

        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            " <testsuites name=\"config-file-validator\" tests=\"2\">\n",
            "   <testsuite name=\"config-file-validator\" errors=\"1\">\n",
            "     <testcase name=\"cfg/a.yaml validation\" \
                   classname=\"config-file-validator\" file=\"cfg/a.yaml\"/>\n",
            "     <testcase name=\"cfg/b.yaml validation\" \
                   classname=\"config-file-validator\" file=\"cfg/b.yaml\">\n",
            "       <failure message=\"bad key\"/>\n",
            "     </testcase>\n",
            "   </testsuite>\n",
            " </testsuites>\n",
        );
        assert_eq!(render(&results), expected);
    }

    #[test]
    fn propagates_sink_write_errors() {
        /// [`io::Write`] implementor failing every write.
        struct BrokenSink;

        impl io::Write for BrokenSink {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut reporter = JUnit::new(BrokenSink);

        let err = reporter.report(&[Report::valid("cfg/a.yaml")]).unwrap_err();

        assert!(matches!(err, crate::error::ReporterError::Io(_)));
    }
}
