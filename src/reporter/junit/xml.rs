// Copyright (c) 2024-2026  config-validator authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Indented XML rendering of a report tree.
//!
//! The layout is byte-compatible with the legacy renderer: every line
//! carries a one-space base indent plus two more spaces per nesting level,
//! and elements without children are self-closing. Attributes holding their
//! type's zero value are omitted, except `name` on suites and cases and
//! `classname` on cases, which are always rendered.

use std::fmt::Write as _;

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::error::Result;

use super::model::{Fault, Property, TestCase, TestResult, TestSuite, TestSuites};

/// Base indent prepended to every rendered line.
const BASE_INDENT: &str = " ";

/// Additional indent applied per nesting level.
const INDENT: &str = "  ";

impl TestSuites {
    /// Renders this report into indented XML text, without the declaration
    /// line.
    ///
    /// Fails closed: [`TestSuites::validate()`] runs first, and any
    /// violation aborts the render before a single character is produced.
    ///
    /// # Errors
    ///
    /// If the report violates the property invariant, or its tree cannot be
    /// encoded as XML text.
    pub fn to_xml(&self) -> Result<String> {
        self.validate()?;

        let mut xml = XmlWriter::default();
        xml.suites(self)?;
        Ok(xml.buf)
    }
}

/// Line-oriented writer of indented XML elements.
#[derive(Debug, Default)]
struct XmlWriter {
    /// Rendered text accumulated so far.
    buf: String,

    /// Current nesting depth.
    depth: usize,
}

impl XmlWriter {
    /// Renders the root `<testsuites>` element.
    fn suites(&mut self, suites: &TestSuites) -> Result<()> {
        let mut attrs = String::new();
        attr_opt(&mut attrs, "name", &suites.name)?;
        attr_count(&mut attrs, "tests", suites.tests)?;
        attr_count(&mut attrs, "failures", suites.failures)?;
        attr_count(&mut attrs, "errors", suites.errors)?;
        attr_count(&mut attrs, "skipped", suites.skipped)?;
        attr_count(&mut attrs, "assertions", suites.assertions)?;
        attr_time(&mut attrs, suites.time)?;
        attr_timestamp(&mut attrs, suites.timestamp.as_ref())?;

        if suites.suites.is_empty() {
            return self.empty("testsuites", &attrs);
        }
        self.open("testsuites", &attrs)?;
        for suite in &suites.suites {
            self.suite(suite)?;
        }
        self.close("testsuites")
    }

    /// Renders one `<testsuite>` element.
    fn suite(&mut self, suite: &TestSuite) -> Result<()> {
        let mut attrs = String::new();
        attr(&mut attrs, "name", &suite.name)?;
        attr_count(&mut attrs, "tests", suite.tests)?;
        attr_count(&mut attrs, "failures", suite.failures)?;
        attr_count(&mut attrs, "errors", suite.errors)?;
        attr_count(&mut attrs, "skipped", suite.skipped)?;
        attr_count(&mut attrs, "assertions", suite.assertions)?;
        attr_time(&mut attrs, suite.time)?;
        attr_timestamp(&mut attrs, suite.timestamp.as_ref())?;
        attr_opt(&mut attrs, "file", &suite.file)?;

        let has_cases = suite.cases.as_ref().is_some_and(|c| !c.is_empty());
        let has_props = suite.properties.as_ref().is_some_and(|p| !p.is_empty());
        if !has_cases
            && !has_props
            && suite.system_out.is_none()
            && suite.system_err.is_none()
        {
            return self.empty("testsuite", &attrs);
        }

        self.open("testsuite", &attrs)?;
        for case in suite.cases.iter().flatten() {
            self.case(case)?;
        }
        if has_props {
            self.properties(suite.properties.as_deref().unwrap_or(&[]))?;
        }
        if let Some(out) = &suite.system_out {
            self.text_element("system-out", "", out)?;
        }
        if let Some(err) = &suite.system_err {
            self.text_element("system-err", "", err)?;
        }
        self.close("testsuite")
    }

    /// Renders one `<testcase>` element.
    fn case(&mut self, case: &TestCase) -> Result<()> {
        let mut attrs = String::new();
        attr(&mut attrs, "name", &case.name)?;
        attr(&mut attrs, "classname", &case.classname)?;
        attr_count(&mut attrs, "assertions", case.assertions)?;
        attr_time(&mut attrs, case.time)?;
        attr_opt(&mut attrs, "file", &case.file)?;
        attr_count(&mut attrs, "line", case.line)?;

        let marker = match &case.result {
            TestResult::Passed => None,
            TestResult::Skipped(f) => Some(("skipped", f)),
            TestResult::Error(f) => Some(("error", f)),
            TestResult::Failure(f) => Some(("failure", f)),
        };
        let has_props = case.properties.as_ref().is_some_and(|p| !p.is_empty());
        if marker.is_none() && !has_props {
            return self.empty("testcase", &attrs);
        }

        self.open("testcase", &attrs)?;
        if let Some((tag, fault)) = marker {
            self.fault(tag, fault)?;
        }
        if has_props {
            self.properties(case.properties.as_deref().unwrap_or(&[]))?;
        }
        self.close("testcase")
    }

    /// Renders a `<skipped>`, `<error>` or `<failure>` outcome record.
    fn fault(&mut self, tag: &str, fault: &Fault) -> Result<()> {
        let mut attrs = String::new();
        attr_opt(&mut attrs, "message", &fault.message)?;
        attr_opt(&mut attrs, "type", &fault.kind)?;

        if fault.body.is_empty() {
            self.empty(tag, &attrs)
        } else {
            self.text_element(tag, &attrs, &fault.body)
        }
    }

    /// Renders a `<properties>` wrapper with one `<property>` per entry.
    fn properties(&mut self, props: &[Property]) -> Result<()> {
        self.open("properties", "")?;
        for prop in props {
            let mut attrs = String::new();
            attr(&mut attrs, "name", &prop.name)?;
            attr_opt(&mut attrs, "value", &prop.value)?;
            if prop.text.is_empty() {
                self.empty("property", &attrs)?;
            } else {
                self.text_element("property", &attrs, &prop.text)?;
            }
        }
        self.close("properties")
    }

    /// Opens an element and increases the nesting depth.
    fn open(&mut self, tag: &str, attrs: &str) -> Result<()> {
        self.line();
        write!(self.buf, "<{tag}{attrs}>")?;
        self.depth += 1;
        Ok(())
    }

    /// Decreases the nesting depth and closes an element.
    fn close(&mut self, tag: &str) -> Result<()> {
        self.depth -= 1;
        self.line();
        write!(self.buf, "</{tag}>")?;
        Ok(())
    }

    /// Renders a childless element as self-closing.
    fn empty(&mut self, tag: &str, attrs: &str) -> Result<()> {
        self.line();
        write!(self.buf, "<{tag}{attrs}/>")?;
        Ok(())
    }

    /// Renders an element holding escaped text content on one line.
    fn text_element(&mut self, tag: &str, attrs: &str, text: &str) -> Result<()> {
        self.line();
        write!(self.buf, "<{tag}{attrs}>{}</{tag}>", escape_text(text))?;
        Ok(())
    }

    /// Starts a new line at the current nesting depth.
    fn line(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
        self.buf.push_str(BASE_INDENT);
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
    }
}

/// Appends a `name="value"` attribute unconditionally.
fn attr(out: &mut String, name: &str, value: &str) -> Result<()> {
    write!(out, " {name}=\"{}\"", escape_attr(value))?;
    Ok(())
}

/// Appends a `name="value"` attribute, omitting the empty value.
fn attr_opt(out: &mut String, name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    attr(out, name, value)
}

/// Appends a numeric attribute, omitting the zero value.
fn attr_count(out: &mut String, name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Ok(());
    }
    write!(out, " {name}=\"{value}\"")?;
    Ok(())
}

/// Appends the `time` attribute, omitting the zero value.
fn attr_time(out: &mut String, value: f32) -> Result<()> {
    if value == 0.0 {
        return Ok(());
    }
    write!(out, " time=\"{value}\"")?;
    Ok(())
}

/// Appends the RFC 3339 `timestamp` attribute, if present.
fn attr_timestamp(out: &mut String, value: Option<&OffsetDateTime>) -> Result<()> {
    if let Some(at) = value {
        attr(out, "timestamp", &at.format(&Rfc3339)?)?;
    }
    Ok(())
}

/// Escapes `value` for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes `value` for use as XML text content.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
