// Copyright (c) 2024-2026  config-validator authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! JUnit XML reporting for configuration file validation results.
//!
//! This crate renders an ordered list of validation outcomes into a
//! [JUnit XML report][1], the format consumed by CI dashboards and
//! test-result aggregators. The whole render is a pure transformation:
//! a slice of [`Report`]s goes in, an indented XML document comes out of
//! whatever [`io::Write`] sink the caller injects.
//!
//! ```rust
//! use config_validator::{JUnit, Report, Reporter as _};
//!
//! let results = [
//!     Report::valid("cfg/app.yaml"),
//!     Report::invalid("cfg/db.yaml", "unexpected key `prot`"),
//! ];
//!
//! let mut reporter = JUnit::new(std::io::stdout());
//! reporter.report(&results).unwrap();
//! ```
//!
//! [`io::Write`]: std::io::Write
//! [1]: https://llg.cubic.org/docs/junit

pub mod error;
pub mod report;
pub mod reporter;

#[doc(inline)]
pub use self::{
    error::{PropertyOwner, ReporterError},
    report::{Report, ValidationError},
    reporter::{junit::JUnit, Reporter},
};
