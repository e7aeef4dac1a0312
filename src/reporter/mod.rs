// Copyright (c) 2024-2026  config-validator authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for outputting validation [`Report`]s.
//!
//! [`Report`]: crate::report::Report

pub mod junit;
pub mod out;

use crate::{error, report::Report};

#[doc(inline)]
pub use self::junit::JUnit;

/// Writer of validation [`Report`]s to some output.
pub trait Reporter {
    /// Renders the given `results` and writes them to this [`Reporter`]'s
    /// output.
    ///
    /// Either the whole report is written, or an error is returned before
    /// any output is produced.
    ///
    /// # Errors
    ///
    /// If the report cannot be rendered or written.
    fn report(&mut self, results: &[Report]) -> error::Result<()>;
}
