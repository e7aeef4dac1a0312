//! [JUnit XML report][1] [`Reporter`] implementation.
//!
//! The implementation is split across several focused modules:
//!
//! - [`model`]: the report tree (`testsuites` down to `property` nodes)
//! - [`builder`]: adaptation of validation results into the report tree
//! - [`validate`]: the property mutual-exclusion invariant
//! - [`xml`]: indented XML serialization
//! - [`writer`]: main JUnit reporter implementation
//!
//! [`Reporter`]: crate::reporter::Reporter
//! [1]: https://llg.cubic.org/docs/junit

pub mod builder;
pub mod model;
mod validate;
mod xml;
pub mod writer;

pub use builder::TOOL_NAME;
pub use model::{Fault, Property, TestCase, TestResult, TestSuite, TestSuites};
pub use writer::{JUnit, XML_DECLARATION};
