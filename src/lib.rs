//! Typed test-case descriptors and the per-case contract a harness
//! drives them through: load the fixture once, invoke the function
//! under test with the declared arguments, compare against the expected
//! value, and report one of a fixed set of outcomes.

pub mod case;
pub mod suite;
pub mod value;

pub use case::{Case, Descriptor, LoadError, LoadedCase, RunFn, SetupFn};
pub use suite::{check, CaseReport, Outcome, Suite, SuiteReport};
pub use value::Value;
