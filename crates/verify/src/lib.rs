//! # ModelSync Verify
//!
//! Loads the generated-artifact registry and reports drift between it and
//! the schema source.

pub mod registry;
pub mod verifier;

pub use registry::*;
pub use verifier::*;
