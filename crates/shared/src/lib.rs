//! # ModelSync Shared
//!
//! Common types and interfaces used across all ModelSync packages.

pub mod descriptor;
pub mod error;
pub mod naming;
pub mod schema;

// Re-exports
pub use descriptor::*;
pub use error::*;
pub use naming::*;
pub use schema::*;
