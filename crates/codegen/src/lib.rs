//! # ModelSync Codegen
//!
//! Derives model artifacts (fillable fields, casts, validation rules) from
//! schema definitions and emits them as Rust source files plus JSON
//! descriptors.

pub mod generator;
pub mod render;
pub mod report;
pub mod rules;

pub use generator::*;
pub use render::*;
pub use report::*;
pub use rules::*;
