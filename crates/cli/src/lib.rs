//! # ModelSync CLI
//!
//! Command implementations for the `modelsync` binary.

pub mod commands;
