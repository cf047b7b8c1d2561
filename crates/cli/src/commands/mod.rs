//! CLI Commands

pub mod generate;
pub mod refresh;
pub mod verify;

pub use generate::GenerateCommand;
pub use refresh::RefreshCommand;
pub use verify::VerifyCommand;

/// Default location of generated model artifacts
pub const DEFAULT_MODELS_DIR: &str = "src/models/generated";
