#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Default unary step budget shared by both configuration front ends.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;
