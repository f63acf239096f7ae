//! Configuration management for articlegen.
//!
//! Settings are layered: built-in defaults, then the JSON file at `~/.articlegen/config`,
//! then environment overrides. `Config::load` validates the result.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use builder::ConfigBuilder;
pub use types::{
    ArticleSettings, AssemblyStrategy, Config, GenerationPreset, LlmProvider, LlmSettings,
    ModelSettings, PresetSettings,
};

pub use constants::DEFAULT_TIMEOUT_SECS;
