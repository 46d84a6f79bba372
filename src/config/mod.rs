// Configuration module for duopong
// Loads the TOML file and resolves it into immutable game settings

pub mod keys;
pub mod loader;
pub mod settings;
pub mod types;

pub use loader::{load_config, to_commented_toml};
pub use settings::Settings;
pub use types::Config;
