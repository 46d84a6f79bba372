// Configuration file loading and creation
use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("duopong");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from `path`, or from the default location.
///
/// A missing default file is created; a missing explicit file is an error.
/// A file that fails to parse is reported and replaced by the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, io::Error> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = get_config_path();
            if !default_path.exists() {
                create_default_config(&default_path)?;
                return Ok(Config::default());
            }
            default_path
        }
    };

    let contents = fs::read_to_string(&config_path)?;
    Ok(parse_config(&contents, &config_path))
}

fn parse_config(contents: &str, origin: &Path) -> Config {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("failed to parse {}: {}", origin.display(), e);
            eprintln!("Warning: Failed to parse config file: {}", e);
            eprintln!("Using default configuration");
            Config::default()
        }
    }
}

/// Render a configuration as TOML with the explanatory header
pub fn to_commented_toml(config: &Config) -> Result<String, io::Error> {
    let toml_string = toml::to_string_pretty(config).map_err(io::Error::other)?;

    Ok(format!(
        "# duopong configuration file\n\
         # Restart the game after editing\n\
         #\n\
         # Key names: \"Up\", \"Down\", \"Left\", \"Right\", \"Space\", \"Enter\", \"Esc\"\n\
         #            or single characters like \"W\", \"S\", \"Q\"\n\
         #\n\
         # Colours: RGB values from 0-255\n\
         # Serve angles are fed to cos/sin unconverted, as in the classic game\n\n\
         {}",
        toml_string
    ))
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let commented_toml = to_commented_toml(&Config::default())?;
    fs::write(path, commented_toml)?;
    tracing::info!("created default config file at {}", path.display());
    Ok(())
}
