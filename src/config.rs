// Configuration module for routelens
// Reads from environment variables with sensible defaults

use std::env;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Route-declaration directory under the project root (ROUTELENS_ROUTES_DIR)
    pub routes_dir: String,

    /// Controller directory under the project root (ROUTELENS_CONTROLLERS_DIR)
    pub controllers_dir: String,

    /// Source file extension without the dot (ROUTELENS_SOURCE_EXT)
    pub source_ext: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            routes_dir: "routes".to_string(),
            controllers_dir: "app/Http/Controllers".to_string(),
            source_ext: "php".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("ROUTELENS_ROUTES_DIR") {
            if val.is_empty() {
                eprintln!(
                    "routelens: Warning: ROUTELENS_ROUTES_DIR is empty, using default: {}",
                    config.routes_dir
                );
            } else {
                config.routes_dir = val;
            }
        }

        if let Ok(val) = env::var("ROUTELENS_CONTROLLERS_DIR") {
            if val.is_empty() {
                eprintln!(
                    "routelens: Warning: ROUTELENS_CONTROLLERS_DIR is empty, using default: {}",
                    config.controllers_dir
                );
            } else {
                config.controllers_dir = val;
            }
        }

        if let Ok(val) = env::var("ROUTELENS_SOURCE_EXT") {
            let trimmed = val.trim_start_matches('.');
            if trimmed.is_empty() {
                eprintln!(
                    "routelens: Warning: ROUTELENS_SOURCE_EXT is empty, using default: {}",
                    config.source_ext
                );
            } else {
                config.source_ext = trimmed.to_string();
            }
        }

        config
    }

    /// Get the global configuration instance
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(Config::from_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.routes_dir, "routes");
        assert_eq!(config.controllers_dir, "app/Http/Controllers");
        assert_eq!(config.source_ext, "php");
    }
}
