use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding [`CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "CLINIC_CONSOLE_CONFIG";

/// Config file location: `$CLINIC_CONSOLE_CONFIG` (from the environment or
/// `.env`), else `config.toml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| CONFIG_PATH.to_string())
}

/// Parse config file contents, falling back to all-off defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config, defaulting all flags off");
        AppConfig::default()
    })
}

/// Read `config.toml`, parse feature flags, and store them in the global
/// `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, all flags default to `false`.
pub fn load_feature_flags() {
    let _ = dotenvy::dotenv();
    let path = config_path();
    FLAGS.get_or_init(|| match std::fs::read_to_string(&path) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(path = %path, flags = ?config.features, "feature flags loaded");
            config.features
        }
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "config not found, defaulting all flags off");
            FeatureFlags::default()
        }
    });
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_feature_flags()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        demo_data: false,
        request_tracing: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}

/// Whether `load_feature_flags()` has run.
pub fn is_loaded() -> bool {
    FLAGS.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config() {
        let config = parse_config("[features]\ndemo_data = true\n");
        assert!(config.features.demo_data);
        assert!(!config.features.request_tracing);
    }

    #[test]
    fn parse_garbage_defaults_all_off() {
        let config = parse_config("[features\ndemo_data = ");
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn wrong_type_defaults_all_off() {
        let config = parse_config("[features]\ndemo_data = \"yes\"\n");
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn config_path_falls_back_to_project_file() {
        if std::env::var(CONFIG_PATH_ENV).is_err() {
            assert_eq!(config_path(), CONFIG_PATH);
        }
    }
}
