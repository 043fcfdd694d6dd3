use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::WorkspaceResult;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "fieldmask.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub locale: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: Option<String>,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineSettings,
    pub logging: LoggingSettings,
}

/// Load settings from `path`, or from [`DEFAULT_CONFIG_FILE`] when present.
///
/// An explicit path must exist; a missing default file yields defaults.
pub fn load_settings(path: Option<&Path>) -> WorkspaceResult<Settings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default_path.exists() {
                return Ok(Settings::default());
            }
            default_path
        }
    };
    let content = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config() {
        let settings: Settings = toml::from_str(
            r#"
[engine]
locale = "pt_BR"
seed = 42

[logging]
format = "json"
"#,
        )
        .expect("parse settings");

        assert_eq!(settings.engine.locale.as_deref(), Some("pt_BR"));
        assert_eq!(settings.engine.seed, Some(42));
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert!(settings.logging.level.is_none());
        assert!(settings.logging.file.is_none());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let settings: Settings = toml::from_str("").expect("parse settings");
        assert!(settings.engine.seed.is_none());
        assert_eq!(settings.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("fieldmask-missing-config.toml");
        assert!(load_settings(Some(&path)).is_err());
    }
}
