use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use toybox_engine::{BlockLimits, FieldNaming};
use toybox_engine::io::submission::{DEFAULT_BLOCKS_FIELD, DEFAULT_IMAGE_FIELD_PREFIX};
use toybox_engine::models::limits::{
    DEFAULT_MAX_BLOCKS, DEFAULT_MAX_CAPTION_CHARS, DEFAULT_MAX_TEXT_CHARS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value in config file at {config_path}: {reason}")]
    Invalid { config_path: PathBuf, reason: String },
}

/// Limits the block editor enforces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub max_blocks: usize,
    pub max_text_chars: usize,
    pub max_caption_chars: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_blocks: DEFAULT_MAX_BLOCKS,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_caption_chars: DEFAULT_MAX_CAPTION_CHARS,
        }
    }
}

impl EditorConfig {
    pub fn limits(&self) -> BlockLimits {
        BlockLimits {
            max_blocks: self.max_blocks,
            max_text_chars: self.max_text_chars,
            max_caption_chars: self.max_caption_chars,
        }
    }
}

/// Multipart field names expected by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub blocks_field: String,
    pub image_field_prefix: String,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            blocks_field: DEFAULT_BLOCKS_FIELD.to_string(),
            image_field_prefix: DEFAULT_IMAGE_FIELD_PREFIX.to_string(),
        }
    }
}

impl SubmissionConfig {
    pub fn naming(&self) -> FieldNaming {
        FieldNaming {
            blocks_field: self.blocks_field.clone(),
            image_field_prefix: self.image_field_prefix.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub submission: SubmissionConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                config_path: config_path.to_path_buf(),
                reason,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/toybox");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn validate(&self) -> Result<(), String> {
        if self.editor.max_blocks == 0 {
            return Err("editor.max_blocks must be at least 1".to_string());
        }
        if self.submission.blocks_field.trim().is_empty() {
            return Err("submission.blocks_field must not be empty".to_string());
        }
        if self.submission.image_field_prefix.trim().is_empty() {
            return Err("submission.image_field_prefix must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/toybox/config.toml"));
    }

    #[test]
    fn test_defaults_match_engine_limits() {
        let config = Config::default();
        assert_eq!(config.editor.limits(), BlockLimits::default());
        assert_eq!(config.submission.naming(), FieldNaming::default());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            editor: EditorConfig {
                max_blocks: 12,
                ..EditorConfig::default()
            },
            submission: SubmissionConfig::default(),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
[editor]
max_blocks = 20
"#,
        )
        .unwrap();

        assert_eq!(config.editor.max_blocks, 20);
        assert_eq!(config.editor.max_text_chars, 5000);
        assert_eq!(config.submission.blocks_field, "contentBlocks");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            editor: EditorConfig::default(),
            submission: SubmissionConfig {
                blocks_field: "blocks".into(),
                image_field_prefix: "image_".into(),
            },
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
        assert_eq!(loaded_config.submission.naming().image_field(3), "image_3");
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "editor = [not toml").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[editor]\nmax_blocks = 0\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("max_blocks"));
    }
}
