//! Generator configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for navgen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Content scanning settings.
    #[serde(default)]
    pub content: ContentConfig,

    /// Generated module settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Content scanning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Root directory scanned for markdown documents.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Paths excluded from the scan, relative to the content root.
    /// Excluded directories are skipped without descending.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

/// Generated module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Location of the generated sidebar module.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

// Default value functions
fn default_root() -> PathBuf {
    PathBuf::from("docs")
}

fn default_exclude() -> Vec<String> {
    vec!["index.md".to_string(), ".vitepress".to_string()]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("docs/.vitepress/sidebar.ts")
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist. An existing but invalid file is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Load configuration using the config crate for more flexibility.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("NAVGEN").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.content.root.as_os_str().is_empty() {
            return Err(CoreError::config("content.root cannot be empty"));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(CoreError::config("output.path cannot be empty"));
        }

        // Exclusions are root-relative by contract
        for exclude in &self.content.exclude {
            if Path::new(exclude).is_absolute() {
                return Err(CoreError::config(format!(
                    "content.exclude entries must be relative to content.root, got: {exclude}"
                )));
            }
        }

        Ok(())
    }

    /// Exclusion paths resolved against the content root.
    pub fn excluded_paths(&self) -> Vec<PathBuf> {
        self.content
            .exclude
            .iter()
            .map(|e| self.content.root.join(e))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> String {
        r#"
[content]
root = "site/docs"
exclude = ["index.md", ".vitepress", "drafts"]

[output]
path = "site/docs/.vitepress/sidebar.ts"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("navgen.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.content.root, PathBuf::from("site/docs"));
        assert_eq!(
            config.content.exclude,
            vec!["index.md", ".vitepress", "drafts"]
        );
        assert_eq!(
            config.output.path,
            PathBuf::from("site/docs/.vitepress/sidebar.ts")
        );
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("navgen.toml");
        std::fs::write(&config_path, "[content]\nroot = \"manual\"\n").expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.content.root, PathBuf::from("manual"));
        assert_eq!(config.content.exclude, vec!["index.md", ".vitepress"]);
        assert_eq!(
            config.output.path,
            PathBuf::from("docs/.vitepress/sidebar.ts")
        );
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("navgen.toml");

        let config = Config::load_or_default(&config_path).expect("defaults");

        assert_eq!(config.content.root, PathBuf::from("docs"));
        assert_eq!(config.content.exclude, vec!["index.md", ".vitepress"]);
    }

    #[test]
    fn test_load_or_default_invalid_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("navgen.toml");
        std::fs::write(&config_path, "[content\nroot = ").expect("write");

        assert!(Config::load_or_default(&config_path).is_err());
    }

    #[test]
    fn test_config_validation_empty_root() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("navgen.toml");
        std::fs::write(&config_path, "[content]\nroot = \"\"\n").expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("root cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_absolute_exclude() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("navgen.toml");
        std::fs::write(&config_path, "[content]\nexclude = [\"/etc/passwd\"]\n").expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must be relative"));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/navgen.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_excluded_paths() {
        let config = Config::default();
        let excluded = config.excluded_paths();

        assert_eq!(
            excluded,
            vec![
                PathBuf::from("docs/index.md"),
                PathBuf::from("docs/.vitepress")
            ]
        );
    }
}
