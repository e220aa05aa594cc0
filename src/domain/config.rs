use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for loading and querying a recipe collection.
///
/// This struct holds the settings that control where the recipe document is
/// found and how its fields are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Path of the recipe document, relative to the working directory.
    document: PathBuf,

    /// `chrono` format string for recipe dates.
    ///
    /// A leading weekday name (e.g. `Fri, `) is stripped from the date before
    /// this format is applied, so it should describe the remainder only.
    date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: default_document(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the path of the recipe document.
    #[must_use]
    pub fn document(&self) -> &Path {
        &self.document
    }

    /// Returns the date format used when reading recipe dates.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Sets the path of the recipe document.
    pub fn set_document(&mut self, document: PathBuf) {
        self.document = document;
    }
}

fn default_document() -> PathBuf {
    PathBuf::from("recipes.xml")
}

fn default_date_format() -> String {
    "%d %b %y".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_document")]
        document: PathBuf,

        #[serde(default = "default_date_format")]
        date_format: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                document,
                date_format,
            } => Self {
                document,
                date_format,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            document: config.document,
            date_format: config.date_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ndocument = \"data/cookbook.xml\"\ndate_format = \"%Y-%m-%d\"\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.document(), Path::new("data/cookbook.xml"));
        assert_eq!(config.date_format(), "%Y-%m-%d");
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ndocument = 3\n").unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("recipes.toml");

        let mut config = Config::default();
        config.set_document(PathBuf::from("elsewhere.xml"));
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
