//! Configuration of the documentation generator, read from TOML.

#![cfg_attr(test, allow(unused_crate_dependencies))]

use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// returned if the configuration file cannot be read
    #[error("could not read the configuration file {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    /// returned if the configuration is not valid TOML or has unknown keys
    #[error("could not parse the configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DocConfig {
    /// Nothing is generated unless this is set.
    pub enabled: bool,
    /// Glob matching the schema sources, relative to the project root.
    pub schema_location_pattern: String,
    /// Path of the host model JSON file.
    pub host_model: PathBuf,
    /// The path the documentation page is served at.
    pub endpoint: String,
    pub title: String,
    pub description: String,
    pub app_version: String,
    pub logo_url: String,
    pub site_url: String,
    pub support_link: Option<String>,
    pub twitter_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub instagram_link: Option<String>,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            schema_location_pattern: "**/*.graphqls".to_string(),
            host_model: PathBuf::from("graphql-doc.json"),
            endpoint: "/document".to_string(),
            title: "GraphQL Doc".to_string(),
            description: "Welcome Documentation".to_string(),
            app_version: "v1.0.0".to_string(),
            logo_url: "assets/images/logo.png".to_string(),
            site_url: "index.html".to_string(),
            support_link: None,
            twitter_link: None,
            linkedin_link: None,
            instagram_link: None,
        }
    }
}

impl DocConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn empty_config_uses_defaults() {
        let config = DocConfig::from_toml_str("").unwrap();

        assert_eq!(config, DocConfig::default());
        assert!(!config.enabled);
        assert_eq!(config.schema_location_pattern, "**/*.graphqls");
        assert_eq!(config.endpoint, "/document");
    }

    #[test]
    fn partial_config() {
        let config = DocConfig::from_toml_str(indoc! {r#"
            enabled = true
            schema_location_pattern = "schema/**/*.graphql"
            title = "Shop API"
            twitter_link = "https://twitter.com/shop"
        "#})
        .unwrap();

        assert!(config.enabled);
        assert_eq!(config.schema_location_pattern, "schema/**/*.graphql");
        assert_eq!(config.title, "Shop API");
        assert_eq!(config.twitter_link.as_deref(), Some("https://twitter.com/shop"));
        assert_eq!(config.description, "Welcome Documentation");
        assert_eq!(config.instagram_link, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = DocConfig::from_toml_str("package_name = \"com.shop\"").unwrap_err();

        assert!(matches!(error, ConfigError::Parse(_)));
        assert!(error.to_string().contains("unknown field `package_name`"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graphql-doc.toml");

        std::fs::write(&path, "enabled = true\nhost_model = \"model/host.json\"\n").unwrap();

        let config = DocConfig::load(&path).unwrap();
        assert!(config.enabled);
        assert_eq!(config.host_model, PathBuf::from("model/host.json"));

        let missing = DocConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Read { .. }));
    }
}
