//! Site configuration loading.
//!
//! An optional `config.toml` in the source directory controls the page
//! template: site name, canonical base URL, stylesheet and favicon hrefs.
//! Every field has a default, so a missing file means a fully usable stock
//! configuration. One site, one file — there is no cascading.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Template-facing site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shown in page titles and the header breadcrumb.
    pub site_name: String,
    /// Canonical URL base for the `<link rel="canonical">` tag, no trailing slash.
    pub base_url: String,
    /// Stylesheet href written into every page head.
    pub stylesheet: String,
    /// Favicon href written into every page head.
    pub favicon: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "mdpress".to_string(),
            base_url: "https://example.com".to_string(),
            stylesheet: "style.css".to_string(),
            favicon: "favicon.png".to_string(),
        }
    }
}

/// Load `config.toml` from the source directory, defaults when absent.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}

/// A documented stock `config.toml`, printed by the `gen-config` subcommand.
pub fn stock_config_toml() -> &'static str {
    r#"# mdpress site configuration.
# Place this file in the source directory next to your markdown files.
# Every key is optional; omitted keys keep the defaults shown here.

# Shown in page titles ("<page> - <site_name>") and the header breadcrumb.
site_name = "mdpress"

# Canonical URL base for <link rel="canonical">, without a trailing slash.
base_url = "https://example.com"

# Stylesheet href written into every page head.
stylesheet = "style.css"

# Favicon href written into every page head.
favicon = "favicon.png"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site_name, "mdpress");
        assert_eq!(config.stylesheet, "style.css");
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_keys() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "site_name = \"My Blog\"\nbase_url = \"https://blog.example\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site_name, "My Blog");
        assert_eq!(config.base_url, "https://blog.example");
        assert_eq!(config.favicon, "favicon.png");
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "site_name = [broken").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn stock_config_parses_back_to_defaults() {
        let parsed: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(parsed.site_name, defaults.site_name);
        assert_eq!(parsed.base_url, defaults.base_url);
        assert_eq!(parsed.stylesheet, defaults.stylesheet);
        assert_eq!(parsed.favicon, defaults.favicon);
    }
}
