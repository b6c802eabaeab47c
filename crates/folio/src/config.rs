//! Configuration management for folio.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::catalog::DuplicateIdPolicy;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "folio";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "FOLIO_";

/// Site configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FOLIO_`, nested keys split on `__`)
/// 2. TOML config file at `~/.config/folio/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page-level settings.
    pub site: PageConfig,
    /// Catalog loading settings.
    pub catalog: CatalogConfig,
    /// User-visible labels.
    pub labels: Labels,
    /// Lightbox settings.
    pub lightbox: LightboxConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Document title.
    pub title: String,
    /// Visible page heading.
    pub heading: String,
    /// Document language.
    pub lang: String,
    /// Optional stylesheet href. Styling itself lives outside folio.
    pub stylesheet: Option<String>,
    /// Script src for the client adapter. Relative paths resolve against the
    /// output directory.
    pub script: Option<String>,
    /// Ship the bundled client adapter at `script` (or inline it when
    /// `script` is unset). Off means `script` is linked as given.
    pub bundle_script: bool,
}

/// Catalog loading settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the catalog file (`.json` or `.toml`).
    pub path: PathBuf,
    /// What to do when two projects share an id.
    pub duplicate_ids: DuplicateIdPolicy,
    /// Log a warning for tag ids missing from the registry.
    pub warn_unknown_tags: bool,
}

/// User-visible labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Label of the synthetic "all" filter control.
    pub all_filter: String,
    /// Indicator label of a collapsed card.
    pub view_details: String,
    /// Indicator label of an expanded card.
    pub hide_details: String,
    /// Heading of the challenge section.
    pub challenge: String,
    /// Heading of the architecture section.
    pub architecture: String,
    /// Heading of the features section.
    pub features: String,
    /// Heading of the highlights section.
    pub highlights: String,
    /// Heading of the screenshots section.
    pub screenshots: String,
    /// Connector rendered between architecture steps.
    pub connector: String,
    /// Separator between a feature title and its description.
    pub feature_separator: String,
    /// Label of the lightbox close control.
    pub close: String,
}

/// Lightbox settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    /// Key that closes the lightbox.
    pub close_key: String,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where `folio render` writes the page.
    pub path: PathBuf,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            heading: "Projects".to_string(),
            lang: "en".to_string(),
            stylesheet: Some("styles.css".to_string()),
            script: Some("folio.js".to_string()),
            bundle_script: true,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/catalog.json"),
            duplicate_ids: DuplicateIdPolicy::Reject,
            warn_unknown_tags: true,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            all_filter: "All Projects".to_string(),
            view_details: "View Details".to_string(),
            hide_details: "Hide Details".to_string(),
            challenge: "The Challenge".to_string(),
            architecture: "Solution Architecture".to_string(),
            features: "Key Features Built".to_string(),
            highlights: "Technical Highlights".to_string(),
            screenshots: "Screenshots".to_string(),
            connector: "\u{2192}".to_string(),
            feature_separator: " \u{2014} ".to_string(),
            close: "\u{00d7}".to_string(),
        }
    }
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            close_key: "Escape".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dist/index.html"),
        }
    }
}

impl SiteConfig {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(SiteConfig::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: SiteConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(invalid("site.title must not be empty"));
        }

        let labels = [
            ("labels.all_filter", &self.labels.all_filter),
            ("labels.view_details", &self.labels.view_details),
            ("labels.hide_details", &self.labels.hide_details),
            ("labels.connector", &self.labels.connector),
        ];
        for (key, value) in labels {
            if value.trim().is_empty() {
                return Err(invalid(format!("{key} must not be empty")));
            }
        }

        if self.labels.view_details == self.labels.hide_details {
            return Err(invalid(
                "labels.view_details and labels.hide_details must differ",
            ));
        }

        if self.lightbox.close_key.is_empty() {
            return Err(invalid("lightbox.close_key must not be empty"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::ConfigValidation {
        message: message.into(),
    }
}
