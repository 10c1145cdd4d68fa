// SPDX-FileCopyrightText: The verstr authors
// SPDX-License-Identifier: MPL-2.0

//! Documentation build configuration
//!
//! The settings are declarative and forwarded verbatim to the
//! documentation generator. Only the `version` and `release`
//! fields are ever modified, see [`DocsConfig::bind_version()`].

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// A configuration error
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[display("failed to read '{}': {source}", path.display())]
    Io {
        /// The configuration file
        path: PathBuf,

        /// The cause
        source: std::io::Error,
    },

    /// Malformed TOML.
    #[display("{_0}")]
    Parse(toml::de::Error),

    /// The configuration could not be written as TOML.
    #[display("{_0}")]
    Serialize(toml::ser::Error),
}

/// Documentation build settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Copyright notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// Author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Short version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Full release
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    /// Extensions of the documentation generator
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,

    /// The root document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_doc: Option<String>,

    /// Template search paths
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub templates_path: Vec<PathBuf>,

    /// Patterns of files and directories that are not part of the build
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_patterns: Vec<String>,

    /// Static asset search paths
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub html_static_path: Vec<PathBuf>,

    /// Theme name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_theme: Option<String>,

    /// Theme specific options
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub html_theme_options: BTreeMap<String, toml::Value>,

    /// Page title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_title: Option<String>,

    /// Logo image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_logo: Option<PathBuf>,

    /// Favicon image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_favicon: Option<PathBuf>,

    /// Style sheets relative to the static paths
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub html_css_files: Vec<String>,

    /// Sidebar widgets per document path glob
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub html_sidebars: BTreeMap<String, Vec<String>>,

    /// Default project for API documentation imported from Doxygen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breathe_default_project: Option<String>,

    /// Any other settings
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl DocsConfig {
    /// Parse the configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the input is malformed.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(ConfigError::Parse)
    }

    /// Load the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file could not be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded documentation config");
        Self::from_toml_str(&input)
    }

    /// Display the given version string for both `version` and `release`.
    pub fn bind_version(&mut self, version: &str) {
        self.version = Some(version.to_owned());
        self.release = Some(version.to_owned());
    }

    /// Encode the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if encoding fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::Serialize)
    }
}

#[cfg(test)]
mod tests;
