//! Optional JSON5 config file.
//! Every key has a default, so an empty file (or no file at all) gives the full
//! feature set with an `I` prefix derived from the default title "Inventory".

use crate::coord;
use crate::csv_codec::ColumnLayout;
use crate::statics;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Optional behaviours; all enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Item description field and its CSV column.
    pub description: bool,
    /// Editable sheet title that drives the coordinate prefix and the export name.
    pub title_prefix: bool,
    /// "Edit Item" buttons in the edit dialog.
    pub per_item_edit: bool,
    /// Enter/Space toggles the selection of a focused cell.
    pub keyboard_select: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            description: true,
            title_prefix: true,
            per_item_edit: true,
            keyboard_select: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub features: Features,
    pub default_title: String,
    /// Prefix used when `features.title_prefix` is off.
    pub fixed_prefix: String,
    /// Prefix used when the title is blank.
    pub fallback_prefix: char,
    /// Export file stem used when the title is blank or titles are disabled.
    pub export_name: String,
    pub dark_theme: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            features: Features::default(),
            default_title: statics::DEFAULT_TITLE.to_string(),
            fixed_prefix: statics::DEFAULT_FIXED_PREFIX.to_string(),
            fallback_prefix: statics::DEFAULT_FALLBACK_PREFIX,
            export_name: statics::DEFAULT_EXPORT_NAME.to_string(),
            dark_theme: true,
        }
    }
}

impl TrackerConfig {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        json5::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// An explicit path must exist. Without one, `slotgrid.json5` in the working
    /// directory is used when present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_path(path);
        }
        let local = Path::new(statics::CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load_path(local);
        }
        tracing::debug!("no config file, using defaults");
        Ok(Self::default())
    }

    /// Coordinate prefix for the given sheet title.
    pub fn prefix_for(&self, title: &str) -> String {
        if self.features.title_prefix {
            coord::prefix_from_title(title, self.fallback_prefix)
        } else {
            self.fixed_prefix.clone()
        }
    }

    pub fn layout(&self) -> ColumnLayout {
        ColumnLayout::new(self.features.description)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Features, TrackerConfig};
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn empty_object_gives_defaults() {
        let config = TrackerConfig::parse("{}", Path::new("x.json5")).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.prefix_for(&config.default_title), "I");
    }

    #[test]
    fn partial_feature_table_keeps_other_defaults() {
        let text = r#"{
            // revision without descriptions
            features: { description: false, },
            fixed_prefix: "B",
        }"#;
        let config = TrackerConfig::parse(text, Path::new("x.json5")).unwrap();
        assert_eq!(
            config.features,
            Features {
                description: false,
                ..Features::default()
            }
        );
        assert_eq!(config.fixed_prefix, "B");
        assert_eq!(config.layout().len(), 6);
    }

    #[test]
    fn fixed_prefix_ignores_title() {
        let mut config = TrackerConfig::default();
        config.features.title_prefix = false;
        assert_eq!(config.prefix_for("quarry"), "I");

        config.features.title_prefix = true;
        assert_eq!(config.prefix_for("quarry"), "Q");
        assert_eq!(config.prefix_for("   "), "X");
    }

    #[test]
    fn malformed_text_reports_path() {
        let err = TrackerConfig::parse("{ features: ", Path::new("bad.json5")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.json5"));
    }
}
