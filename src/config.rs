use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
/// Persisted window settings for the article styler.
///
/// Style choices are deliberately not part of it: every session starts from
/// the catalog defaults.
pub struct AppConfig {
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
    /// Optional TOML style catalog replacing the built-in choices.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Returns the user config file path, if a config directory is available.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("article_styler").join("config.toml"))
    }

    /// Loads config from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_default()
    }

    fn render(&self) -> Option<String> {
        toml::to_string_pretty(self).ok()
    }

    /// Writes config to disk unless the file already holds the same
    /// settings. Filesystem/serialization errors are ignored.
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        let Some(rendered) = self.render() else {
            return;
        };
        if std::fs::read_to_string(&path).is_ok_and(|existing| existing == rendered) {
            tracing::debug!(path = %path.display(), "config unchanged, not saving");
            return;
        }
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(&path, rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::path::PathBuf;

    #[test]
    fn parse_reads_known_keys() {
        let config = AppConfig::parse(
            "window_width = 1280.0\nwindow_height = 720.0\ncatalog_path = \"/etc/styles.toml\"\n",
        );
        assert_eq!(config.window_width, Some(1280.0));
        assert_eq!(config.window_height, Some(720.0));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/styles.toml")));
    }

    #[test]
    fn saved_config_renders_identically_after_reload() {
        let config = AppConfig {
            window_width: Some(1024.5),
            window_height: Some(700.0),
            catalog_path: Some(PathBuf::from("/etc/styles.toml")),
        };
        let written = config.render().unwrap();
        let reloaded = AppConfig::parse(&written);
        assert_eq!(reloaded.render().unwrap(), written);

        let resized = AppConfig {
            window_width: Some(800.0),
            ..reloaded
        };
        assert_ne!(resized.render().unwrap(), written);
    }

    #[test]
    fn parse_falls_back_to_defaults_on_garbage() {
        let config = AppConfig::parse("window_width = \"wide\"");
        assert_eq!(config.window_width, None);
        assert_eq!(config.catalog_path, None);
    }
}
