use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Theme options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    Ocean,
}

impl ThemeMode {
    /// Next theme in the `t` cycling order
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Ocean,
            ThemeMode::Ocean => ThemeMode::Dark,
        }
    }
}

/// Language options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum Language {
    Korean,
    #[default]
    English,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Theme mode selection
    pub theme_mode: ThemeMode,
    /// Language selection
    pub language: Language,
    /// Show help overlay
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            language: Language::default(),
            show_help: false,
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        // Load existing config or create default
        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            serde_json::from_str(&content).unwrap_or_else(|_| {
                // If parsing fails, use default and save it
                let default_config = Config::default();
                let _ = default_config.save();
                default_config
            })
        } else {
            // Create and save default config
            let default_config = Config::default();
            let _ = default_config.save();
            default_config
        };

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;

        // Use XDG config directory standard or fallback to ~/.config
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else {
            home_dir.join(".config")
        };

        let app_config_dir = config_dir.join("todo-enhanced");

        // Create config directory if it doesn't exist
        fs::create_dir_all(&app_config_dir)?;

        Ok(app_config_dir.join("config.json"))
    }

    /// Set theme mode
    pub fn set_theme_mode(&mut self, theme_mode: ThemeMode) {
        self.theme_mode = theme_mode;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Get theme display string
    pub fn theme_display(&self) -> &str {
        match self.theme_mode {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
            ThemeMode::Ocean => "Ocean",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme_mode, ThemeMode::Dark);
        assert_eq!(config.language, Language::English);
        assert!(!config.show_help);
    }

    #[test]
    fn test_theme_mode_serialization() {
        let themes = vec![ThemeMode::Dark, ThemeMode::Light, ThemeMode::Ocean];

        for theme in themes {
            let serialized = serde_json::to_string(&theme).unwrap();
            let deserialized: ThemeMode = serde_json::from_str(&serialized).unwrap();
            assert_eq!(theme, deserialized);
        }
    }

    #[test]
    fn test_theme_mode_cycle_covers_all_modes() {
        let start = ThemeMode::Dark;
        let mut seen = vec![start];
        let mut current = start;

        loop {
            current = current.next();
            if current == start {
                break;
            }
            seen.push(current);
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_language_serialization() {
        let languages = vec![Language::Korean, Language::English];

        for lang in languages {
            let serialized = serde_json::to_string(&lang).unwrap();
            let deserialized: Language = serde_json::from_str(&serialized).unwrap();
            assert_eq!(lang, deserialized);
        }
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            theme_mode: ThemeMode::Ocean,
            language: Language::Korean,
            show_help: true,
        };

        let serialized = serde_json::to_string_pretty(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(config.theme_mode, deserialized.theme_mode);
        assert_eq!(config.language, deserialized.language);
        assert_eq!(config.show_help, deserialized.show_help);
    }

    #[test]
    fn test_theme_display() {
        let mut config = Config::default();
        assert_eq!(config.theme_display(), "Dark");

        config.set_theme_mode(ThemeMode::Ocean);
        assert_eq!(config.theme_display(), "Ocean");
    }
}
