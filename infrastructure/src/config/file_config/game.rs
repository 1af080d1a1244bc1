//! Game configuration from TOML (`[game]` section)

use barista_application::GameBehaviorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw game configuration from TOML
///
/// # Example
///
/// ```toml
/// [game]
/// drinks_file = "~/drinks.json"
/// seed = 42
/// clear_verdicts_on_edit = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Drink dataset to use instead of the bundled one
    pub drinks_file: Option<String>,
    /// Fixed seed for drink selection
    pub seed: Option<u64>,
    /// Clear all verdicts when a guess is edited after a check
    pub clear_verdicts_on_edit: bool,
}

/// Command-line values that take precedence over the `[game]` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameOverrides {
    pub drinks_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub clear_verdicts_on_edit: bool,
}

impl FileGameConfig {
    /// Layer command-line values over the file values
    pub fn apply_overrides(&mut self, overrides: GameOverrides) {
        if let Some(path) = overrides.drinks_file {
            self.drinks_file = Some(path_to_string(&path));
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.clear_verdicts_on_edit |= overrides.clear_verdicts_on_edit;
    }

    /// Dataset path with a leading `~/` expanded to the home directory
    pub fn drinks_path(&self) -> Option<PathBuf> {
        self.drinks_file.as_deref().map(expand_home)
    }

    pub fn to_behavior(&self) -> GameBehaviorConfig {
        GameBehaviorConfig::default().with_clear_verdicts_on_edit(self.clear_verdicts_on_edit)
    }
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_section_deserialize() {
        let toml_str = r#"
[game]
drinks_file = "drinks.json"
seed = 7
clear_verdicts_on_edit = true
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.drinks_path(), Some(PathBuf::from("drinks.json")));
        assert_eq!(config.game.seed, Some(7));
        assert!(config.game.to_behavior().clear_verdicts_on_edit);
    }

    #[test]
    fn test_home_expansion() {
        let config = FileGameConfig {
            drinks_file: Some("~/menu/drinks.json".to_string()),
            ..Default::default()
        };
        let path = config.drinks_path().unwrap();
        if dirs::home_dir().is_some() {
            assert!(!path.starts_with("~"));
            assert!(path.ends_with("menu/drinks.json"));
        }
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = FileGameConfig {
            drinks_file: Some("menu.json".to_string()),
            seed: Some(1),
            clear_verdicts_on_edit: false,
        };
        config.apply_overrides(GameOverrides {
            drinks_file: Some(PathBuf::from("/tmp/other.json")),
            seed: Some(9),
            clear_verdicts_on_edit: true,
        });
        assert_eq!(config.drinks_path(), Some(PathBuf::from("/tmp/other.json")));
        assert_eq!(config.seed, Some(9));
        assert!(config.clear_verdicts_on_edit);
    }

    #[test]
    fn test_empty_overrides_keep_file_values() {
        let mut config = FileGameConfig {
            drinks_file: Some("menu.json".to_string()),
            seed: Some(1),
            clear_verdicts_on_edit: true,
        };
        let before = config.clone();
        config.apply_overrides(GameOverrides::default());
        assert_eq!(config, before);
    }
}
