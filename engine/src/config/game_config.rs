use serde::{Deserialize, Serialize};

use super::Validate;

pub const MAX_DELAY_MS: u64 = 10_000;

/// Settings for the interactive front end.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    /// Pause before the engine answers, so the reply does not appear instantly.
    pub bot_delay_ms: u64,
    /// Pause between the end of a game and the next empty board.
    pub reset_delay_ms: u64,
    pub show_move_scores: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_delay_ms: 500,
            reset_delay_ms: 2500,
            show_move_scores: false,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "bot_delay_ms ({}) cannot exceed {}",
                self.bot_delay_ms, MAX_DELAY_MS
            ));
        }
        if self.reset_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "reset_delay_ms ({}) cannot exceed {}",
                self.reset_delay_ms, MAX_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigError, ConfigManager, ConfigSerializer,
        FileContentConfigProvider, InMemoryConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: GameConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_file() {
        let config = GameConfig {
            bot_delay_ms: 0,
            reset_delay_ms: 100,
            show_move_scores: true,
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::from_yaml_file(&file_path);

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");
        assert!(provider.get_config_content().unwrap().is_none());

        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let provider = InMemoryConfigProvider::with_content("bot_delay_ms: 0\n");
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        let config = manager.get_config().unwrap();
        assert_eq!(config.bot_delay_ms, 0);
        assert_eq!(config.reset_delay_ms, 2500);
        assert!(!config.show_move_scores);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load() {
        let provider = InMemoryConfigProvider::with_content("reset_delay_ms: 60000\n");
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(InMemoryConfigProvider::new(), YamlConfigSerializer::new());
        let config = GameConfig {
            bot_delay_ms: MAX_DELAY_MS + 1,
            ..GameConfig::default()
        };

        assert!(matches!(manager.set_config(&config), Err(ConfigError::Validation(_))));
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_malformed_yaml_is_reported() {
        let provider = InMemoryConfigProvider::with_content("bot_delay_ms: [not a number\n");
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }
}
