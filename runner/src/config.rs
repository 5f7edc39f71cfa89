use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_common::games::snake::{BotType, SnakeSessionSettings};

pub const CONFIG_FILE_NAME: &str = "snake_runner_config.yaml";

pub type RunnerConfigManager = ConfigManager<FileContentConfigProvider, RunnerConfig, YamlConfigSerializer>;

/// Next to the executable when it can be located, otherwise the working directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: Option<PathBuf>) -> RunnerConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub session: SnakeSessionSettings,
    pub bot: BotType,
    /// Random when absent.
    pub seed: Option<u64>,
    pub max_ticks: u64,
    /// Interval between progress lines, in ticks.
    #[serde(default = "default_log_every")]
    pub log_every: u64,
    #[serde(default)]
    pub high_score: u32,
}

fn default_log_every() -> u64 {
    50
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_ticks == 0 {
            return Err("max_ticks must be greater than 0".to_string());
        }
        if self.log_every == 0 {
            return Err("log_every must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            session: SnakeSessionSettings::default(),
            bot: BotType::default(),
            seed: None,
            max_ticks: 10_000,
            log_every: default_log_every(),
            high_score: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigContentProvider, ConfigSerializer};
    use snake_common::games::snake::{BoardSize, GameMap, SnakeSpeed};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_runner_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = RunnerConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: RunnerConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), RunnerConfig::default());
    }

    #[test]
    fn test_hand_written_config_is_read() {
        let content = r#"
            session:
              board_size: 30
              map: vertical
              initial_speed: 160
            bot: random
            seed: 7
            max_ticks: 500
        "#;
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(content).unwrap();

        let config = get_config_manager(Some(file_path.clone())).get_config().unwrap();
        assert_eq!(
            config.session,
            SnakeSessionSettings::new(BoardSize::Large, GameMap::Vertical, SnakeSpeed::Fast)
        );
        assert_eq!(config.bot, BotType::Random);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_ticks, 500);
        assert_eq!(config.log_every, 50);
        assert_eq!(config.high_score, 0);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_unsupported_board_size_cant_be_read() {
        let content = r#"
            session:
              board_size: 15
              map: classic
              initial_speed: 200
            bot: greedy
            max_ticks: 100
        "#;
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content(content)
            .unwrap();

        assert!(get_config_manager(Some(file_path.clone())).get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_high_score_is_persisted() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        manager.update_config(|config| config.high_score = 42).unwrap();

        let reloaded = get_config_manager(Some(file_path.clone())).get_config().unwrap();
        assert_eq!(reloaded.high_score, 42);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_zero_max_ticks_is_invalid() {
        let config = RunnerConfig {
            max_ticks: 0,
            ..RunnerConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(RunnerConfig::default().validate().is_ok());
    }
}
