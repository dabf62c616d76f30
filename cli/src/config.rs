use std::path::{Path, PathBuf};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, GameConfig, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_default_config_path()),
    }
}
