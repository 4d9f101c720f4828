use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Client configuration: where the remote collection lives, which user
/// owns created items, and how many items a load requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_user_id")]
    pub user_id: u64,
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
}

const CONFIG_FILE_PATH: &str = "config.toml";

fn default_api_base() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_user_id() -> u64 {
    1
}

fn default_page_limit() -> usize {
    10
}

fn todo_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(".todo-cli")
}

fn config_json_path() -> PathBuf {
    todo_dir().join("config.json")
}

fn parse_number(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            user_id: default_user_id(),
            page_limit: default_page_limit(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then `~/.todo-cli/config.json`, then
    /// `config.toml` in the working directory, then environment overrides
    /// (`TODO_API_BASE`, `TODO_USER_ID`, `TODO_PAGE_LIMIT`). Unreadable or
    /// unparseable sources are skipped.
    pub fn new() -> Self {
        let mut config = Config::default();

        let mut loaded = false;
        let json_path = config_json_path();
        if json_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&json_path) {
                match serde_json::from_str::<Config>(&content) {
                    Ok(file_config) => {
                        config = file_config;
                        loaded = true;
                    }
                    Err(err) => log::warn!("ignoring {}: {err}", json_path.display()),
                }
            }
        }

        if !loaded && std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                match toml::from_str::<Config>(&content) {
                    Ok(file_config) => config = file_config,
                    Err(err) => log::warn!("ignoring {CONFIG_FILE_PATH}: {err}"),
                }
            }
        }

        if let Ok(api_base) = std::env::var("TODO_API_BASE") {
            if !api_base.trim().is_empty() {
                config.api_base = api_base;
            }
        }
        if let Ok(user_id) = std::env::var("TODO_USER_ID") {
            if let Some(user_id) = parse_number(&user_id) {
                config.user_id = user_id;
            }
        }
        if let Ok(limit) = std::env::var("TODO_PAGE_LIMIT") {
            if let Some(limit) = parse_number(&limit) {
                config.page_limit = limit as usize;
            }
        }

        config.api_base = config.api_base.trim().trim_end_matches('/').to_string();
        config
    }
}
