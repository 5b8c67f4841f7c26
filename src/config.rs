use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org";
pub const DEFAULT_COMPETITION: &str = "PD";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "/dev/null";

const DEFAULT_FRAME_MILLIS: u64 = 16;
const MIN_FRAME_MILLIS: u64 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub competition: String,
    pub token: Option<String>,
    pub log_level: String,
    pub log_file: String,
    pub frame_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            competition: DEFAULT_COMPETITION.to_string(),
            token: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MILLIS),
        }
    }
}

impl Config {
    /// Reads `.env.local` then `.env` before consulting the process
    /// environment. Missing files are not an error.
    pub fn load() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).and_then(|val| non_empty(&val));

        let frame_millis = get("FRAME_MILLIS")
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_FRAME_MILLIS)
            .max(MIN_FRAME_MILLIS);

        Self {
            base_url: get("FOOTBALL_DATA_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            competition: get("COMPETITION_CODE")
                .map(|code| code.to_uppercase())
                .unwrap_or(defaults.competition),
            token: get("FOOTBALL_DATA_TOKEN"),
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: get("LOG_FILE").unwrap_or(defaults.log_file),
            frame_interval: Duration::from_millis(frame_millis),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
