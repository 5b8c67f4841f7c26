use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{Config, DEFAULT_LOG_LEVEL};

/// `LOG_LEVEL` takes a bare level (`debug`) or full directives
/// (`laliga_terminal=trace,reqwest=warn`). Anything unparseable falls back
/// to `info`.
pub fn level_filter(raw: &str) -> EnvFilter {
    let raw = raw.trim();
    EnvFilter::try_new(raw.to_lowercase())
        .ok()
        .filter(|_| !raw.is_empty())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs a file-backed subscriber. The terminal is in raw mode while the
/// dashboard runs, so nothing is ever written to stdout/stderr from here.
pub fn init(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(level_filter(&config.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn bare_levels_and_directives_are_accepted() {
        assert_eq!(level_filter("DEBUG").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(level_filter(" warn ").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            level_filter("laliga_terminal=trace,reqwest=warn").max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn unusable_levels_fall_back_to_info() {
        assert_eq!(level_filter("").max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(level_filter("laliga_terminal=chatty").max_level_hint(), Some(LevelFilter::INFO));
    }
}
