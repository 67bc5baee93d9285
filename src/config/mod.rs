use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{NewsError, NewsResult};
use crate::extract::Language;
use crate::http::DEFAULT_TIMEOUT_SECS;

/// Hindi news feeds watched when nothing else is configured.
pub const DEFAULT_FEEDS: &[&str] = &[
    "https://www.aajtak.in/rssfeeds/?id=home",
    "https://www.abplive.com/home/feed",
    "https://feeds.feedburner.com/ndtvkhabar-latest",
    "https://hindi.news18.com/rss/khabar/nation/nation.xml",
    "https://www.amarujala.com/rss/breaking-news.xml",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub feeds: Vec<String>,
    pub language: Language,
    pub timeout: Duration,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feeds: DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect(),
            language: Language::Hindi,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value lookup
    pub fn from_lookup<L>(lookup: L) -> NewsResult<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("NEWS_FEEDS_FILE") {
            config.feeds = load_feeds_file(Path::new(&path))?;
        } else if let Some(list) = lookup("NEWS_FEEDS") {
            config.feeds = parse_feed_list(&list);
        }

        if let Some(code) = lookup("NEWS_LANGUAGE") {
            config.language = Language::from_code(&code)?;
        }

        if let Some(raw) = lookup("NEWS_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&raw)?;
        }

        if let Some(level) = lookup("NEWS_LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }

    pub fn with_feeds_file(mut self, path: &Path) -> NewsResult<Self> {
        self.feeds = load_feeds_file(path)?;
        Ok(self)
    }

    pub fn with_language(mut self, code: &str) -> NewsResult<Self> {
        self.language = Language::from_code(code)?;
        Ok(self)
    }
}

/// One URL per line; blank lines and `#` comments are skipped.
pub fn load_feeds_file(path: &Path) -> NewsResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        NewsError::Config(format!("cannot read feeds file {}: {}", path.display(), e))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn parse_feed_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_timeout(raw: &str) -> NewsResult<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(NewsError::Config(format!(
            "NEWS_TIMEOUT_SECS must be a positive integer, got {:?}",
            raw
        ))),
    }
}
