use std::path::PathBuf;

use anyhow::anyhow;
use chrono_tz::Tz;
use moneymark_core::utils::time_utils::DEFAULT_CALENDAR_TZ;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub calendar_tz: Tz,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("MM_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| "./data".into());
        let calendar_tz = match lookup("MM_TIMEZONE") {
            Some(name) if !name.trim().is_empty() => name
                .trim()
                .parse::<Tz>()
                .map_err(|_| anyhow!("Invalid MM_TIMEZONE '{}'", name))?,
            _ => DEFAULT_CALENDAR_TZ,
        };
        let log_format = match lookup("MM_LOG_FORMAT") {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            calendar_tz,
            log_format,
        })
    }
}
