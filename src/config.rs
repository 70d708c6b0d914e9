use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SEARCH_URL: &str = "https://search.torre.co/people/_search";
pub const DEFAULT_ANALYZE_URL: &str = "https://search.torre.co/people/_analyze";
pub const DEFAULT_SEARCH_STREAM_URL: &str = "https://torre.ai/api/entities/_searchStream";
pub const DEFAULT_BIOS_URL: &str = "https://torre.ai/api/genome/bios";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub endpoints: TorreEndpoints,
    pub request_timeout: Duration,
    pub search_concurrency: usize,
    pub search_delay: Duration,
    pub rederive_base_skill: bool,
}

#[derive(Debug, Clone)]
pub struct TorreEndpoints {
    pub search_url: String,
    pub analyze_url: String,
    pub search_stream_url: String,
    pub bios_url: String,
}

impl Default for TorreEndpoints {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            analyze_url: DEFAULT_ANALYZE_URL.to_string(),
            search_stream_url: DEFAULT_SEARCH_STREAM_URL.to_string(),
            bios_url: DEFAULT_BIOS_URL.to_string(),
        }
    }
}

impl TorreEndpoints {
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            search_url: format!("{}/people/_search", base),
            analyze_url: format!("{}/people/_analyze", base),
            search_stream_url: format!("{}/api/entities/_searchStream", base),
            bios_url: format!("{}/api/genome/bios", base),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let endpoints = TorreEndpoints {
            search_url: env::var("TORRE_SEARCH_URL")
                .unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string()),
            analyze_url: env::var("TORRE_ANALYZE_URL")
                .unwrap_or_else(|_| DEFAULT_ANALYZE_URL.to_string()),
            search_stream_url: env::var("TORRE_SEARCH_STREAM_URL")
                .unwrap_or_else(|_| DEFAULT_SEARCH_STREAM_URL.to_string()),
            bios_url: env::var("TORRE_BIOS_URL").unwrap_or_else(|_| DEFAULT_BIOS_URL.to_string()),
        };

        let search_concurrency: usize = parse_env("SEARCH_CONCURRENCY", 5)?;
        if search_concurrency == 0 {
            return Err(Error::Config(
                "SEARCH_CONCURRENCY must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            port: parse_env("PORT", 8080)?,
            endpoints,
            request_timeout: Duration::from_secs(parse_env("REQUEST_TIMEOUT_SECS", 30)?),
            search_concurrency,
            search_delay: Duration::from_millis(parse_env("SEARCH_DELAY_MS", 200)?),
            rederive_base_skill: parse_env("REDERIVE_BASE_SKILL", true)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            endpoints: TorreEndpoints::default(),
            request_timeout: Duration::from_secs(30),
            search_concurrency: 5,
            search_delay: Duration::from_millis(200),
            rederive_base_skill: true,
        }
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .to_lowercase()
            .parse()
            .map_err(|_| Error::Config(format!("{} has an invalid value: '{}'", key, raw))),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct DistributionConfig {
    pub concurrency_limit: usize,
    /// Re-derive the classifier's base skill from each decorated query term
    /// instead of using the skill the caller asked for.
    pub rederive_base_skill: bool,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            concurrency_limit: 5,
            rederive_base_skill: true,
        }
    }
}

impl From<&Config> for DistributionConfig {
    fn from(config: &Config) -> Self {
        Self {
            concurrency_limit: config.search_concurrency,
            rederive_base_skill: config.rederive_base_skill,
        }
    }
}
