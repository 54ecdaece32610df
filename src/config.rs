use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use tracing::level_filters::LevelFilter;

use crate::charts::DEFAULT_CHART_SIZE;
use crate::engine::{AnalysisEngine, DEFAULT_TOP_N};

pub const ENV_HOST: &str = "SALES_ANALYSIS_HOST";
pub const ENV_PORT: &str = "SALES_ANALYSIS_PORT";
pub const ENV_LOG_LEVEL: &str = "SALES_ANALYSIS_LOG_LEVEL";
pub const ENV_TOP_N: &str = "SALES_ANALYSIS_TOP_N";
pub const ENV_CHART_WIDTH: &str = "SALES_ANALYSIS_CHART_WIDTH";
pub const ENV_CHART_HEIGHT: &str = "SALES_ANALYSIS_CHART_HEIGHT";
pub const ENV_MAX_UPLOAD_BYTES: &str = "SALES_ANALYSIS_MAX_UPLOAD_BYTES";

/// Maximum upload size: 25MB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: LevelFilter,
    pub top_n: usize,
    pub chart_width: u32,
    pub chart_height: u32,
    pub max_upload_bytes: usize
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: LevelFilter::INFO,
            top_n: DEFAULT_TOP_N,
            chart_width: DEFAULT_CHART_SIZE.0,
            chart_height: DEFAULT_CHART_SIZE.1,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from any key lookup, falling back to defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup(ENV_HOST).unwrap_or(defaults.host),
            port: read(&lookup, ENV_PORT, defaults.port)?,
            log_level: lookup(ENV_LOG_LEVEL).map(|level| parse_log_level(&level)).unwrap_or(defaults.log_level),
            top_n: read(&lookup, ENV_TOP_N, defaults.top_n)?,
            chart_width: read(&lookup, ENV_CHART_WIDTH, defaults.chart_width)?,
            chart_height: read(&lookup, ENV_CHART_HEIGHT, defaults.chart_height)?,
            max_upload_bytes: read(&lookup, ENV_MAX_UPLOAD_BYTES, defaults.max_upload_bytes)?
        };

        if config.top_n == 0 {
            bail!("{ENV_TOP_N} must be at least 1");
        }

        if config.chart_width == 0 || config.chart_height == 0 {
            bail!("{ENV_CHART_WIDTH} and {ENV_CHART_HEIGHT} must be non-zero");
        }

        Ok(config)
    }

    pub fn engine(&self) -> AnalysisEngine {
        AnalysisEngine::new()
            .with_top_n(self.top_n)
            .with_chart_size(self.chart_width, self.chart_height)
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn read<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>
{
    match lookup(key) {
        Some(value) => value.trim().parse::<T>()
            .map_err(|error| anyhow!("{error}"))
            .with_context(|| format!("Invalid value '{value}' for {key}")),
        None => Ok(default)
    }
}
