//! Runtime configuration loaded from the environment.
//!
//! Every setting has a default, so an empty environment yields
//! `AnalyticsConfig::default()`.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::brain::insights::DEFAULT_COMMON_QUESTIONS;
use crate::brain::report::DEFAULT_TRENDING_THRESHOLD;
use crate::error::AppError;

pub const ENV_MAX_COMMON_QUESTIONS: &str = "TUTORLENS_MAX_COMMON_QUESTIONS";
pub const ENV_TRENDING_THRESHOLD: &str = "TUTORLENS_TRENDING_THRESHOLD";
pub const ENV_LOG_FORMAT: &str = "TUTORLENS_LOG_FORMAT";
pub const ENV_LOG_FILTER: &str = "TUTORLENS_LOG";

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan-style JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: '{}'", other))),
        }
    }
}

/// Tunables for insight aggregation and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnalyticsConfig {
    /// Sample questions kept per topic insight.
    #[validate(range(min = 1, max = 50))]
    pub max_common_questions: usize,
    /// Frequency a topic must exceed to count as trending.
    pub trending_threshold: usize,
    /// Log line format.
    pub log_format: LogFormat,
    /// `EnvFilter` directive, e.g. "info" or "tutorlens_core=debug".
    #[validate(length(min = 1))]
    pub log_filter: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            max_common_questions: DEFAULT_COMMON_QUESTIONS,
            trending_threshold: DEFAULT_TRENDING_THRESHOLD,
            log_format: LogFormat::Pretty,
            log_filter: "info".to_string(),
        }
    }
}

/// Read and parse an optional variable
fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} = '{}': {}", name, raw, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(AppError::Config(format!("{} is not valid unicode", name)))
        }
    }
}

impl AnalyticsConfig {
    /// Load settings from `TUTORLENS_*` variables, falling back to defaults.
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            max_common_questions: parse_var(ENV_MAX_COMMON_QUESTIONS)?
                .unwrap_or(defaults.max_common_questions),
            trending_threshold: parse_var(ENV_TRENDING_THRESHOLD)?
                .unwrap_or(defaults.trending_threshold),
            log_format: parse_var(ENV_LOG_FORMAT)?.unwrap_or(defaults.log_format),
            log_filter: parse_var(ENV_LOG_FILTER)?.unwrap_or(defaults.log_filter),
        };

        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }
}
