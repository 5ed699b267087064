use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Accepted spellings, matched case-insensitively
const KNOWN_LEVELS: [(&str, LevelFilter); 6] = [
    ("off", LevelFilter::Off),
    ("error", LevelFilter::Error),
    ("warn", LevelFilter::Warn),
    ("info", LevelFilter::Info),
    ("debug", LevelFilter::Debug),
    ("trace", LevelFilter::Trace),
];

/// Configured log level.
///
/// Parsing never fails: an unknown value selects `info` and is kept so the
/// startup summary can warn about it once logging is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLevel {
    filter: LevelFilter,
    rejected: Option<String>,
}

impl LogLevel {
    pub fn new(filter: LevelFilter) -> Self {
        Self {
            filter,
            rejected: None,
        }
    }

    pub fn filter(&self) -> LevelFilter {
        self.filter
    }

    /// The unrecognized input that caused the fallback, if any
    pub fn rejected(&self) -> Option<&str> {
        self.rejected.as_deref()
    }

    fn parse(raw: &str) -> Self {
        let wanted = raw.trim().to_ascii_lowercase();
        match KNOWN_LEVELS.iter().find(|(name, _)| *name == wanted) {
            Some((_, filter)) => Self::new(*filter),
            None => Self {
                filter: DEFAULT_LOG_LEVEL,
                rejected: Some(raw.to_string()),
            },
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-string values are treated like an unknown name
        let level = match String::deserialize(deserializer) {
            Ok(raw) => LogLevel::parse(&raw),
            Err(e) => LogLevel {
                filter: DEFAULT_LOG_LEVEL,
                rejected: Some(e.to_string()),
            },
        };
        Ok(level)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.filter
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.filter
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::parse(s))
    }
}
