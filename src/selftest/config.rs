//! Self-test configuration.
//!
//! Class and level filters come from the environment
//! (`PK_SELFTEST_CLASS`, `PK_SELFTEST_LEVEL`) or from command-line style
//! arguments. Anything not supplied keeps its default.

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use super::{Class, Level};

/// Environment variable selecting the class filter.
pub const CLASS_ENV: &str = "PK_SELFTEST_CLASS";

/// Environment variable selecting the verbosity level.
pub const LEVEL_ENV: &str = "PK_SELFTEST_LEVEL";

// ------------------------------------------------------------------------------------------------
// Error type
// ------------------------------------------------------------------------------------------------

/// Errors produced while building a [`SelfTestConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelfTestError {
    /// A class or level value could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

// ------------------------------------------------------------------------------------------------
// Filter parsing
// ------------------------------------------------------------------------------------------------

impl FromStr for Class {
    type Err = SelfTestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Class::All),
            "auto" => Ok(Class::Auto),
            "manual" => Ok(Class::Manual),
            _ => Err(SelfTestError::InvalidConfig(format!(
                "unknown class {s:?} (expected all, auto or manual)"
            ))),
        }
    }
}

impl FromStr for Level {
    type Err = SelfTestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Level::Quiet),
            "normal" => Ok(Level::Normal),
            "all" => Ok(Level::All),
            _ => Err(SelfTestError::InvalidConfig(format!(
                "unknown level {s:?} (expected quiet, normal or all)"
            ))),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------------------------------------

/// Filters applied to a self-test run.
///
/// # Example
///
/// ```rust
/// use pk_support::{Class, Level, SelfTestConfig};
///
/// // Unattended checks, failures and summaries only
/// let config = SelfTestConfig::default();
///
/// // Or everything, including passing checks
/// let config = SelfTestConfig {
///     class: Class::All,
///     level: Level::All,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfTestConfig {
    /// Which sections are allowed to run.
    ///
    /// Default: [`Class::Auto`].
    pub class: Class,

    /// How much of the run is written to the report sink.
    ///
    /// Default: [`Level::Normal`].
    pub level: Level,
}

impl Default for SelfTestConfig {
    fn default() -> Self {
        Self {
            class: Class::Auto,
            level: Level::Normal,
        }
    }
}

impl SelfTestConfig {
    /// Reads `PK_SELFTEST_CLASS` and `PK_SELFTEST_LEVEL` from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`SelfTestError::InvalidConfig`] if either variable is set
    /// to an unrecognised value.
    pub fn from_env() -> Result<Self, SelfTestError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through
    /// `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SelfTestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(CLASS_ENV) {
            config.class = value.parse()?;
        }
        if let Some(value) = lookup(LEVEL_ENV) {
            config.level = value.parse()?;
        }
        debug!(class = ?config.class, level = ?config.level, "self-test config from environment");
        Ok(config)
    }

    /// Builds a config from command-line arguments.
    ///
    /// Recognised: `--class=<all|auto|manual>`, `--level=<quiet|normal|all>`,
    /// `--auto`, `--manual`, `--quiet`, `--verbose`. Later arguments win.
    /// Unrecognised arguments are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`SelfTestError::InvalidConfig`] for a recognised option
    /// carrying an unrecognised value.
    pub fn from_args<I, S>(args: I) -> Result<Self, SelfTestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--auto" => config.class = Class::Auto,
                "--manual" => config.class = Class::Manual,
                "--quiet" => config.level = Level::Quiet,
                "--verbose" => config.level = Level::All,
                _ => {
                    if let Some(value) = arg.strip_prefix("--class=") {
                        config.class = value.parse()?;
                    } else if let Some(value) = arg.strip_prefix("--level=") {
                        config.level = value.parse()?;
                    } else {
                        warn!(arg, "ignoring unrecognised self-test argument");
                    }
                }
            }
        }
        debug!(class = ?config.class, level = ?config.level, "self-test config from arguments");
        Ok(config)
    }
}
