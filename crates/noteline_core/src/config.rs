//! Editor and process configuration.
//!
//! # Responsibility
//! - Hold editor tunables with stable defaults.
//! - Detect the process run mode from the environment.
//!
//! # Invariants
//! - Mode detection precedence is `TEST`, then `DEVELOPMENT`, then production.

use serde::{Deserialize, Serialize};

/// Tab stop width used when no config overrides it.
pub const DEFAULT_TAB_WIDTH: usize = 2;
/// Widest tab stop accepted by the indent engine.
pub const MAX_TAB_WIDTH: usize = 16;

const ENV_TEST: &str = "TEST";
const ENV_DEVELOPMENT: &str = "DEVELOPMENT";

/// Editor tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spaces per indentation stop, in `1..=MAX_TAB_WIDTH`.
    pub tab_width: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// Process run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppMode {
    Production,
    Development,
    Test,
}

impl AppMode {
    /// Detects the mode from the current process environment.
    pub fn from_env() -> Self {
        Self::detect(|key| std::env::var_os(key).is_some())
    }

    /// Detects the mode using `is_set` to test variable presence.
    pub fn detect(is_set: impl Fn(&str) -> bool) -> Self {
        if is_set(ENV_TEST) {
            Self::Test
        } else if is_set(ENV_DEVELOPMENT) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Test => "test",
        }
    }

    /// Log level suited to this mode.
    pub fn default_log_level(self) -> &'static str {
        match self {
            Self::Production => "info",
            Self::Development | Self::Test => "debug",
        }
    }
}
