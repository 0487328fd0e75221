//! Runtime configuration for stemming front ends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable selecting the [`TagPolicy`].
pub const TAG_POLICY_VAR: &str = "WORDSTEM_TAG_POLICY";
/// Environment variable selecting the [`OutputFormat`].
pub const OUTPUT_VAR: &str = "WORDSTEM_OUTPUT";

/// What happens to a token's non-text attributes when it is stemmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPolicy {
    /// Copy every attribute, then overwrite the word.
    #[default]
    Keep,
    /// Drop the tag; offsets are still carried over.
    Clear,
}

impl fmt::Display for TagPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Clear => write!(f, "clear"),
        }
    }
}

impl FromStr for TagPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "clear" => Ok(Self::Clear),
            other => Err(Error::Config(format!(
                "unknown tag policy '{}' (expected keep|clear)",
                other
            ))),
        }
    }
}

/// How stemmed output is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, mirroring the input layout.
    #[default]
    Text,
    /// One JSON object per token.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "unknown output format '{}' (expected text|json)",
                other
            ))),
        }
    }
}

/// Top-level Wordstem configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemConfig {
    pub tag_policy: TagPolicy,
    pub output: OutputFormat,
}

impl StemConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Missing keys fall back
    /// to defaults; present but unrecognized values are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tag_policy = match lookup(TAG_POLICY_VAR) {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => TagPolicy::default(),
        };
        let output = match lookup(OUTPUT_VAR) {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => OutputFormat::default(),
        };

        tracing::debug!("Config: tag_policy={}, output={}", tag_policy, output);

        Ok(Self { tag_policy, output })
    }
}
