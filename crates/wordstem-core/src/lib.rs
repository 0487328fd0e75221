//! Wordstem Core — error type and configuration shared by the stemmer crates.

pub mod config;
pub mod error;

pub use config::{OutputFormat, StemConfig, TagPolicy};
pub use error::{Error, Result};
