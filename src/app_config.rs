use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::sentence_extractor::MINIMUM_LINE_LENGTH;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path of the sentence pool file
    #[serde(default = "default_pool_file")]
    pub pool_file: String,

    /// Bounds applied by the pick command when none are given
    #[serde(default)]
    pub pick: PickConfig,

    /// Bounds applied by the generate command when none are given
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Default length window for picking a single sentence
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PickConfig {
    /// Minimum sentence byte length; negative means no lower bound
    #[serde(default = "default_pick_min_length")]
    pub min_length: i64,

    /// Maximum sentence byte length; negative means no upper bound
    #[serde(default = "default_pick_max_length")]
    pub max_length: i64,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            min_length: default_pick_min_length(),
            max_length: default_pick_max_length(),
        }
    }
}

/// Default length window for generating a paragraph
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerateConfig {
    /// Minimum paragraph byte length; negative means no lower bound
    #[serde(default = "default_generate_min_length")]
    pub min_length: i64,

    /// Maximum paragraph byte length; negative means no upper bound
    #[serde(default = "default_generate_max_length")]
    pub max_length: i64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            min_length: default_generate_min_length(),
            max_length: default_generate_max_length(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_pool_file() -> String {
    "sentences.txt".to_string()
}

fn default_pick_min_length() -> i64 {
    -1
}

fn default_pick_max_length() -> i64 {
    -1
}

fn default_generate_min_length() -> i64 {
    // The historical tweet-length floor
    140
}

fn default_generate_max_length() -> i64 {
    280
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.pool_file.trim().is_empty() {
            return Err(anyhow!("Pool file path must not be empty"));
        }

        Self::validate_window("pick", self.pick.min_length, self.pick.max_length)?;
        Self::validate_window("generate", self.generate.min_length, self.generate.max_length)?;

        // A bounded generate window below the shortest admissible sentence
        // could never produce output
        if self.generate.max_length >= 0 && (self.generate.max_length as usize) < MINIMUM_LINE_LENGTH {
            return Err(anyhow!(
                "Invalid generate window: max_length {} is below the minimum sentence length {}",
                self.generate.max_length, MINIMUM_LINE_LENGTH
            ));
        }

        Ok(())
    }

    // Negative values are sentinels for "no bound" and always pass
    fn validate_window(section: &str, min: i64, max: i64) -> Result<()> {
        if min >= 0 && max >= 0 && min > max {
            return Err(anyhow!(
                "Invalid {} window: min_length {} exceeds max_length {}",
                section, min, max
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            pool_file: default_pool_file(),
            pick: PickConfig::default(),
            generate: GenerateConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
