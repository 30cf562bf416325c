/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

/// The number of codepoints in the longest known emoji sequence (e.g. the kiss sequences).
///
/// Inputs with at least this many codepoints are never a single emoji,
/// so the longest sequences themselves are only found by [crate::detector::EmojiDetector::detect_emoji].
/// This has to grow with the reference data: if `data/map.json` gains longer sequences,
/// [crate::detector::EmojiDetector::with_config] warns about it.
pub const LONGEST_EMOJI: usize = 8;

/// Settings for an [crate::detector::EmojiDetector]
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Inputs with at least this many codepoints are rejected by
    /// [crate::detector::EmojiDetector::is_single_emoji] without scanning them
    pub longest_emoji: usize
}

impl DetectorConfig {
    /// Reads a config from JSON, e.g. `{"longest_emoji": 11}`.
    /// Missing fields keep their defaults.
    /// # Examples
    /// ```
    /// use emoji_detector::config::{DetectorConfig, LONGEST_EMOJI};
    ///
    /// let config = DetectorConfig::from_reader("{}".as_bytes()).unwrap();
    /// assert_eq!(config.longest_emoji, LONGEST_EMOJI);
    ///
    /// let config = DetectorConfig::from_reader(r#"{"longest_emoji": 11}"#.as_bytes()).unwrap();
    /// assert_eq!(config.longest_emoji, 11);
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        Self::from_reader(reader)
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            longest_emoji: LONGEST_EMOJI
        }
    }
}

/// An error that occurs while reading a [DetectorConfig]
#[derive(Debug)]
pub enum ConfigError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// Wrapper for [serde_json::Error]
    Json(serde_json::Error)
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "Could not read the config: {}", err),
            ConfigError::Json(err) => write!(f, "Malformed config: {}", err)
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Json(err) => Some(err)
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}
