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
 */
//! Finds emoji sequences in text and checks whether a text is exactly one emoji.
//!
//! ```
//! let emojis = emoji_detector::detect_emoji("guardswoman 💂🏼‍♀️").unwrap();
//!
//! assert_eq!(emojis.len(), 1);
//! assert_eq!(emojis[0].short_name.as_deref(), Some("female-guard"));
//! assert_eq!(emojis[0].hex_str, "1F482-1F3FC-200D-2640-FE0F");
//! ```

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Argument parsing and the scan loop of the `emoji_detector` binary
pub mod cli;
/// Settings for the detector, like the single emoji length threshold
pub mod config;
/// A small UTF-8 decoder for matched emojis
pub mod decoding;
/// [detector::EmojiDetector] scans text for emojis
pub mod detector;
/// The records describing detected emojis
pub mod emojis;
/// The emoji reference data, i.e. the name map and the emoji pattern
pub mod tables;

pub use crate::config::DetectorConfig;
pub use crate::detector::{detect_emoji, is_single_emoji, EmojiDetector};
pub use crate::emojis::emoji_match::EmojiMatch;
pub use crate::emojis::skin_tone::SkinTone;
pub use crate::tables::errors::DataLoadError;
pub use crate::tables::reference_data::EmojiReferenceData;

#[cfg(test)]
mod tests;
