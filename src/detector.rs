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
//! Finding emojis in text.

use crate::config::DetectorConfig;
use crate::emojis::emoji_match::EmojiMatch;
use crate::tables::errors::DataLoadError;
use crate::tables::reference_data::EmojiReferenceData;

/// Scans text for emojis using a set of reference data.
#[derive(Debug, Clone)]
pub struct EmojiDetector<'a> {
    data: &'a EmojiReferenceData,
    config: DetectorConfig
}

impl EmojiDetector<'static> {
    /// Creates a detector for the reference data shipped with this crate (loading it if
    /// necessary) with the default config.
    pub fn new() -> Result<Self, DataLoadError> {
        Ok(Self::with_data(EmojiReferenceData::load()?))
    }
}

impl<'a> EmojiDetector<'a> {
    pub fn with_data(data: &'a EmojiReferenceData) -> Self {
        Self::with_config(data, DetectorConfig::default())
    }

    pub fn with_config(data: &'a EmojiReferenceData, config: DetectorConfig) -> Self {
        if outgrows_threshold(data, &config) {
            warn!("The reference data contains sequences with {} codepoints, \
                   but the longest emoji is configured to have {}",
                  data.longest_sequence(),
                  config.longest_emoji
            );
        }
        Self {
            data,
            config
        }
    }

    pub fn data(&self) -> &'a EmojiReferenceData {
        self.data
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Finds all emojis in a text, in the order they appear.
    ///
    /// Where several sequences could match, the longest one wins, so e.g. an emoji followed by
    /// a skin tone modifier is one match.
    /// # Examples
    /// ```
    /// use emoji_detector::detector::EmojiDetector;
    ///
    /// let detector = EmojiDetector::new().unwrap();
    /// let emojis = detector.detect_emoji("This has an 🎉 emoji.");
    ///
    /// assert_eq!(emojis.len(), 1);
    /// assert_eq!(emojis[0].short_name.as_deref(), Some("tada"));
    /// assert_eq!(emojis[0].position, 12);
    /// ```
    pub fn detect_emoji(&self, input: &str) -> Vec<EmojiMatch> {
        let mut position = 0;
        let mut previous_start = 0;

        self.data.pattern()
            .find_iter(input)
            .filter(|found| !found.as_str().is_empty())
            .map(|found| {
                position += input[previous_start..found.start()].chars().count();
                previous_start = found.start();
                EmojiMatch::new(found.as_str(), position, self.data)
            })
            .collect()
    }

    /// Returns the emoji if the whole input is exactly one (possibly composite) emoji
    /// # Examples
    /// ```
    /// use emoji_detector::detector::EmojiDetector;
    ///
    /// let detector = EmojiDetector::new().unwrap();
    ///
    /// assert!(detector.is_single_emoji("👨‍👩‍👦‍👦").is_some());
    /// assert!(detector.is_single_emoji("😻🐈").is_none());
    /// assert!(detector.is_single_emoji("kitty 😻").is_none());
    /// ```
    pub fn is_single_emoji(&self, input: &str) -> Option<EmojiMatch> {
        if input.chars().count() >= self.config.longest_emoji {
            return None;
        }

        let mut emojis = self.detect_emoji(input);
        if emojis.len() != 1 {
            return None;
        }
        let emoji = emojis.pop()?;

        // Anything left after removing the emoji means there was more than just the emoji
        if input.replace(emoji.emoji.as_str(), "").is_empty() {
            Some(emoji)
        } else {
            None
        }
    }
}

/// Checks whether the data knows longer sequences than the single emoji threshold accounts for
pub(crate) fn outgrows_threshold(data: &EmojiReferenceData, config: &DetectorConfig) -> bool {
    data.longest_sequence() > config.longest_emoji
}

/// Finds all emojis in a text using the reference data shipped with this crate.
///
/// The reference data is loaded on the first call; if that fails, the error is returned.
/// # Examples
/// ```
/// use emoji_detector::detect_emoji;
///
/// let emojis = detect_emoji("👩❤️").unwrap();
///
/// assert_eq!(emojis.len(), 2);
/// assert_eq!(emojis[0].short_name.as_deref(), Some("woman"));
/// assert_eq!(emojis[1].short_name.as_deref(), Some("heart"));
/// ```
pub fn detect_emoji(input: &str) -> Result<Vec<EmojiMatch>, DataLoadError> {
    Ok(EmojiDetector::new()?.detect_emoji(input))
}

/// Checks whether a text is exactly one emoji, using the reference data shipped with this crate.
/// # Examples
/// ```
/// use emoji_detector::is_single_emoji;
///
/// assert_eq!(is_single_emoji("😻").unwrap().unwrap().hex_str, "1F63B");
/// assert_eq!(is_single_emoji("kitty 😻").unwrap(), None);
/// ```
pub fn is_single_emoji(input: &str) -> Result<Option<EmojiMatch>, DataLoadError> {
    Ok(EmojiDetector::new()?.is_single_emoji(input))
}
