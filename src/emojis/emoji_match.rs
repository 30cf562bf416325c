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
//! The record produced for every emoji found in a text.

use std::fmt::{Display, Formatter};
use std::fmt;

use serde::Serialize;

use crate::decoding::ScalarValues;
use crate::emojis::skin_tone::SkinTone;
use crate::tables::reference_data::EmojiReferenceData;
use crate::tables::utils::{hex_point, sequence_key};

/// One emoji (which might also be a sequence) found in a text.
///
/// Serializes to `{emoji, short_name, num_points, points_hex, hex_str, skin_tone}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmojiMatch {
    /// The matched part of the text, exactly as it appeared
    pub emoji: String,
    /// The short name from the name map, if the sequence has one
    pub short_name: Option<String>,
    /// The number of codepoints in `emoji`
    pub num_points: usize,
    /// Every codepoint as uppercase hex, in order
    pub points_hex: Vec<String>,
    /// `points_hex` joined by `-`; the key into the name map
    pub hex_str: String,
    /// Set if the sequence contains a Fitzpatrick modifier
    pub skin_tone: Option<SkinTone>,
    /// The offset of the match in the scanned text, counted in codepoints
    #[serde(skip)]
    pub position: usize
}

impl EmojiMatch {
    /// Builds the record for a matched substring found `position` codepoints into the text.
    /// # Examples
    /// ```
    /// use emoji_detector::emojis::emoji_match::EmojiMatch;
    /// use emoji_detector::emojis::skin_tone::SkinTone;
    /// use emoji_detector::tables::reference_data::EmojiReferenceData;
    ///
    /// let data = EmojiReferenceData::load().unwrap();
    /// let thumbs_up = EmojiMatch::new("👍🏽", 0, data);
    ///
    /// assert_eq!(thumbs_up.hex_str, "1F44D-1F3FD");
    /// assert_eq!(thumbs_up.short_name.as_deref(), Some("+1"));
    /// assert_eq!(thumbs_up.skin_tone, Some(SkinTone::Four));
    /// ```
    pub fn new(emoji: &str, position: usize, table: &EmojiReferenceData) -> Self {
        let codepoints: Vec<Option<u32>> = ScalarValues::from(emoji).collect();
        if codepoints.contains(&None) {
            warn!("Could not decode every codepoint of {:?} at {}", emoji, position);
        }

        let points_hex: Vec<String> = codepoints.iter()
            .map(|codepoint| hex_point(*codepoint))
            .collect();
        let hex_str = sequence_key(&points_hex);
        let short_name = table.short_name(&hex_str).map(str::to_owned);
        let skin_tone = SkinTone::from_sequence(codepoints.iter().flatten());

        debug!("Found {} ({:?}) at {}", hex_str, short_name, position);

        Self {
            emoji: emoji.to_owned(),
            short_name,
            num_points: points_hex.len(),
            points_hex,
            hex_str,
            skin_tone,
            position
        }
    }
}

impl Display for EmojiMatch {
    /// Shows the short name, or the sequence key in square brackets (e.g. `[1F63B-1F63B]`)
    /// if there is none.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if let Some(name) = &self.short_name {
            write!(f, "{}", name)
        } else {
            write!(f, "[{}]", self.hex_str)
        }
    }
}
