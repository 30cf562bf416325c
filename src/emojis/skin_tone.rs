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
use std::str::FromStr;

use serde::Serialize;

/// The skin tone selected by one of the five Fitzpatrick modifiers (`U+1F3FB`..`U+1F3FF`).
/// Type 1 and 2 share a modifier, so the levels start at 2.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize)]
pub enum SkinTone {
    /// `U+1F3FB`, light skin tone
    #[serde(rename = "skin-tone-2")]
    Two,
    /// `U+1F3FC`, medium-light skin tone
    #[serde(rename = "skin-tone-3")]
    Three,
    /// `U+1F3FD`, medium skin tone
    #[serde(rename = "skin-tone-4")]
    Four,
    /// `U+1F3FE`, medium-dark skin tone
    #[serde(rename = "skin-tone-5")]
    Five,
    /// `U+1F3FF`, dark skin tone
    #[serde(rename = "skin-tone-6")]
    Six
}

impl SkinTone {
    /// Returns the skin tone for a Fitzpatrick modifier codepoint
    /// # Examples
    /// ```
    /// use emoji_detector::emojis::skin_tone::SkinTone;
    ///
    /// assert_eq!(SkinTone::from_codepoint(0x1f3fc), Some(SkinTone::Three));
    /// assert_eq!(SkinTone::from_codepoint(0x1f44d), None);
    /// ```
    pub fn from_codepoint(codepoint: u32) -> Option<Self> {
        match codepoint {
            0x1f3fb => Some(Self::Two),
            0x1f3fc => Some(Self::Three),
            0x1f3fd => Some(Self::Four),
            0x1f3fe => Some(Self::Five),
            0x1f3ff => Some(Self::Six),
            _ => None
        }
    }

    /// Finds the skin tone of a codepoint sequence.
    /// Sequences usually carry at most one modifier; if there are more, the last one counts.
    pub fn from_sequence<'a, I>(codepoints: I) -> Option<Self>
        where I: IntoIterator<Item = &'a u32> {
        codepoints.into_iter()
            .filter_map(|codepoint| Self::from_codepoint(*codepoint))
            .last()
    }

    pub fn codepoint(&self) -> u32 {
        match self {
            Self::Two => 0x1f3fb,
            Self::Three => 0x1f3fc,
            Self::Four => 0x1f3fd,
            Self::Five => 0x1f3fe,
            Self::Six => 0x1f3ff
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Two => "skin-tone-2",
            Self::Three => "skin-tone-3",
            Self::Four => "skin-tone-4",
            Self::Five => "skin-tone-5",
            Self::Six => "skin-tone-6"
        }
    }
}

impl Display for SkinTone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skin-tone-2" => Ok(Self::Two),
            "skin-tone-3" => Ok(Self::Three),
            "skin-tone-4" => Ok(Self::Four),
            "skin-tone-5" => Ok(Self::Five),
            "skin-tone-6" => Ok(Self::Six),
            other => Err(other.to_string())
        }
    }
}
