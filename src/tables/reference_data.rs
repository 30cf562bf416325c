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
//! The static data the detector works with: a map from sequence keys to short names and a
//! pattern that matches every known emoji sequence.
//!
//! Both are pre-built and shipped in `data/`:
//! - `map.json` is an object like `{"1F63B": "heart_eyes_cat", "1F44D-1F3FC": "+1"}`
//! - `regexp.json` is a single string holding the body of an alternation
//!   (`\x{1F44D}\x{1F3FC}|\x{1F44D}|...`) without delimiters or flags.
//!
//! The regex engine prefers earlier alternatives, so the body has to list longer sequences
//! before their prefixes. Otherwise e.g. 👍🏼 would be split into 👍 and a lone modifier.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};

use crate::tables::errors::DataLoadError;
use crate::tables::utils::{is_sequence_key, key_length};

const MAP_JSON: &str = include_str!("../../data/map.json");
const PATTERN_JSON: &str = include_str!("../../data/regexp.json");

/// The compiled alternation for a full emoji list is much larger than the usual regex
pub const PATTERN_SIZE_LIMIT: usize = 32 * (1 << 20);

static EMBEDDED: OnceCell<EmojiReferenceData> = OnceCell::new();

/// Maps sequence keys to short names and holds the compiled emoji pattern.
/// It is never modified after it has been built.
#[derive(Debug, Clone)]
pub struct EmojiReferenceData {
    names: HashMap<String, String>,
    pattern: Regex,
    longest_sequence: usize
}

impl EmojiReferenceData {
    /// Returns the reference data shipped with this crate.
    ///
    /// It is built on the first call and cached for the rest of the process.
    /// If several threads call this at the same time, only one of them builds it.
    /// A failed load is not cached and returned to the caller.
    /// # Examples
    /// ```
    /// use emoji_detector::tables::reference_data::EmojiReferenceData;
    ///
    /// let data = EmojiReferenceData::load().unwrap();
    ///
    /// assert_eq!(data.short_name("1F63B"), Some("heart_eyes_cat"));
    /// // The same instance every time
    /// assert!(std::ptr::eq(data, EmojiReferenceData::load().unwrap()));
    /// ```
    pub fn load() -> Result<&'static EmojiReferenceData, DataLoadError> {
        EMBEDDED.get_or_try_init(|| {
            debug!("Loading the embedded emoji reference data");
            Self::from_strs(MAP_JSON, PATTERN_JSON)
        })
    }

    /// Builds reference data from the contents of a name map and a pattern file.
    /// # Examples
    /// ```
    /// use emoji_detector::tables::reference_data::EmojiReferenceData;
    ///
    /// let map = r#"{"1F408": "cat"}"#;
    /// let pattern = r#""\\x{1F408}""#;
    ///
    /// let data = EmojiReferenceData::from_strs(map, pattern).unwrap();
    ///
    /// assert_eq!(data.len(), 1);
    /// assert!(data.pattern().is_match("🐈"));
    /// ```
    pub fn from_strs(map_json: &str, pattern_json: &str) -> Result<Self, DataLoadError> {
        let names = serde_json::from_str(map_json)?;
        let body: String = serde_json::from_str(pattern_json)?;
        Self::from_parts(names, &body)
    }

    /// Like [EmojiReferenceData::from_strs], but reads from any reader
    pub fn from_readers<M, P>(map_reader: M, pattern_reader: P) -> Result<Self, DataLoadError>
        where M: Read, P: Read {
        let names = serde_json::from_reader(map_reader)?;
        let body: String = serde_json::from_reader(pattern_reader)?;
        Self::from_parts(names, &body)
    }

    /// Reads the name map and the pattern from two JSON files
    pub fn from_files<M, P>(map_path: M, pattern_path: P) -> Result<Self, DataLoadError>
        where M: AsRef<Path>, P: AsRef<Path> {
        debug!("Loading emoji reference data from {:?} and {:?}",
               map_path.as_ref(),
               pattern_path.as_ref()
        );
        let map_reader = BufReader::new(File::open(map_path)?);
        let pattern_reader = BufReader::new(File::open(pattern_path)?);
        Self::from_readers(map_reader, pattern_reader)
    }

    /// Builds reference data from an already parsed name map and the alternation body.
    ///
    /// Keys that are not uppercase, hyphen-separated hex sequences can never be looked up
    /// and are dropped with a warning.
    pub fn from_parts(names: HashMap<String, String>, body: &str) -> Result<Self, DataLoadError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(DataLoadError::EmptyPattern);
        }
        let pattern = RegexBuilder::new(&format!("(?:{})", body))
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()?;

        let (names, malformed): (HashMap<_, _>, HashMap<_, _>) = names.into_iter()
            .partition(|(key, _)| is_sequence_key(key));
        for (key, name) in malformed {
            warn!("Malformed sequence key in emoji map: {} ({})", key, name);
        }

        let longest_sequence = names.keys()
            .map(|key| key_length(key))
            .max()
            .unwrap_or_default();

        debug!("Loaded {} emoji names, the longest sequence has {} codepoints",
               names.len(),
               longest_sequence
        );

        Ok(Self {
            names,
            pattern,
            longest_sequence
        })
    }

    /// Looks up the short name of a sequence key like `1F44D-1F3FC`
    pub fn short_name(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    /// The pattern matching any known emoji sequence, longest first
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The number of codepoints in the longest sequence of the name map
    pub fn longest_sequence(&self) -> usize {
        self.longest_sequence
    }

    /// Returns the number of named sequences
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Checks whether there are no named sequences at all
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl AsRef<HashMap<String, String>> for EmojiReferenceData {
    fn as_ref(&self) -> &HashMap<String, String> {
        &self.names
    }
}
