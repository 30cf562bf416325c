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

use itertools::Itertools;
use regex::Regex;

/// The delimiter between codepoints in a sequence key
pub const KEY_DELIMITER: &str = "-";

/// Formats a codepoint as uppercase hex without any padding or prefix.
/// A decode gap (`None`) is written as `0`.
pub fn hex_point(codepoint: Option<u32>) -> String {
    format!("{:X}", codepoint.unwrap_or_default())
}

/// Joins hex codepoints into a sequence key like `1F44D-1F3FC`
pub fn sequence_key<S: AsRef<str>>(points_hex: &[S]) -> String {
    points_hex.iter()
        .map(|point| point.as_ref())
        .join(KEY_DELIMITER)
}

/// Checks whether a string is a well-formed sequence key, i.e. uppercase hex codepoints
/// separated by single hyphens.
pub fn is_sequence_key(key: &str) -> bool {
    lazy_static! {
        static ref SEQUENCE_KEY: Regex = Regex::new(r"^[0-9A-F]{1,8}(-[0-9A-F]{1,8})*$").unwrap();
    }

    SEQUENCE_KEY.is_match(key)
}

/// Counts the codepoints in a sequence key
pub fn key_length(key: &str) -> usize {
    key.split(KEY_DELIMITER).count()
}
