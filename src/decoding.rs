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
//! Turns the bytes of a matched emoji back into Unicode® scalar values.
//!
//! The decoder only knows the leading byte ranges of UTF-8 and does not check for overlong
//! encodings or surrogates. It is meant for substrings that the emoji pattern already accepted.

use std::ops::RangeInclusive;

const ONE_BYTE: RangeInclusive<u8> = 0x00..=0x7f;
const TWO_BYTES: RangeInclusive<u8> = 0xc0..=0xdf;
const THREE_BYTES: RangeInclusive<u8> = 0xe0..=0xef;
const FOUR_BYTES: RangeInclusive<u8> = 0xf0..=0xf7;

const CONTINUATION_MASK: u8 = 0xc0;
const CONTINUATION: u8 = 0x80;

/// Decodes the scalar value starting at `offset` and returns it together with the number of
/// bytes it occupies.
///
/// A byte that does not start any of the four UTF-8 forms, a missing or malformed continuation
/// byte or an `offset` past the end is a decode gap: the value is `None` and the decoder
/// advances by one byte (or not at all at the end of the input).
/// # Examples
/// ```
/// use emoji_detector::decoding::decode_scalar_value;
///
/// // 😻 is F0 9F 98 BB
/// let bytes = "a😻".as_bytes();
///
/// assert_eq!(decode_scalar_value(bytes, 0), (Some(0x61), 1));
/// assert_eq!(decode_scalar_value(bytes, 1), (Some(0x1f63b), 4));
/// // Starting in the middle of a sequence
/// assert_eq!(decode_scalar_value(bytes, 2), (None, 1));
/// ```
pub fn decode_scalar_value(bytes: &[u8], offset: usize) -> (Option<u32>, usize) {
    let lead = match bytes.get(offset) {
        Some(lead) => *lead,
        None => return (None, 0)
    };

    let (initial, length) = if ONE_BYTE.contains(&lead) {
        return (Some(lead as u32), 1);
    } else if TWO_BYTES.contains(&lead) {
        (lead - TWO_BYTES.start(), 2)
    } else if THREE_BYTES.contains(&lead) {
        (lead - THREE_BYTES.start(), 3)
    } else if FOUR_BYTES.contains(&lead) {
        (lead - FOUR_BYTES.start(), 4)
    } else {
        return (None, 1);
    };

    let continuation = match bytes.get(offset + 1..offset + length) {
        Some(continuation) => continuation,
        None => return (None, 1)
    };

    continuation.iter()
        .try_fold(initial as u32, |value, byte| {
            if byte & CONTINUATION_MASK == CONTINUATION {
                Some((value << 6) | (byte - CONTINUATION) as u32)
            } else {
                None
            }
        })
        .map_or((None, 1), |value| (Some(value), length))
}

/// An iterator over the scalar values of a byte sequence, built on [decode_scalar_value].
/// Decode gaps are yielded as `None`.
/// # Examples
/// ```
/// use emoji_detector::decoding::ScalarValues;
///
/// let values: Vec<_> = ScalarValues::new("👍🏼".as_bytes()).collect();
///
/// assert_eq!(values, vec![Some(0x1f44d), Some(0x1f3fc)]);
/// ```
#[derive(Debug, Clone)]
pub struct ScalarValues<'a> {
    bytes: &'a [u8],
    offset: usize
}

impl<'a> ScalarValues<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            offset: 0
        }
    }
}

impl<'a> From<&'a str> for ScalarValues<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<'a> Iterator for ScalarValues<'a> {
    type Item = Option<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.bytes.len() {
            return None;
        }
        let (value, length) = decode_scalar_value(self.bytes, self.offset);
        self.offset += length;
        Some(value)
    }
}
