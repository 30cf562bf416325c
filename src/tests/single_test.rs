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

use std::collections::HashMap;

use crate::config::{DetectorConfig, LONGEST_EMOJI};
use crate::detector::{is_single_emoji, outgrows_threshold, EmojiDetector};
use crate::tables::reference_data::EmojiReferenceData;

#[test]
fn single_emoji() {
    let text = "😻";
    let emoji = is_single_emoji(text).unwrap().unwrap();

    assert_eq!(emoji.emoji, text);
    assert_eq!(emoji.short_name.as_deref(), Some("heart_eyes_cat"));
}

#[test]
fn single_composite_emoji() {
    let text = "👨‍👩‍👦‍👦";
    let emoji = is_single_emoji(text).unwrap().unwrap();

    assert_eq!(emoji.emoji, text);
    assert_eq!(emoji.num_points, 7);
}

#[test]
fn single_emoji_with_skin_tone() {
    let emoji = is_single_emoji("👍🏼").unwrap().unwrap();

    assert_eq!(emoji.hex_str, "1F44D-1F3FC");
}

#[test]
fn multiple_emoji() {
    assert_eq!(is_single_emoji("😻🐈").unwrap(), None);
    assert_eq!(is_single_emoji("😻😻").unwrap(), None);
}

#[test]
fn single_emoji_with_text() {
    assert_eq!(is_single_emoji("kitty 😻").unwrap(), None);
    assert_eq!(is_single_emoji("😻 kitty").unwrap(), None);
    assert_eq!(is_single_emoji(" 😻").unwrap(), None);
    assert_eq!(is_single_emoji("😻.").unwrap(), None);
}

#[test]
fn no_emoji() {
    assert_eq!(is_single_emoji("").unwrap(), None);
    assert_eq!(is_single_emoji("cat").unwrap(), None);
}

#[test]
fn too_long() {
    // Not scanned at all: this is no emoji and at least LONGEST_EMOJI codepoints long
    let text: String = std::iter::repeat('a').take(LONGEST_EMOJI).collect();
    assert_eq!(is_single_emoji(&text).unwrap(), None);
}

#[test]
fn longest_emoji_is_never_single() {
    let kiss = "👩‍❤️‍💋‍👨";
    assert_eq!(kiss.chars().count(), LONGEST_EMOJI);

    // Found while scanning, but rejected by length
    assert_eq!(crate::detector::detect_emoji(kiss).unwrap().len(), 1);
    assert_eq!(is_single_emoji(kiss).unwrap(), None);

    let data = EmojiReferenceData::load().unwrap();
    let relaxed = EmojiDetector::with_config(data, DetectorConfig { longest_emoji: LONGEST_EMOJI + 1 });
    assert_eq!(relaxed.is_single_emoji(kiss).unwrap().short_name.as_deref(), Some("woman-kiss-man"));
}

#[test]
fn threshold_drift() {
    let data = EmojiReferenceData::load().unwrap();
    assert!(!outgrows_threshold(data, &DetectorConfig::default()));
    assert!(outgrows_threshold(data, &DetectorConfig { longest_emoji: LONGEST_EMOJI - 1 }));

    let names: HashMap<String, String> = vec![("1F468-200D-1F469-200D-1F467".to_string(), "family".to_string())]
        .into_iter()
        .collect();
    let family = EmojiReferenceData::from_parts(names, r"\x{1F468}\x{200D}\x{1F469}\x{200D}\x{1F467}").unwrap();
    assert_eq!(family.longest_sequence(), 5);
    assert!(outgrows_threshold(&family, &DetectorConfig { longest_emoji: 4 }));
    assert!(!outgrows_threshold(&family, &DetectorConfig { longest_emoji: 5 }));

    // The check only warns, the detector still works
    let detector = EmojiDetector::with_config(&family, DetectorConfig { longest_emoji: 4 });
    assert_eq!(detector.detect_emoji("👨‍👩‍👧").len(), 1);
    assert!(detector.is_single_emoji("👨‍👩‍👧").is_none());
}

#[test]
fn threshold_is_configurable() {
    let names: HashMap<String, String> = vec![("1F408".to_string(), "cat".to_string())]
        .into_iter()
        .collect();
    let data = EmojiReferenceData::from_parts(names, r"\x{1F408}").unwrap();

    let default = EmojiDetector::with_data(&data);
    assert!(default.is_single_emoji("🐈").is_some());

    // Even a single codepoint is too long now
    let strict = EmojiDetector::with_config(&data, DetectorConfig { longest_emoji: 1 });
    assert!(strict.is_single_emoji("🐈").is_none());
    assert_eq!(strict.detect_emoji("🐈").len(), 1);
}
