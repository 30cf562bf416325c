use std::collections::HashMap;
use std::io::Write;

use crate::tables::errors::DataLoadError;
use crate::tables::reference_data::EmojiReferenceData;
use crate::tables::utils::{hex_point, is_sequence_key, key_length, sequence_key};

const MAP: &str = r#"{"1F44D": "+1", "1F44D-1F3FC": "+1", "1F3FC": "skin-tone-3", "1f408": "cat"}"#;
const PATTERN: &str = r#""\\x{1F44D}\\x{1F3FC}|\\x{1F44D}|\\x{1F3FC}""#;

#[test]
fn embedded_data() {
    let data = EmojiReferenceData::load().unwrap();

    assert!(!data.is_empty());
    assert_eq!(data.short_name("1F63B"), Some("heart_eyes_cat"));
    assert_eq!(data.short_name("2764-FE0F"), Some("heart"));
    assert_eq!(data.short_name("1F468-200D-1F469-200D-1F466-200D-1F466"), Some("man-woman-boy-boy"));
    assert_eq!(data.short_name("1F63B-1F63B"), None);
    // Skin tone variants share the name of their base emoji
    assert_eq!(data.short_name("1F468-1F3FB-200D-1F4BB"), data.short_name("1F468-200D-1F4BB"));
    assert!(data.short_name("1F9D1-1F3FD-200D-1F91D-200D-1F9D1-1F3FB").is_some());
}

#[test]
fn embedded_data_matches_the_single_emoji_threshold() {
    let data = EmojiReferenceData::load().unwrap();

    assert_eq!(data.longest_sequence(), crate::config::LONGEST_EMOJI);
    assert_eq!(data.short_name("1F469-200D-2764-FE0F-200D-1F48B-200D-1F468"), Some("woman-kiss-man"));
}

#[test]
fn embedded_keys_are_well_formed() {
    let data = EmojiReferenceData::load().unwrap();
    let names: &HashMap<String, String> = data.as_ref();

    assert!(names.keys().all(|key| is_sequence_key(key)));
}

#[test]
fn concurrent_load() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| EmojiReferenceData::load().unwrap() as *const EmojiReferenceData as usize))
        .collect();
    let addresses: Vec<_> = handles.into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn custom_data() {
    let data = EmojiReferenceData::from_strs(MAP, PATTERN).unwrap();

    // The lowercase key can never be found and is dropped
    assert_eq!(data.len(), 3);
    assert_eq!(data.longest_sequence(), 2);
    assert_eq!(data.pattern().find("a 👍🏼").unwrap().as_str(), "👍🏼");
}

#[test]
fn from_files() {
    let mut map_file = tempfile::NamedTempFile::new().unwrap();
    let mut pattern_file = tempfile::NamedTempFile::new().unwrap();
    map_file.write_all(MAP.as_bytes()).unwrap();
    pattern_file.write_all(PATTERN.as_bytes()).unwrap();

    let data = EmojiReferenceData::from_files(map_file.path(), pattern_file.path()).unwrap();

    assert_eq!(data.short_name("1F44D-1F3FC"), Some("+1"));
}

#[test]
fn load_errors() {
    let missing = EmojiReferenceData::from_files("does/not/exist.json", "does/not/exist.json");
    assert!(matches!(missing, Err(DataLoadError::Io(_))));

    let not_json = EmojiReferenceData::from_strs("{\"1F408\": ", PATTERN);
    assert!(matches!(not_json, Err(DataLoadError::Json(_))));

    // The pattern file has to contain a string
    let not_a_string = EmojiReferenceData::from_strs(MAP, "[\"1F408\"]");
    assert!(matches!(not_a_string, Err(DataLoadError::Json(_))));

    let empty = EmojiReferenceData::from_strs(MAP, "\"  \"");
    assert!(matches!(empty, Err(DataLoadError::EmptyPattern)));

    let invalid = EmojiReferenceData::from_strs(MAP, r#""(\\x{1F408}""#);
    assert!(matches!(invalid, Err(DataLoadError::Pattern(_))));
}

#[test]
fn keys() {
    assert_eq!(hex_point(Some(0x1f44d)), "1F44D");
    assert_eq!(hex_point(Some(0xa9)), "A9");
    assert_eq!(hex_point(None), "0");
    assert_eq!(sequence_key(&["1F44D", "1F3FC"]), "1F44D-1F3FC");
    assert_eq!(key_length("1F468-200D-1F469"), 3);

    assert!(is_sequence_key("1F3F3-FE0F-200D-1F308"));
    assert!(!is_sequence_key("1f3f3"));
    assert!(!is_sequence_key("0x1F3F3"));
    assert!(!is_sequence_key("1F3F3--1F308"));
    assert!(!is_sequence_key(""));
}
