/// The record for a single emoji found in a text
pub mod emoji_match;
/// Fitzpatrick skin tone modifiers
pub mod skin_tone;
