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
//! The command line interface of the `emoji_detector` binary.

use std::error::Error;
use std::io::{BufRead, Write};

use clap::{crate_version, App, Arg, ArgMatches};

use crate::config::DetectorConfig;
use crate::detector::EmojiDetector;
use crate::tables::reference_data::EmojiReferenceData;

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("emoji_detector")
        .version(crate_version!())
        .author("Constantin A. <emoji.builder@c1710.de>")
        .about("Finds emojis in text and prints them as JSON, one line per input")
        .arg(Arg::with_name("single")
            .short("s")
            .long("single")
            .help("Only print the emoji if the whole input is exactly one emoji, otherwise `false`")
            .takes_value(false)
            .required(false))
        .arg(Arg::with_name("map")
            .short("m")
            .long("map")
            .value_name("FILE")
            .help("A JSON file mapping codepoint sequences to short names")
            .takes_value(true)
            .requires("pattern"))
        .arg(Arg::with_name("pattern")
            .short("p")
            .long("pattern")
            .value_name("FILE")
            .help("A JSON file containing the emoji pattern")
            .long_help("A JSON file containing a single string: the body of an alternation of all \
            emoji sequences, longest sequences first")
            .takes_value(true)
            .requires("map"))
        .arg(Arg::with_name("config")
            .short("c")
            .long("config")
            .value_name("FILE")
            .help("A JSON file with the detector config")
            .takes_value(true)
            .required(false))
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .help("Print more log messages (may be repeated)")
            .multiple(true))
        .arg(Arg::with_name("text")
            .value_name("TEXT")
            .help("The texts to scan. If none are given, every line from stdin is scanned")
            .multiple(true))
}

/// Scans one text and serializes the result
fn scan(detector: &EmojiDetector, text: &str, single: bool) -> Result<String, serde_json::Error> {
    if single {
        match detector.is_single_emoji(text) {
            Some(emoji) => serde_json::to_string(&emoji),
            None => Ok(String::from("false"))
        }
    } else {
        serde_json::to_string(&detector.detect_emoji(text))
    }
}

/// Scans the texts given in `matches` (or every line of `input` if there are none)
/// and writes one JSON line per text to `output`.
pub fn run<R: BufRead, W: Write>(matches: &ArgMatches, input: R, output: &mut W) -> Result<(), Box<dyn Error>> {
    let config = match matches.value_of("config") {
        Some(path) => DetectorConfig::from_file(path)?,
        None => DetectorConfig::default()
    };

    let custom_data;
    let data = match (matches.value_of("map"), matches.value_of("pattern")) {
        (Some(map), Some(pattern)) => {
            custom_data = EmojiReferenceData::from_files(map, pattern)?;
            &custom_data
        },
        _ => EmojiReferenceData::load()?
    };
    info!("Using {} emoji names", data.len());

    let detector = EmojiDetector::with_config(data, config);
    let single = matches.is_present("single");

    if let Some(texts) = matches.values_of("text") {
        for text in texts {
            writeln!(output, "{}", scan(&detector, text, single)?)?;
        }
    } else {
        for line in input.lines() {
            writeln!(output, "{}", scan(&detector, &line?, single)?)?;
        }
    }
    Ok(())
}
