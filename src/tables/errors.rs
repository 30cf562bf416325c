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

/// An error that occurs while loading the emoji reference data.
/// Without the reference data nothing can be detected, so these errors are not recovered from.
#[derive(Debug)]
pub enum DataLoadError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// The name map or the pattern file is not valid JSON of the expected shape
    Json(serde_json::Error),
    /// The pattern body did not compile
    Pattern(regex::Error),
    /// The pattern body is empty and would match the empty string everywhere
    EmptyPattern
}

impl Display for DataLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DataLoadError::Io(err) => write!(f, "Could not read the emoji reference data: {}", err),
            DataLoadError::Json(err) => write!(f, "Malformed emoji reference data: {}", err),
            DataLoadError::Pattern(err) => write!(f, "Invalid emoji pattern: {}", err),
            DataLoadError::EmptyPattern => write!(f, "The emoji pattern is empty")
        }
    }
}

impl std::error::Error for DataLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataLoadError::Io(err) => Some(err),
            DataLoadError::Json(err) => Some(err),
            DataLoadError::Pattern(err) => Some(err),
            DataLoadError::EmptyPattern => None
        }
    }
}

impl From<std::io::Error> for DataLoadError {
    fn from(err: std::io::Error) -> Self {
        DataLoadError::Io(err)
    }
}

impl From<serde_json::Error> for DataLoadError {
    fn from(err: serde_json::Error) -> Self {
        DataLoadError::Json(err)
    }
}

impl From<regex::Error> for DataLoadError {
    fn from(err: regex::Error) -> Self {
        DataLoadError::Pattern(err)
    }
}
