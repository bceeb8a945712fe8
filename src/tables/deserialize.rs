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

use std::fmt::{Debug, Display, Formatter};
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

/// The file formats data files and configs can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml
}

pub const DEFAULT_EXTENSION: &str = "json";

impl DataFormat {
    /// Picks the format based on the file extension
    /// ```
    /// use std::path::Path;
    /// use emoji_mix::tables::deserialize::DataFormat;
    ///
    /// assert_eq!(DataFormat::for_file(Path::new("metadata.YML")), Some(DataFormat::Yaml));
    /// assert_eq!(DataFormat::for_file(Path::new("metadata")), None);
    /// ```
    pub fn for_file(file: &Path) -> Option<Self> {
        file.extension()
            .and_then(|extension| Self::for_extension(extension.to_string_lossy().as_ref()))
    }

    pub fn for_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None
        }
    }

    pub fn deserialize<R, T>(&self, reader: R) -> Result<T, SerdeError>
        where R: Read, T: DeserializeOwned {
        match self {
            DataFormat::Json => serde_json::from_reader(reader).map_err(SerdeError::from),
            DataFormat::Yaml => serde_yaml::from_reader(reader).map_err(SerdeError::from)
        }
    }
}

impl Default for DataFormat {
    fn default() -> Self {
        // The extension is a constant one from the match above
        Self::for_extension(DEFAULT_EXTENSION).unwrap_or(DataFormat::Json)
    }
}

/// A format-independent deserialization error
#[derive(Clone)]
pub struct SerdeError {
    debug: String,
    display: String
}

impl std::error::Error for SerdeError {}

impl Debug for SerdeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.debug, f)
    }
}

impl Display for SerdeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.display, f)
    }
}

impl<E> From<E> for SerdeError
    where E: serde::de::Error {
    fn from(error: E) -> Self {
        Self {
            debug: format!("{:?}", error),
            display: format!("{}", error)
        }
    }
}
