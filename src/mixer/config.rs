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

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mixer::url::BASE_IMAGE_URL;
use crate::tables::deserialize::DataFormat;
use crate::tables::errors::TableError;

/// Settings for an [EmojiMixer](crate::mixer::emoji_mixer::EmojiMixer).
///
/// Every field is optional when deserializing:
/// ```
/// use emoji_mix::{BASE_IMAGE_URL, MixerConfig};
///
/// let config = MixerConfig::from_reader_json(r#"{"legacy_remap": true}"#.as_bytes()).unwrap();
/// assert_eq!(config.base_url, BASE_IMAGE_URL);
/// assert!(!config.detailed_errors);
/// assert!(config.legacy_remap);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    /// Where the images are hosted
    pub base_url: String,
    /// Report failures as errors instead of `None`
    pub detailed_errors: bool,
    /// Remap outdated identifiers instead of failing
    pub legacy_remap: bool,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_IMAGE_URL.to_owned(),
            detailed_errors: false,
            legacy_remap: false,
        }
    }
}

impl MixerConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let format = DataFormat::for_file(path).unwrap_or_default();
        Ok(format.deserialize(BufReader::new(File::open(path)?))?)
    }

    pub fn from_reader_json<R: Read>(reader: R) -> Result<Self, TableError> {
        Ok(DataFormat::Json.deserialize(reader)?)
    }

    pub fn from_reader_yaml<R: Read>(reader: R) -> Result<Self, TableError> {
        Ok(DataFormat::Yaml.deserialize(reader)?)
    }
}
