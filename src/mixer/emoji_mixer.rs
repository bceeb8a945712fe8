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
//! The entry point: from two emojis to the URL of their combined image.

use crate::identifiers::classifier::{EmojiClassifier, UnicodeEmojiClassifier};
use crate::identifiers::errors::NormalizeError;
use crate::identifiers::identifier::CanonicalIdentifier;
use crate::identifiers::normalizer::normalize;
use crate::mixer::config::MixerConfig;
use crate::mixer::errors::{MixError, Side};
use crate::mixer::resolver::resolve;
use crate::mixer::url::build_image_url;
use crate::tables::mix_data::{CombinationRecord, MixData};

/// Builds image URLs for emoji combinations based on some [MixData].
///
/// There are two ways of asking for a URL:
/// - [EmojiMixer::try_mix_url] returns `Ok(None)` whenever there is no image,
/// - [EmojiMixer::mix_url] tells you why there is no image.
///
/// Outdated identifiers are an error in both of them (unless legacy remapping is enabled).
///
/// # Examples
/// ```
/// use emoji_mix::{CanonicalIdentifier, CombinationRecord, EmojiMixer, MixData, SupportTable};
///
/// let fire = CanonicalIdentifier::parse("1f525").unwrap();
/// let smiley = CanonicalIdentifier::parse("1f603").unwrap();
/// let mut table = SupportTable::new();
/// table.insert(CombinationRecord::new(fire.clone(), smiley.clone(), "20230301"));
/// table.insert_key(fire.clone());
///
/// let mixer = EmojiMixer::new(MixData::new(vec![fire, smiley], table).unwrap());
///
/// assert_eq!(
///     mixer.try_mix_url("🔥", "😃", false).unwrap().unwrap(),
///     "https://www.gstatic.com/android/keyboard/emojikitchen/20230301/u1f525/u1f525_u1f603.png"
/// );
/// assert!(mixer.mix_url("🔥", "🔥", false).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmojiMixer<C = UnicodeEmojiClassifier> {
    data: MixData,
    config: MixerConfig,
    classifier: C,
}

impl EmojiMixer<UnicodeEmojiClassifier> {
    pub fn new(data: MixData) -> Self {
        Self::with_config(data, MixerConfig::default())
    }

    pub fn with_config(data: MixData, config: MixerConfig) -> Self {
        Self::with_classifier(data, config, UnicodeEmojiClassifier)
    }
}

impl<C> EmojiMixer<C>
    where C: EmojiClassifier {
    /// Uses another predicate to decide what counts as a single emoji
    pub fn with_classifier(data: MixData, config: MixerConfig, classifier: C) -> Self {
        Self {
            data,
            config,
            classifier,
        }
    }

    pub fn data(&self) -> &MixData {
        &self.data
    }

    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    /// Converts an emoji or an identifier string into the identifier used by the data.
    /// See [normalize] for the details.
    pub fn to_canonical_identifier(&self, input: &str, legacy_remap: bool) -> Result<Option<CanonicalIdentifier>, NormalizeError> {
        normalize(input, legacy_remap, &self.data, &self.classifier)
    }

    /// All known combinations that have `emoji` on the right-hand side,
    /// or `None` if it can't be combined at all.
    pub fn check_supported(&self, emoji: &str, legacy_remap: bool) -> Result<Option<&[CombinationRecord]>, NormalizeError> {
        Ok(self.to_canonical_identifier(emoji, legacy_remap)?
            .and_then(|identifier| self.data.support_table().get(&identifier)))
    }

    /// The most recent record combining both identifiers
    pub fn resolve_combination(&self, left: &CanonicalIdentifier, right: &CanonicalIdentifier) -> Option<&CombinationRecord> {
        resolve(self.data.support_table(), left, right)
    }

    /// The image URL for `record` using the configured base URL
    pub fn build_image_url(&self, record: &CombinationRecord) -> String {
        build_image_url(&self.config.base_url, record)
    }

    /// Returns the image URL combining `left` and `right`, `Ok(None)` if there is none.
    pub fn try_mix_url(&self, left: &str, right: &str, legacy_remap: bool) -> Result<Option<String>, NormalizeError> {
        match self.mix_url(left, right, legacy_remap) {
            Ok(url) => Ok(Some(url)),
            Err(MixError::Normalize(error)) => Err(error),
            Err(error) => {
                debug!("No mix for {:?} and {:?}: {}", left, right, error);
                Ok(None)
            }
        }
    }

    /// Returns the image URL combining `left` and `right` or the reason why there is none.
    ///
    /// The checks run in a fixed order, the first failing one is reported:
    /// 1. both inputs are identifiers or emojis (left first),
    /// 2. both identifiers are supported by the service (left first),
    /// 3. there is a combination of both.
    pub fn mix_url(&self, left: &str, right: &str, legacy_remap: bool) -> Result<String, MixError> {
        let left_identifier = self.normalize_argument(left, Side::Left, legacy_remap)?;
        let right_identifier = self.normalize_argument(right, Side::Right, legacy_remap)?;

        self.ensure_supported(&left_identifier, Side::Left)?;
        self.ensure_supported(&right_identifier, Side::Right)?;

        match self.resolve_combination(&left_identifier, &right_identifier) {
            Some(record) => Ok(self.build_image_url(record)),
            None => {
                let compatible = self.data.support_table()
                    .compatible_with(&right_identifier)
                    .into_iter()
                    .cloned()
                    .collect();
                Err(MixError::NoCombination {
                    left: left_identifier,
                    right: right_identifier,
                    compatible,
                })
            }
        }
    }

    /// Picks [EmojiMixer::mix_url] or [EmojiMixer::try_mix_url] depending on `detailed_errors`.
    ///
    /// In quiet mode, the only error that can occur is [MixError::Normalize].
    pub fn get_mix_url(&self, left: &str, right: &str, detailed_errors: bool, legacy_remap: bool) -> Result<Option<String>, MixError> {
        if detailed_errors {
            self.mix_url(left, right, legacy_remap).map(Some)
        } else {
            self.try_mix_url(left, right, legacy_remap).map_err(MixError::from)
        }
    }

    /// [EmojiMixer::get_mix_url] with the flags from the [MixerConfig]
    pub fn mix_url_with_config(&self, left: &str, right: &str) -> Result<Option<String>, MixError> {
        self.get_mix_url(left, right, self.config.detailed_errors, self.config.legacy_remap)
    }

    fn normalize_argument(&self, input: &str, side: Side, legacy_remap: bool) -> Result<CanonicalIdentifier, MixError> {
        self.to_canonical_identifier(input, legacy_remap)?
            .ok_or_else(|| MixError::InvalidInput {
                side,
                input: input.to_owned(),
            })
    }

    fn ensure_supported(&self, identifier: &CanonicalIdentifier, side: Side) -> Result<(), MixError> {
        if self.data.is_supported(identifier) {
            Ok(())
        } else {
            Err(MixError::NotSupported {
                side,
                identifier: identifier.clone(),
            })
        }
    }
}
