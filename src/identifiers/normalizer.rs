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
//! Normalization of raw emoji input into [CanonicalIdentifier]s.
//!
//! Input may either already be an identifier (`1F525`, `1fa84-fe0f`) or an emoji itself (`🔥`).
//! The result always is an identifier the combination data knows about, with one exception:
//! legacy remapping produces a best guess that is not checked against the data.

use crate::identifiers::classifier::EmojiClassifier;
use crate::identifiers::errors::NormalizeError;
use crate::identifiers::identifier::CanonicalIdentifier;
use crate::tables::mix_data::MixData;

/// The distance between the deprecated codepoints some older emoji inputs carry and the
/// current ones.
pub const LEGACY_CODEPOINT_OFFSET: u32 = 204;
/// Appended to remapped legacy identifiers (emoji presentation selector)
pub const LEGACY_SELECTOR: u32 = 0xfe0f;

/// Converts `input` to the identifier the combination data uses for it.
///
/// Returns
/// - `Ok(None)` if the input is neither an identifier nor a single emoji, or if no supported
///   identifier starts with the derived candidate,
/// - `Err(NormalizeError::Outdated)` if the found identifier has no combinations and
///   `legacy_remap` is disabled,
/// - the remapped legacy identifier (unchecked) if it has no combinations and `legacy_remap` is
///   enabled,
/// - the supported identifier otherwise.
///
/// # Examples
/// ```
/// use emoji_mix::{CanonicalIdentifier, CombinationRecord, MixData, SupportTable};
/// use emoji_mix::identifiers::classifier::UnicodeEmojiClassifier;
/// use emoji_mix::identifiers::normalizer::normalize;
///
/// let fire = CanonicalIdentifier::parse("1f525").unwrap();
/// let smiley = CanonicalIdentifier::parse("1f603").unwrap();
/// let mut table = SupportTable::new();
/// table.insert(CombinationRecord::new(fire.clone(), smiley.clone(), "20230301"));
/// table.insert(CombinationRecord::new(smiley.clone(), fire.clone(), "20230301"));
/// let data = MixData::new(vec![fire.clone(), smiley.clone()], table).unwrap();
///
/// assert_eq!(normalize("🔥", false, &data, &UnicodeEmojiClassifier), Ok(Some(fire.clone())));
/// assert_eq!(normalize("1F525", false, &data, &UnicodeEmojiClassifier), Ok(Some(fire)));
/// assert_eq!(normalize("fire", false, &data, &UnicodeEmojiClassifier), Ok(None));
/// ```
pub fn normalize<C>(
    input: &str,
    legacy_remap: bool,
    data: &MixData,
    classifier: &C
) -> Result<Option<CanonicalIdentifier>, NormalizeError>
    where C: EmojiClassifier + ?Sized {
    let candidate = match derive_candidate(input, classifier) {
        Some(candidate) => candidate,
        None => return Ok(None)
    };

    let matched = match data.find_by_prefix(&candidate) {
        Some(matched) => matched,
        None => {
            debug!("No supported emoji starts with {} (input {:?})", candidate, input);
            return Ok(None);
        }
    };
    if matched != &candidate {
        debug!("Using {} for {} (input {:?})", matched, candidate, input);
    }

    if data.support_table().contains(matched) {
        Ok(Some(matched.clone()))
    } else if legacy_remap {
        let remapped = remap_legacy(input);
        debug!("{} has no combinations, remapped {:?} to {:?}", matched, input, remapped);
        Ok(remapped)
    } else {
        Err(NormalizeError::Outdated {
            identifier: candidate,
            input: input.to_owned()
        })
    }
}

/// Derives the raw candidate identifier, before any lookup in the data
fn derive_candidate<C>(input: &str, classifier: &C) -> Option<CanonicalIdentifier>
    where C: EmojiClassifier + ?Sized {
    if let Some(identifier) = CanonicalIdentifier::parse(input) {
        Some(identifier)
    } else if classifier.is_single_emoji(input) {
        input.chars()
            .next()
            .map(|first| CanonicalIdentifier::from_codepoint(first as u32))
    } else {
        None
    }
}

/// Guesses the current identifier of a legacy input: the first codepoint of the raw input,
/// shifted by [LEGACY_CODEPOINT_OFFSET], with the emoji presentation selector appended.
///
/// Note that for identifier strings this uses the first *character* (i.e. a hex digit),
/// not the parsed codepoint.
/// ```
/// use emoji_mix::identifiers::normalizer::remap_legacy;
///
/// assert_eq!(remap_legacy("\u{2601}").unwrap().as_str(), "26cd-fe0f");
/// assert!(remap_legacy("").is_none());
/// ```
pub fn remap_legacy(input: &str) -> Option<CanonicalIdentifier> {
    let first = input.chars().next()? as u32;
    CanonicalIdentifier::from_codepoints(&[first + LEGACY_CODEPOINT_OFFSET, LEGACY_SELECTOR])
}
