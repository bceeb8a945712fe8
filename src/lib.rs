/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
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
//! The main crate for emoji_mix: building image URLs for mixed ("kitchen") emojis
//! out of two input emojis.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Canonical emoji identifiers and the normalization of raw input into them
pub mod identifiers;
/// The (externally supplied) combination data: supported identifiers and the support table
pub mod tables;
/// Resolving combinations, building URLs and the [mixer::EmojiMixer] entry point
pub mod mixer;

pub use crate::identifiers::identifier::CanonicalIdentifier;
pub use crate::mixer::config::MixerConfig;
pub use crate::mixer::errors::MixError;
pub use crate::mixer::emoji_mixer::EmojiMixer;
pub use crate::mixer::url::BASE_IMAGE_URL;
pub use crate::tables::mix_data::{CombinationRecord, MixData, SupportTable};

#[cfg(test)]
mod tests;
