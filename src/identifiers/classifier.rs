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

use unicode_segmentation::UnicodeSegmentation;

const TEXT_PRESENTATION_SELECTOR: char = '\u{fe0e}';
const EMOJI_PRESENTATION_SELECTOR: char = '\u{fe0f}';

/// Decides whether a piece of text is exactly one emoji.
///
/// Normalization only consults this for inputs that are not already identifiers,
/// so implementations don't need to care about hex strings.
pub trait EmojiClassifier {
    fn is_single_emoji(&self, text: &str) -> bool;
}

/// The default classifier: the text needs to be a single grapheme cluster that is known to the
/// [emojis] crate, with or without its variation selectors.
/// # Examples
/// ```
/// use emoji_mix::identifiers::classifier::{EmojiClassifier, UnicodeEmojiClassifier};
///
/// let classifier = UnicodeEmojiClassifier;
/// assert!(classifier.is_single_emoji("🔥"));
/// assert!(!classifier.is_single_emoji("🔥🔥"));
/// assert!(!classifier.is_single_emoji("fire"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeEmojiClassifier;

impl EmojiClassifier for UnicodeEmojiClassifier {
    fn is_single_emoji(&self, text: &str) -> bool {
        let mut graphemes = text.graphemes(true);
        match (graphemes.next(), graphemes.next()) {
            (Some(grapheme), None) => emojis::get(grapheme)
                .or_else(|| emojis::get(grapheme.trim_matches(|c: char| c == TEXT_PRESENTATION_SELECTOR
                    || c == EMOJI_PRESENTATION_SELECTOR)))
                .is_some(),
            _ => false
        }
    }
}

impl<F> EmojiClassifier for F
    where F: Fn(&str) -> bool {
    fn is_single_emoji(&self, text: &str) -> bool {
        self(text)
    }
}
