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
//! The canonical form emojis are identified by: lowercase hexadecimal codepoints joined by
//! hyphens, e.g. `1f525` or `1fa84-fe0f`.

use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Matches anything that already looks like an identifier (in any letter case)
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^(?i)[0-9a-f]+(-[0-9a-f]+)*$").unwrap();
}

/// A validated, lowercase identifier for an emoji or emoji sequence.
///
/// Outside of the data tables these are only produced by the
/// [normalizer](crate::identifiers::normalizer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalIdentifier(String);

impl CanonicalIdentifier {
    /// Parses a string that already is in identifier form.
    /// Uppercase hex digits are accepted and lowercased.
    /// # Examples
    /// ```
    /// use emoji_mix::CanonicalIdentifier;
    ///
    /// let wand = CanonicalIdentifier::parse("1FA84-FE0F").unwrap();
    /// assert_eq!(wand.as_str(), "1fa84-fe0f");
    ///
    /// assert!(CanonicalIdentifier::parse("🔥").is_none());
    /// assert!(CanonicalIdentifier::parse("1f525-").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        if Self::is_identifier(raw) {
            Some(Self(raw.to_lowercase()))
        } else {
            None
        }
    }

    /// Checks whether `raw` has the shape of an identifier (ignoring letter case)
    pub fn is_identifier(raw: &str) -> bool {
        IDENTIFIER_PATTERN.is_match(raw)
    }

    /// Builds the identifier of a single codepoint, e.g. `0x1f525` -> `1f525`
    pub fn from_codepoint(codepoint: u32) -> Self {
        Self(format!("{:x}", codepoint))
    }

    /// Builds an identifier from a codepoint sequence.
    /// Returns `None` for an empty sequence.
    pub fn from_codepoints(codepoints: &[u32]) -> Option<Self> {
        if codepoints.is_empty() {
            None
        } else {
            Some(Self(codepoints.iter().map(|codepoint| format!("{:x}", codepoint)).join("-")))
        }
    }

    /// The numeric values of all hex groups
    /// ```
    /// use emoji_mix::CanonicalIdentifier;
    ///
    /// let wand = CanonicalIdentifier::parse("1fa84-fe0f").unwrap();
    /// assert_eq!(wand.codepoints(), vec![0x1fa84, 0xfe0f]);
    /// ```
    pub fn codepoints(&self) -> Vec<u32> {
        self.groups()
            // Groups are validated hex, only overlong ones fail here
            .filter_map(|group| u32::from_str_radix(group, 16).ok())
            .collect()
    }

    /// The hex groups of this identifier
    pub fn groups(&self) -> impl Iterator<Item=&str> {
        self.0.split('-')
    }

    /// Whether this identifier starts with `prefix` (plain string comparison)
    pub fn starts_with(&self, prefix: &CanonicalIdentifier) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CanonicalIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CanonicalIdentifier {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| format!("not a valid emoji identifier: {:?}", raw))
    }
}

impl From<CanonicalIdentifier> for String {
    fn from(identifier: CanonicalIdentifier) -> Self {
        identifier.0
    }
}
