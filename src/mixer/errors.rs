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

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::identifiers::errors::NormalizeError;
use crate::identifiers::identifier::CanonicalIdentifier;

/// Which of the two mixer arguments an error is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("leftEmoji"),
            Side::Right => f.write_str("rightEmoji")
        }
    }
}

/// The ways building a mix URL can fail.
///
/// Apart from [MixError::Normalize], these are only reported in detailed mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixError {
    /// An outdated identifier without legacy remapping (reported in every mode)
    Normalize(NormalizeError),
    /// The argument is neither an identifier nor a single emoji
    InvalidInput {
        side: Side,
        input: String
    },
    /// The identifier is not known to the service
    NotSupported {
        side: Side,
        identifier: CanonicalIdentifier
    },
    /// Both emojis are fine on their own, but there's no image combining them
    NoCombination {
        left: CanonicalIdentifier,
        right: CanonicalIdentifier,
        /// Everything that can be combined with `right`
        compatible: Vec<CanonicalIdentifier>
    }
}

impl Display for MixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MixError::Normalize(error) => Display::fmt(error, f),
            MixError::InvalidInput { side, input } =>
                write!(f, "{} argument {:?} is not a valid emoji or identifier", side, input),
            MixError::NotSupported { side, identifier } =>
                write!(f, "{} argument {} is not a supported emoji", side, identifier),
            MixError::NoCombination { left, right, compatible } =>
                write!(f, "there is no combination of {} and {}; {} can be combined with: {}",
                       left, right, right, compatible.iter().join(","))
        }
    }
}

impl std::error::Error for MixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MixError::Normalize(error) => Some(error),
            _ => None
        }
    }
}

impl From<NormalizeError> for MixError {
    fn from(error: NormalizeError) -> Self {
        MixError::Normalize(error)
    }
}
