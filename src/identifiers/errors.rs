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

use crate::identifiers::identifier::CanonicalIdentifier;

/// An error raised while normalizing an emoji input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The input is a known emoji, but the combination service dropped (or renumbered) it.
    /// Legacy remapping might turn it into a current identifier.
    Outdated {
        identifier: CanonicalIdentifier,
        input: String
    }
}

impl Display for NormalizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeError::Outdated { identifier, input } => write!(
                f,
                "the emoji identifier {} (from input {:?}) is outdated or not supported anymore; \
                 enable legacy remapping to convert it to a current identifier",
                identifier,
                input
            )
        }
    }
}

impl std::error::Error for NormalizeError {}
