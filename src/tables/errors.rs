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

use crate::tables::deserialize::SerdeError;

/// An error that occurs while loading combination data
#[derive(Debug)]
pub enum TableError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// The data file could not be parsed
    Serde(SerdeError),
    /// A string in the data is not a valid emoji identifier
    InvalidIdentifier(String),
    /// A combination record's date is not in the `YYYYMMDD` form
    InvalidDate {
        left: String,
        right: String,
        date: String
    }
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Io(error) => Display::fmt(error, f),
            TableError::Serde(error) => Display::fmt(error, f),
            TableError::InvalidIdentifier(identifier) =>
                write!(f, "not a valid emoji identifier: {:?}", identifier),
            TableError::InvalidDate { left, right, date } =>
                write!(f, "invalid date {:?} for the combination of {} and {} (expected YYYYMMDD)",
                       date, left, right)
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(error) => Some(error),
            TableError::Serde(error) => Some(error),
            _ => None
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err)
    }
}

impl From<SerdeError> for TableError {
    fn from(err: SerdeError) -> Self {
        TableError::Serde(err)
    }
}
