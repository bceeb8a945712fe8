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
//! The combination data the mixer works on.
//!
//! None of this is computed here: the list of supported identifiers and the table of published
//! combinations are supplied from the outside (usually a metadata file of the image service)
//! and stay untouched once loaded.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::identifiers::identifier::CanonicalIdentifier;
use crate::tables::deserialize::DataFormat;
use crate::tables::errors::TableError;

/// One published combination of two emojis.
///
/// `(left, right)` and `(right, left)` are the same combination, but the fields keep the
/// orientation the service published them in, as that is what the image URL is made of.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombinationRecord {
    pub left_identifier: CanonicalIdentifier,
    pub right_identifier: CanonicalIdentifier,
    /// `YYYYMMDD`
    pub date: String,
}

impl CombinationRecord {
    pub fn new(left_identifier: CanonicalIdentifier, right_identifier: CanonicalIdentifier, date: &str) -> Self {
        Self {
            left_identifier,
            right_identifier,
            date: date.to_owned(),
        }
    }

    /// Checks whether this record combines `first` and `second`, in either orientation
    pub fn combines(&self, first: &CanonicalIdentifier, second: &CanonicalIdentifier) -> bool {
        (self.left_identifier == *first && self.right_identifier == *second)
            || (self.left_identifier == *second && self.right_identifier == *first)
    }

    fn has_valid_date(&self) -> bool {
        self.date.len() == 8 && self.date.bytes().all(|byte| byte.is_ascii_digit())
    }
}

/// Maps an identifier to all records that have it as their right-hand identifier.
/// The order of the records for each identifier is kept as inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SupportTable {
    records: HashMap<CanonicalIdentifier, Vec<CombinationRecord>>,
}

impl SupportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a record under its right-hand identifier (after all other records for it)
    /// # Examples
    /// ```
    /// use emoji_mix::{CanonicalIdentifier, CombinationRecord, SupportTable};
    ///
    /// let fire = CanonicalIdentifier::parse("1f525").unwrap();
    /// let smiley = CanonicalIdentifier::parse("1f603").unwrap();
    ///
    /// let mut table = SupportTable::new();
    /// table.insert(CombinationRecord::new(fire.clone(), smiley.clone(), "20230301"));
    ///
    /// assert!(table.contains(&smiley));
    /// assert!(!table.contains(&fire));
    /// assert_eq!(table.compatible_with(&smiley), vec![&fire]);
    /// ```
    pub fn insert(&mut self, record: CombinationRecord) {
        self.records.entry(record.right_identifier.clone())
            .or_insert_with(Vec::new)
            .push(record);
    }

    /// Adds an identifier without any records
    pub fn insert_key(&mut self, identifier: CanonicalIdentifier) {
        self.records.entry(identifier).or_insert_with(Vec::new);
    }

    fn file_under(&mut self, key: CanonicalIdentifier, records: Vec<CombinationRecord>) {
        self.records.entry(key)
            .or_insert_with(Vec::new)
            .extend(records);
    }

    /// All records filed under `identifier`
    pub fn get(&self, identifier: &CanonicalIdentifier) -> Option<&[CombinationRecord]> {
        self.records.get(identifier).map(Vec::as_slice)
    }

    /// Whether `identifier` takes part in combinations at all
    pub fn contains(&self, identifier: &CanonicalIdentifier) -> bool {
        self.records.contains_key(identifier)
    }

    /// The left-hand identifiers of all records filed under `right`, in table order.
    /// Empty if `right` isn't in the table.
    pub fn compatible_with(&self, right: &CanonicalIdentifier) -> Vec<&CanonicalIdentifier> {
        self.get(right)
            .unwrap_or_default()
            .iter()
            .map(|record| &record.left_identifier)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item=(&CanonicalIdentifier, &[CombinationRecord])> {
        self.records.iter().map(|(identifier, records)| (identifier, records.as_slice()))
    }

    /// Returns the number of identifiers in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<HashMap<CanonicalIdentifier, Vec<CombinationRecord>>> for SupportTable {
    fn from(records: HashMap<CanonicalIdentifier, Vec<CombinationRecord>>) -> Self {
        Self { records }
    }
}

impl AsRef<HashMap<CanonicalIdentifier, Vec<CombinationRecord>>> for SupportTable {
    fn as_ref(&self) -> &HashMap<CanonicalIdentifier, Vec<CombinationRecord>> {
        &self.records
    }
}

/// The complete data set: which identifiers the service knows and which combinations exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MixData {
    supported_identifiers: Vec<CanonicalIdentifier>,
    support_table: SupportTable,
}

#[derive(Deserialize, Clone, Debug)]
struct RecordPrototype {
    #[serde(alias = "leftIdentifier")]
    left_identifier: String,
    #[serde(alias = "rightIdentifier")]
    right_identifier: String,
    date: String,
}

#[derive(Deserialize, Clone, Debug)]
struct MixDataPrototype {
    #[serde(alias = "supportedIdentifiers", default)]
    supported_identifiers: Vec<String>,
    #[serde(alias = "supportTable", default)]
    support_table: HashMap<String, Vec<RecordPrototype>>,
}

impl MixData {
    /// Bundles the supported identifiers (whose order is kept, as normalization takes the first
    /// prefix match) with a support table.
    ///
    /// Fails if a record's date is not in the `YYYYMMDD` form.
    pub fn new(supported_identifiers: Vec<CanonicalIdentifier>, support_table: SupportTable) -> Result<Self, TableError> {
        for (key, records) in support_table.iter() {
            for record in records {
                if !record.has_valid_date() {
                    return Err(TableError::InvalidDate {
                        left: record.left_identifier.to_string(),
                        right: record.right_identifier.to_string(),
                        date: record.date.clone(),
                    });
                }
                if record.right_identifier != *key {
                    warn!("Combination {} + {} is filed under {}",
                          record.left_identifier, record.right_identifier, key);
                }
            }
        }
        Ok(Self {
            supported_identifiers,
            support_table,
        })
    }

    /// Loads the data from a JSON or YAML file; the format is picked by the file extension,
    /// defaulting to JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let format = DataFormat::for_file(path).unwrap_or_default();
        let reader = BufReader::new(File::open(path)?);
        let data = Self::from_reader(reader, format)?;
        info!("Loaded {} supported emojis and {} combination keys from {}",
              data.supported_identifiers.len(), data.support_table.len(), path.display());
        Ok(data)
    }

    /// Reads data in the JSON format, i.e.
    /// ```
    /// use emoji_mix::{CanonicalIdentifier, MixData};
    ///
    /// let json = r#"{
    ///     "supported_identifiers": ["1f525", "1f603"],
    ///     "support_table": {
    ///         "1f603": [{"left_identifier": "1f525", "right_identifier": "1f603", "date": "20230301"}]
    ///     }
    /// }"#;
    /// let data = MixData::from_reader_json(json.as_bytes()).unwrap();
    ///
    /// let smiley = CanonicalIdentifier::parse("1f603").unwrap();
    /// assert_eq!(data.supported_identifiers().len(), 2);
    /// assert_eq!(data.support_table().get(&smiley).unwrap()[0].date, "20230301");
    /// ```
    pub fn from_reader_json<R: Read>(reader: R) -> Result<Self, TableError> {
        Self::from_reader(reader, DataFormat::Json)
    }

    /// Reads data in the YAML format (same structure as for JSON)
    pub fn from_reader_yaml<R: Read>(reader: R) -> Result<Self, TableError> {
        Self::from_reader(reader, DataFormat::Yaml)
    }

    pub fn from_reader<R: Read>(reader: R, format: DataFormat) -> Result<Self, TableError> {
        let prototype: MixDataPrototype = format.deserialize(reader)?;
        Self::from_prototype(prototype)
    }

    fn from_prototype(prototype: MixDataPrototype) -> Result<Self, TableError> {
        let supported_identifiers = prototype.supported_identifiers.iter()
            .map(|identifier| parse_identifier(identifier))
            .collect::<Result<Vec<_>, _>>()?;

        let mut support_table = SupportTable::new();
        // Keys are sorted so that loading stays deterministic (and so do the logs)
        for (key, records) in prototype.support_table.into_iter().sorted_by(|(a, _), (b, _)| a.cmp(b)) {
            let key = parse_identifier(&key)?;
            let records = records.into_iter()
                .map(|record| Ok(CombinationRecord::new(
                    parse_identifier(&record.left_identifier)?,
                    parse_identifier(&record.right_identifier)?,
                    &record.date,
                )))
                .collect::<Result<Vec<_>, TableError>>()?;
            // Records stay under the key they were listed with
            support_table.file_under(key, records);
        }
        Self::new(supported_identifiers, support_table)
    }

    /// All identifiers the service knows, in the order they were supplied
    pub fn supported_identifiers(&self) -> &[CanonicalIdentifier] {
        &self.supported_identifiers
    }

    pub fn support_table(&self) -> &SupportTable {
        &self.support_table
    }

    /// Membership check in the list of supported identifiers
    pub fn is_supported(&self, identifier: &CanonicalIdentifier) -> bool {
        self.supported_identifiers.contains(identifier)
    }

    /// The first supported identifier that starts with `candidate`.
    /// This is a plain string prefix check, so `263a` also finds `263a-fe0f`.
    pub fn find_by_prefix(&self, candidate: &CanonicalIdentifier) -> Option<&CanonicalIdentifier> {
        self.supported_identifiers.iter()
            .find(|identifier| identifier.starts_with(candidate))
    }
}

fn parse_identifier(raw: &str) -> Result<CanonicalIdentifier, TableError> {
    CanonicalIdentifier::parse(raw)
        .ok_or_else(|| TableError::InvalidIdentifier(raw.to_owned()))
}
