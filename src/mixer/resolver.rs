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

use itertools::Itertools;

use crate::identifiers::identifier::CanonicalIdentifier;
use crate::tables::mix_data::{CombinationRecord, SupportTable};

/// Finds the most recent record combining `left` and `right` (in either orientation).
///
/// Only the records filed under `right` are searched. Records with the same date keep their
/// table order, so the first one listed wins.
/// An identifier that is not in the table at all simply has no combinations.
/// # Examples
/// ```
/// use emoji_mix::{CanonicalIdentifier, CombinationRecord, SupportTable};
/// use emoji_mix::mixer::resolver::resolve;
///
/// let fire = CanonicalIdentifier::parse("1f525").unwrap();
/// let smiley = CanonicalIdentifier::parse("1f603").unwrap();
///
/// let mut table = SupportTable::new();
/// table.insert(CombinationRecord::new(fire.clone(), smiley.clone(), "20201001"));
/// table.insert(CombinationRecord::new(fire.clone(), smiley.clone(), "20230301"));
///
/// assert_eq!(resolve(&table, &fire, &smiley).unwrap().date, "20230301");
/// assert!(resolve(&table, &smiley, &fire).is_none());
/// ```
pub fn resolve<'a>(
    table: &'a SupportTable,
    left: &CanonicalIdentifier,
    right: &CanonicalIdentifier
) -> Option<&'a CombinationRecord> {
    let records = table.get(right)?;
    let candidates = records.iter()
        .filter(|record| record.combines(left, right))
        .collect_vec();
    trace!("{} candidate(s) for {} + {}", candidates.len(), left, right);

    // sorted_by is stable
    candidates.into_iter()
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .next()
}
