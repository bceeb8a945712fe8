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
//! Formatting of image URLs.
//!
//! The image host expects
//! `{base}/{date}/{left}/{left}_{right}.png`
//! with every identifier written as `u`-prefixed hex groups (`u1fa84-ufe0f`).

use itertools::Itertools;

use crate::tables::mix_data::CombinationRecord;

/// Where the combined images are hosted
pub const BASE_IMAGE_URL: &str = "https://www.gstatic.com/android/keyboard/emojikitchen";

/// Converts an identifier to the form used in image paths
/// ```
/// use emoji_mix::mixer::url::build_identifier_url_part;
///
/// assert_eq!(build_identifier_url_part("1FA84-fe0f"), "u1fa84-ufe0f");
/// assert_eq!(build_identifier_url_part("1f525"), "u1f525");
/// ```
pub fn build_identifier_url_part(identifier: &str) -> String {
    identifier.split('-')
        .map(|group| format!("u{}", group.to_lowercase()))
        .join("-")
}

/// Builds the URL of the image for a combination.
/// The left identifier appears twice: once as the directory and once in the file name.
/// ```
/// use emoji_mix::{BASE_IMAGE_URL, CanonicalIdentifier, CombinationRecord};
/// use emoji_mix::mixer::url::build_image_url;
///
/// let record = CombinationRecord::new(
///     CanonicalIdentifier::parse("1f525").unwrap(),
///     CanonicalIdentifier::parse("1f603").unwrap(),
///     "20230301"
/// );
/// assert_eq!(
///     build_image_url(BASE_IMAGE_URL, &record),
///     "https://www.gstatic.com/android/keyboard/emojikitchen/20230301/u1f525/u1f525_u1f603.png"
/// );
/// ```
pub fn build_image_url(base_url: &str, record: &CombinationRecord) -> String {
    let left = build_identifier_url_part(record.left_identifier.as_str());
    let right = build_identifier_url_part(record.right_identifier.as_str());
    format!("{}/{}/{}/{}_{}.png", base_url.trim_end_matches('/'), record.date, left, left, right)
}
