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

use crate::identifiers::identifier::CanonicalIdentifier;
use crate::mixer::errors::MixError;
use crate::mixer::url::BASE_IMAGE_URL;
use crate::{CombinationRecord, EmojiMixer, MixData, SupportTable};

const JSON_DATA: &str = "test_files/mix/metadata.json";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn id(raw: &str) -> CanonicalIdentifier {
    CanonicalIdentifier::parse(raw).unwrap()
}

/// Fire only combines with the smiley
fn synthetic_mixer() -> EmojiMixer {
    let mut table = SupportTable::new();
    table.insert(CombinationRecord::new(id("1f525"), id("1f603"), "20230301"));
    table.insert(CombinationRecord::new(id("263a-fe0f"), id("1f603"), "20210218"));
    table.insert_key(id("1f525"));
    let supported = vec![id("1f525"), id("1f603"), id("263a-fe0f")];
    EmojiMixer::new(MixData::new(supported, table).unwrap())
}

#[test]
fn fire_and_smiley() {
    init_logging();
    let mixer = synthetic_mixer();
    let url = mixer.get_mix_url("🔥", "😃", false, false).unwrap().unwrap();
    assert_eq!(url, format!("{}/20230301/u1f525/u1f525_u1f603.png", BASE_IMAGE_URL));
    assert!(url.ends_with(".png"));
}

#[test]
fn missing_pair_lists_compatible_emojis() {
    init_logging();
    let mixer = synthetic_mixer();
    // The smiley can't be put on the left here, fire has no records
    match mixer.get_mix_url("😃", "🔥", true, false) {
        Err(error @ MixError::NoCombination { .. }) => {
            assert!(error.to_string().contains("1f525"));
        }
        other => panic!("Unexpected result: {:?}", other)
    }
    match mixer.get_mix_url("🔥", "🔥", true, false) {
        Err(MixError::NoCombination { compatible, .. }) => assert!(compatible.is_empty()),
        other => panic!("Unexpected result: {:?}", other)
    }
    match mixer.get_mix_url("1f603", "1f603", true, false) {
        Err(error) => assert!(error.to_string().contains("1f525,263a-fe0f")),
        other => panic!("Unexpected result: {:?}", other)
    }
}

#[test]
fn unsupported_emoji_is_not_checked() {
    init_logging();
    let mixer = synthetic_mixer();
    assert_eq!(mixer.check_supported("⛈", false), Ok(None));
    assert_eq!(mixer.check_supported("⛈", true), Ok(None));
}

#[test]
fn uppercase_identifiers() {
    init_logging();
    let mixer = EmojiMixer::new(MixData::from_path(JSON_DATA).unwrap());
    for identifier in mixer.data().supported_identifiers() {
        let upper = identifier.as_str().to_uppercase();
        assert_eq!(mixer.to_canonical_identifier(&upper, true),
                   mixer.to_canonical_identifier(identifier.as_str(), true));
    }
    assert_eq!(mixer.to_canonical_identifier("1F600", false), Ok(Some(id("1f600"))));
}

#[test]
fn identifiers_with_combinations_normalize_to_themselves() {
    init_logging();
    let mixer = EmojiMixer::new(MixData::from_path(JSON_DATA).unwrap());
    let data = mixer.data();
    let normalized = data.supported_identifiers().iter()
        .filter(|identifier| data.support_table().contains(identifier))
        // 263a would find 263a-fe0f first
        .filter(|identifier| data.find_by_prefix(identifier) == Some(*identifier));
    for identifier in normalized {
        assert_eq!(mixer.to_canonical_identifier(identifier.as_str(), false), Ok(Some(identifier.clone())));
    }
}

#[test]
fn repeated_calls() {
    init_logging();
    let mixer = EmojiMixer::new(MixData::from_path(JSON_DATA).unwrap());
    let pairs = [("🔥", "😃"), ("😃", "🔥"), ("1f600", "1f603"), ("fire", "🔥"), ("1f525", "263a")];
    for (left, right) in pairs.iter() {
        let first = mixer.get_mix_url(left, right, false, false);
        for _ in 0..3 {
            assert_eq!(mixer.get_mix_url(left, right, false, false), first);
        }
    }
}
