use std::io::Write;

use crate::identifiers::identifier::CanonicalIdentifier;
use crate::tables::deserialize::DataFormat;
use crate::tables::errors::TableError;
use crate::tables::mix_data::{CombinationRecord, MixData, SupportTable};

const JSON_DATA: &str = "test_files/mix/metadata.json";
const YAML_DATA: &str = "test_files/mix/metadata.yaml";

fn id(raw: &str) -> CanonicalIdentifier {
    CanonicalIdentifier::parse(raw).unwrap()
}

#[test]
fn load_json() {
    let data = MixData::from_path(JSON_DATA).unwrap();

    assert_eq!(data.supported_identifiers().len(), 8);
    // Order is kept as in the file
    assert_eq!(data.supported_identifiers()[2], id("263a-fe0f"));
    assert_eq!(data.supported_identifiers()[3], id("263a"));

    let table = data.support_table();
    assert_eq!(table.len(), 6);
    assert_eq!(table.get(&id("2601-fe0f")), Some(&[][..]));
    assert_eq!(table.get(&id("263a")), None);

    let smiley = table.get(&id("1f603")).unwrap();
    assert_eq!(smiley.iter().map(|record| record.date.as_str()).collect::<Vec<_>>(),
               vec!["20201001", "20230301", "20210218"]);

    // camelCase aliases
    let wand = table.get(&id("1fa84-fe0f")).unwrap();
    assert_eq!(wand[1], CombinationRecord::new(id("1fa84-fe0f"), id("1f525"), "20230301"));
}

#[test]
fn load_yaml() {
    let data = MixData::from_path(YAML_DATA).unwrap();
    let json = MixData::from_path(JSON_DATA).unwrap();

    assert_eq!(data.supported_identifiers().len(), 7);
    assert_eq!(data.support_table().get(&id("1f603")), json.support_table().get(&id("1f603")));
    assert!(!data.support_table().contains(&id("1fa84-fe0f")));
}

#[test]
fn load_unknown_extension_as_json() {
    let mut file = tempfile::Builder::new().suffix(".data").tempfile().unwrap();
    write!(file, r#"{{"supported_identifiers": ["1F525"], "support_table": {{"1F525": []}}}}"#).unwrap();
    file.flush().unwrap();

    let data = MixData::from_path(file.path()).unwrap();
    assert_eq!(data.supported_identifiers(), &[id("1f525")][..]);
    assert!(data.support_table().contains(&id("1f525")));
}

#[test]
fn load_errors() {
    let missing = MixData::from_path("test_files/mix/does-not-exist.json");
    assert!(matches!(missing, Err(TableError::Io(_))));

    let malformed = MixData::from_reader_json("{\"supported_identifiers\": 42}".as_bytes());
    assert!(matches!(malformed, Err(TableError::Serde(_))));

    let invalid_identifier = MixData::from_reader_json(r#"{"supported_identifiers": ["fire"]}"#.as_bytes());
    match invalid_identifier {
        Err(TableError::InvalidIdentifier(identifier)) => assert_eq!(identifier, "fire"),
        other => panic!("Unexpected result: {:?}", other)
    }

    let invalid_date = MixData::from_reader_yaml(r#"
support_table:
  "1f603":
    - left_identifier: "1f525"
      right_identifier: "1f603"
      date: "2023-03-01"
"#.as_bytes());
    match invalid_date {
        Err(error @ TableError::InvalidDate { .. }) => assert!(error.to_string().contains("2023-03-01")),
        other => panic!("Unexpected result: {:?}", other)
    }
}

#[test]
fn support_table_insertion_order() {
    let mut table = SupportTable::new();
    table.insert(CombinationRecord::new(id("1f525"), id("1f603"), "20230301"));
    table.insert(CombinationRecord::new(id("263a-fe0f"), id("1f603"), "20210218"));
    table.insert(CombinationRecord::new(id("1f525"), id("1f603"), "20201001"));
    table.insert_key(id("1f603"));

    assert_eq!(table.len(), 1);
    assert_eq!(table.compatible_with(&id("1f603")), vec![&id("1f525"), &id("263a-fe0f"), &id("1f525")]);
    assert!(table.compatible_with(&id("1f525")).is_empty());
}

#[test]
fn prefix_search() {
    let data = MixData::from_path(JSON_DATA).unwrap();
    assert_eq!(data.find_by_prefix(&id("263a")), Some(&id("263a-fe0f")));
    assert_eq!(data.find_by_prefix(&id("1f6")), Some(&id("1f603")));
    assert_eq!(data.find_by_prefix(&id("26c8")), None);
    assert!(data.is_supported(&id("263a")));
    assert!(!data.is_supported(&id("26c8")));
}

#[test]
fn data_formats() {
    assert_eq!(DataFormat::for_extension("JSON"), Some(DataFormat::Json));
    assert_eq!(DataFormat::for_extension("yml"), Some(DataFormat::Yaml));
    assert_eq!(DataFormat::for_extension("toml"), None);
    assert_eq!(DataFormat::default(), DataFormat::Json);
}
