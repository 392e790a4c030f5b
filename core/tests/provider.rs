use std::fs;
use tempfile::TempDir;
use vault_core::ProviderError;
use vault_core::provider::{JsonFileProvider, StaticProvider, VaultProvider, parse_records};
use vault_core::types::{Record, RecordId};

fn make_record(id: &str, title: &str, category: &str) -> Record {
    Record::new(RecordId::try_from(id).unwrap(), title, category)
}

const ITEM_LIST: &str = r#"[
    {"id": "a1", "title": "GitHub", "category": "LOGIN", "tags": ["dev"],
     "vault": {"id": "v1", "name": "Private"}, "version": 3},
    {"id": "a2", "title": "Visa", "category": "CREDIT_CARD", "tags": null},
    {"id": "a3", "title": "Home Wifi", "category": "WIRELESS_ROUTER"}
]"#;

/// Verify an item listing decodes in order, with tags optional.
#[test]
fn test_parse_records_preserves_order() {
    let records = parse_records(ITEM_LIST).unwrap();

    let titles: Vec<&str> = records.iter().map(Record::title).collect();
    assert_eq!(titles, ["GitHub", "Visa", "Home Wifi"]);
    assert_eq!(records[0].tags(), ["dev".to_string()]);
    assert!(records[1].tags().is_empty());
}

/// Verify one malformed item rejects the whole batch.
#[test]
fn test_parse_records_rejects_batch_with_defect() {
    let json = r#"[
        {"id": "a1", "title": "GitHub", "category": "LOGIN"},
        {"id": "", "title": "x", "category": "y"}
    ]"#;

    let err = parse_records(json).unwrap_err();

    assert!(matches!(err, ProviderError::Parse(_)));
}

/// Verify the file provider re-reads its export on each call.
#[test]
fn test_json_file_provider_reads_export() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("items.json");
    fs::write(&path, ITEM_LIST).unwrap();
    let provider = JsonFileProvider::new(&path);

    assert_eq!(provider.list_items().unwrap().len(), 3);

    fs::write(&path, "[]").unwrap();
    assert!(provider.list_items().unwrap().is_empty());
}

/// Verify a missing export surfaces as an IO error.
#[test]
fn test_json_file_provider_missing_file() {
    let temp = TempDir::new().unwrap();
    let provider = JsonFileProvider::new(temp.path().join("missing.json"));

    let err = provider.list_items().unwrap_err();

    assert!(matches!(err, ProviderError::Io(_)));
}

#[test]
fn test_static_provider_returns_records() {
    let records = vec![make_record("1", "GitHub", "LOGIN")];
    let provider = StaticProvider::new(records.clone());

    assert_eq!(provider.list_items().unwrap(), records);
}

/// Verify provider failures lift into the crate-wide error.
#[test]
fn test_provider_error_converts_to_crate_error() {
    fn load(provider: &dyn VaultProvider) -> vault_core::Result<usize> {
        Ok(provider.list_items()?.len())
    }

    let temp = TempDir::new().unwrap();
    let provider = JsonFileProvider::new(temp.path().join("missing.json"));

    let err = load(&provider).unwrap_err();

    assert!(matches!(err, vault_core::Error::Provider(ProviderError::Io(_))));
    assert!(err.to_string().starts_with("provider error: io error"));
}
