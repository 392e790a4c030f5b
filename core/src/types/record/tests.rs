use super::*;

fn make_id(s: &str) -> RecordId {
    RecordId::try_from(s).unwrap()
}

#[test]
fn record_id_normal_usage() {
    let id = make_id("abc123");
    assert_eq!(id.as_str(), "abc123");
}

#[test]
fn record_id_is_trimmed() {
    let id = make_id("  abc  ");
    assert_eq!(id.as_str(), "abc");
}

#[test]
fn record_id_rejects_empty_string() {
    RecordId::try_from("").unwrap_err();
}

#[test]
fn record_id_rejects_whitespace_string() {
    RecordId::try_from("   ").unwrap_err();
}

#[test]
fn record_builder_sets_fields() {
    let record = Record::new(make_id("1"), "GitHub", "LOGIN").with_tags(["dev", "work"]);

    assert_eq!(record.id().as_str(), "1");
    assert_eq!(record.title(), "GitHub");
    assert_eq!(record.category(), "LOGIN");
    assert_eq!(record.tags(), ["dev".to_string(), "work".to_string()]);
}

#[test]
fn record_try_new_accepts_valid_id() {
    let record = Record::try_new(" 7 ", "GitHub", "LOGIN").unwrap();

    assert_eq!(record, Record::new(make_id("7"), "GitHub", "LOGIN"));
}

#[test]
fn record_try_new_rejects_blank_id() {
    let err = Record::try_new("  ", "GitHub", "LOGIN").unwrap_err();

    assert!(matches!(
        err,
        crate::Error::Validation(crate::ValidationError::InvalidRecordId(_))
    ));
    assert!(err.to_string().starts_with("validation error: invalid record id"));
}

mod decode {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"{
            "id": "q3x",
            "title": "GitHub",
            "version": 4,
            "vault": {"id": "v1", "name": "Private"},
            "category": "LOGIN",
            "last_edited_by": "someone",
            "created_at": "2022-09-16T23:14:55Z",
            "updated_at": "2022-09-16T23:14:55Z",
            "urls": [{"label": "website", "primary": true, "href": "https://github.com"}]
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record, Record::new(make_id("q3x"), "GitHub", "LOGIN"));
    }

    #[test]
    fn test_decode_tags() {
        let json = r#"{"id": "1", "title": "AWS", "category": "LOGIN", "tags": ["cloud", "work"]}"#;

        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.tags(), ["cloud".to_string(), "work".to_string()]);
    }

    #[test]
    fn test_decode_null_tags_as_empty() {
        let json = r#"{"id": "1", "title": "AWS", "category": "LOGIN", "tags": null}"#;

        let record: Record = serde_json::from_str(json).unwrap();

        assert!(record.tags().is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_title() {
        let json = r#"{"id": "1", "category": "LOGIN"}"#;

        serde_json::from_str::<Record>(json).unwrap_err();
    }

    #[test]
    fn test_decode_rejects_empty_id() {
        let json = r#"{"id": "  ", "title": "AWS", "category": "LOGIN"}"#;

        serde_json::from_str::<Record>(json).unwrap_err();
    }

    #[test]
    fn test_encode_skips_empty_tags() {
        let record = Record::new(make_id("1"), "AWS", "LOGIN");

        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("tags").is_none());
        assert_eq!(json["title"], "AWS");
    }
}
