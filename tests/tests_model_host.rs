//! Integration tests for model loading and the query snapshot.

mod helpers;

use std::io::Write;

use appdna::{ModelError, ModelHost};
use helpers::{FIXTURE_JSON, fixture_host};

#[test]
fn test_load_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE_JSON.as_bytes()).unwrap();

    let mut host = ModelHost::new();
    host.load_file(file.path()).unwrap();

    assert!(host.is_loaded());
    assert_eq!(host.file_path(), Some(file.path()));
    assert_eq!(host.object_count(), 3);
}

#[test]
fn test_load_file_missing_path_is_io_error() {
    let mut host = ModelHost::new();
    let err = host.load_file("/nonexistent/app-dna.json").unwrap_err();
    assert!(matches!(err, ModelError::Io(_)));
    assert!(!host.is_loaded());
}

#[test]
fn test_load_file_bad_json_mentions_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ definitely not json").unwrap();

    let mut host = ModelHost::new();
    let err = host.load_file(file.path()).unwrap_err();
    match err {
        ModelError::Json(message) => {
            assert!(message.contains(&file.path().display().to_string()));
        }
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[test]
fn test_query_contract_on_fixture() {
    let host = fixture_host();
    let query = host.query();

    assert_eq!(query.all_objects().count(), 3);
    assert_eq!(query.all_page_workflows().count(), 2);
    assert_eq!(query.all_reports().count(), 1);
    assert_eq!(query.all_user_stories().count(), 2);

    let owner = query.form_owner_object("CustomerAdd").unwrap();
    assert_eq!(owner.name.as_deref(), Some("Customer"));
    let owner = query.report_owner_object("CustomerInvoiceList").unwrap();
    assert_eq!(owner.name.as_deref(), Some("Customer"));

    // Non-page workflows are not forms.
    assert!(query.form_owner_object("CustomerBatchSync").is_none());
    assert!(query.object_by_name("Land").is_some());
}

#[test]
fn test_legacy_source_object_field_is_visible_through_types() {
    use appdna::model::SourceCarrier;

    let host = fixture_host();
    let query = host.query();
    let (_, flow) = query
        .flows_with_owner()
        .find(|(_, wf)| wf.name.as_deref() == Some("CustomerBatchSync"))
        .unwrap();
    let params = flow.object_workflow_param.as_slice().unwrap();
    assert_eq!(params[0].source_object(), Some("Invoice"));
}
