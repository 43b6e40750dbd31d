//! Integration tests for the entity reference resolver.

mod helpers;

use appdna::{FlowClass, ItemKind, ReferenceKind, ScanStage, find_references};
use helpers::{fixture_host, host_from};

#[test]
fn test_form_ownership_and_parameter_source_are_both_found() {
    let host = fixture_host();
    let query = host.query();

    // The owner object of the form.
    let result = find_references(&query, "Customer");
    assert!(
        result
            .references
            .iter()
            .any(|r| r.kind == ReferenceKind::FormOwner && r.referenced_by == "CustomerAdd")
    );

    // The object a form input parameter draws from.
    let result = find_references(&query, "Land");
    let param_ref = result
        .references
        .iter()
        .find(|r| r.kind == ReferenceKind::FormInputControlSource)
        .expect("parameter source reference");
    assert!(param_ref.referenced_by.contains("CustomerAdd"));
    assert!(param_ref.referenced_by.contains("landCode"));
}

#[test]
fn test_forms_are_not_double_counted_as_flows() {
    let host = fixture_host();
    let result = find_references(&host.query(), "Customer");

    // The page workflow appears exactly once, under the form kind.
    let form_owner_count = result
        .references
        .iter()
        .filter(|r| r.referenced_by == "CustomerAdd" && r.kind == ReferenceKind::FormOwner)
        .count();
    assert_eq!(form_owner_count, 1);

    assert!(
        !result
            .references
            .iter()
            .any(|r| matches!(r.kind, ReferenceKind::FlowOwner(_))
                && r.referenced_by == "CustomerAdd"),
        "page workflow leaked into the flow scan"
    );
}

#[test]
fn test_flow_classification_in_results() {
    let host = fixture_host();
    let result = find_references(&host.query(), "Customer");

    let flow_kinds: Vec<ReferenceKind> = result
        .references
        .iter()
        .filter(|r| r.item_kind() == ItemKind::Flow)
        .map(|r| r.kind)
        .collect();
    assert_eq!(
        flow_kinds,
        vec![
            ReferenceKind::FlowOwner(FlowClass::PageInit),
            ReferenceKind::FlowOwner(FlowClass::DynaFlow),
            ReferenceKind::FlowOwner(FlowClass::DynaFlowTask),
        ]
    );
}

#[test]
fn test_dyna_flow_flag_beats_init_suffix() {
    let host = host_from(
        r#"{"namespace": [{"object": [
            {"name": "Customer", "objectWorkflow": [
                {"name": "CustomerListInitReport", "isDynaFlow": "true"}
            ]}
        ]}]}"#,
    );
    let result = find_references(&host.query(), "Customer");
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.references[0].kind,
        ReferenceKind::FlowOwner(FlowClass::DynaFlow)
    );
    assert_eq!(result.references[0].kind.label(), "Workflow Owner Object");
}

#[test]
fn test_form_target_object() {
    let host = host_from(
        r#"{"namespace": [{"object": [
            {"name": "Order", "objectWorkflow": [
                {"name": "OrderLineAdd", "isPage": "true",
                 "targetChildObject": "OrderLine"}
            ]},
            {"name": "OrderLine"}
        ]}]}"#,
    );
    let result = find_references(&host.query(), "OrderLine");
    assert_eq!(result.len(), 1);
    assert_eq!(result.references[0].kind, ReferenceKind::FormTarget);
    assert_eq!(result.references[0].referenced_by, "OrderLineAdd");
}

#[test]
fn test_parameter_source_fires_independently_of_ownership() {
    let host = fixture_host();
    let result = find_references(&host.query(), "Invoice");

    // CustomerBatchSync is owned by Customer but draws a parameter from
    // Invoice through the legacy fKObjectName field.
    let param_ref = result
        .references
        .iter()
        .find(|r| r.kind == ReferenceKind::FlowInputParameterSource(FlowClass::DynaFlow))
        .expect("cross-object parameter source");
    assert_eq!(param_ref.referenced_by, "CustomerBatchSync / invoiceRef");
}

#[test]
fn test_report_target_and_column_sources() {
    let host = fixture_host();
    let result = find_references(&host.query(), "Invoice");

    assert!(
        result
            .references
            .iter()
            .any(|r| r.kind == ReferenceKind::ReportTarget
                && r.referenced_by == "CustomerInvoiceList")
    );
    assert!(
        result
            .references
            .iter()
            .any(|r| r.kind == ReferenceKind::ReportColumnSource
                && r.referenced_by == "CustomerInvoiceList / invoiceTotal")
    );
}

#[test]
fn test_resolution_is_idempotent_and_order_stable() {
    let host = fixture_host();
    let query = host.query();
    let first = find_references(&query, "Customer");
    let second = find_references(&query, "Customer");
    assert_eq!(first, second);

    // Stage order: forms, then reports, then flows, then stories.
    let kinds: Vec<ItemKind> = first.references.iter().map(|r| r.item_kind()).collect();
    let mut sorted_by_stage = kinds.clone();
    sorted_by_stage.sort_by_key(|k| match k {
        ItemKind::Form => 0,
        ItemKind::Report => 1,
        ItemKind::Flow => 2,
        ItemKind::UserStory => 3,
        ItemKind::DataObject => 4,
    });
    assert_eq!(kinds, sorted_by_stage);
}

#[test]
fn test_unknown_target_yields_empty_result() {
    let host = fixture_host();
    let result = find_references(&host.query(), "NoSuchObject");
    assert!(result.is_empty());
    assert_eq!(result.len(), 0);
}

#[test]
fn test_user_story_reference_carries_full_story_text() {
    let host = fixture_host();
    let result = find_references(&host.query(), "Invoice");
    let story_ref = result
        .references
        .iter()
        .find(|r| r.kind == ReferenceKind::UserStory)
        .expect("story reference");
    assert_eq!(
        story_ref.referenced_by,
        "As a Manager, I want to view all Invoices"
    );
}

#[test]
fn test_malformed_report_columns_degrade_locally() {
    let host = host_from(
        r#"{"namespace": [{"object": [
            {"name": "Customer",
             "objectWorkflow": [
                {"name": "CustomerAdd", "isPage": "true",
                 "objectWorkflowParam": [{"name": "landCode", "sourceObjectName": "Land"}]}
             ],
             "report": [
                {"name": "BrokenReport", "reportColumn": "not-a-list"},
                {"name": "GoodReport", "reportColumn": [
                    {"name": "landName", "sourceObjectName": "Land"}
                ]}
             ]}
        ]}]}"#,
    );
    let result = find_references(&host.query(), "Land");

    // References elsewhere are unaffected.
    assert!(
        result
            .references
            .iter()
            .any(|r| r.kind == ReferenceKind::FormInputControlSource)
    );
    assert!(
        result
            .references
            .iter()
            .any(|r| r.kind == ReferenceKind::ReportColumnSource
                && r.referenced_by == "GoodReport / landName")
    );

    // The malformed report contributes no column references, and the
    // degradation is inspectable.
    assert!(
        !result
            .references
            .iter()
            .any(|r| r.referenced_by.starts_with("BrokenReport /"))
    );
    let warning = result
        .warnings
        .iter()
        .find(|w| w.stage == ScanStage::Reports)
        .expect("report-stage warning");
    assert_eq!(warning.item.as_deref(), Some("BrokenReport"));
}

#[test]
fn test_malformed_workflow_collection_warns_in_both_consuming_stages() {
    let host = host_from(
        r#"{"namespace": [{"object": [
            {"name": "Customer", "objectWorkflow": {"name": "oops"}},
            {"name": "Invoice", "objectWorkflow": [
                {"name": "InvoiceUpdate", "isPage": "true"}
            ]}
        ]}]}"#,
    );
    let result = find_references(&host.query(), "Invoice");

    // The healthy object still resolves.
    assert!(
        result
            .references
            .iter()
            .any(|r| r.kind == ReferenceKind::FormOwner && r.referenced_by == "InvoiceUpdate")
    );

    // Both the form scan and the flow scan consume workflow collections,
    // so each reports its own degradation.
    let stages: Vec<ScanStage> = result.warnings.iter().map(|w| w.stage).collect();
    assert!(stages.contains(&ScanStage::Forms));
    assert!(stages.contains(&ScanStage::Flows));
}
