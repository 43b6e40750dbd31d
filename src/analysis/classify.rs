//! Workflow classification.
//!
//! Forms (`isPage` workflows) never reach this function; the resolver
//! counts them under the form scan. Everything else classifies into one of
//! the four [`FlowClass`] values.

use super::kinds::FlowClass;
use crate::model::ModelWorkflow;

/// Classify a non-page workflow.
///
/// Priority order: the `isDynaFlow` flag wins over `isDynaFlowTask`,
/// which wins over init-suffix naming. A dyna-flow named `...InitReport`
/// is still a dyna-flow.
pub fn classify_flow(workflow: &ModelWorkflow) -> FlowClass {
    if workflow.is_dyna_flow() {
        FlowClass::DynaFlow
    } else if workflow.is_dyna_flow_task() {
        FlowClass::DynaFlowTask
    } else if workflow
        .name
        .as_deref()
        .is_some_and(has_page_init_suffix)
    {
        FlowClass::PageInit
    } else {
        FlowClass::General
    }
}

/// Page-init flows are recognized by name suffix, case-insensitively.
fn has_page_init_suffix(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with("initreport") || lower.ends_with("initobjwf")
}
