//! Entity reference resolution.
//!
//! Given a target data-object name and a model snapshot, enumerate every
//! structural reference to that entity across forms, reports, non-page
//! workflows, and free-text user stories. The four scan stages run in a
//! fixed order and append to one output list; within a stage, emission
//! follows model order, so results are deterministic for a fixed model.
//!
//! Malformed containers never abort a pass. The offending element is
//! skipped, the condition is logged, and a [`ScanWarning`] is recorded on
//! the result so callers (and tests) can inspect exactly what degraded.

use std::fmt;

use tracing::{debug, warn};

use super::classify::classify_flow;
use super::kinds::{ItemKind, ReferenceKind};
use super::story::{extract_candidate_names, is_name_match};
use crate::model::{LenientList, ModelQuery, SourceCarrier};

/// Placeholder for members that carry no name; `referenced_by` is never
/// empty.
const UNNAMED: &str = "(unnamed)";

/// One discovered usage of a target entity by another model construct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// What kind of reference this is.
    pub kind: ReferenceKind,
    /// The referencing item's identity: a form/report/workflow name,
    /// optionally suffixed with the member name, or a full story text.
    pub referenced_by: String,
}

impl Reference {
    /// Create a reference.
    pub fn new(kind: ReferenceKind, referenced_by: impl Into<String>) -> Self {
        Self {
            kind,
            referenced_by: referenced_by.into(),
        }
    }

    /// The kind of model item this reference was found in.
    pub fn item_kind(&self) -> ItemKind {
        self.kind.item_kind()
    }
}

/// The scan stage a warning originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanStage {
    Forms,
    Reports,
    Flows,
    UserStories,
}

impl fmt::Display for ScanStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanStage::Forms => "forms",
            ScanStage::Reports => "reports",
            ScanStage::Flows => "flows",
            ScanStage::UserStories => "user stories",
        })
    }
}

/// A non-fatal condition encountered during a resolution pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanWarning {
    /// The stage that degraded.
    pub stage: ScanStage,
    /// The container the condition was found in, when known.
    pub item: Option<String>,
    /// What was wrong.
    pub message: String,
}

impl ScanWarning {
    fn new(stage: ScanStage, item: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            stage,
            item: item.map(str::to_string),
            message: message.into(),
        }
    }
}

/// Result of a resolution pass: the references found plus any non-fatal
/// warnings from skipped malformed containers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceResult {
    /// All references found, in stage order then model order.
    pub references: Vec<Reference>,
    /// Malformed-container conditions encountered along the way.
    pub warnings: Vec<ScanWarning>,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    fn push(&mut self, kind: ReferenceKind, referenced_by: impl Into<String>) {
        self.references.push(Reference::new(kind, referenced_by));
    }

    fn warn(&mut self, stage: ScanStage, item: Option<&str>, message: impl Into<String>) {
        let warning = ScanWarning::new(stage, item, message);
        warn!(
            stage = %warning.stage,
            item = warning.item.as_deref().unwrap_or("(unknown)"),
            "{}",
            warning.message
        );
        self.warnings.push(warning);
    }
}

/// Find all structural references to the named entity.
///
/// Matching against stored names is exact and case-sensitive; only the
/// user-story stage applies fuzzy matching. An empty or unknown target
/// yields an empty result, never an error. The model is not mutated and
/// no state is kept across calls, so concurrent passes over one snapshot
/// are safe.
pub fn find_references(query: &ModelQuery<'_>, target_name: &str) -> ReferenceResult {
    let mut result = ReferenceResult::empty();
    if target_name.is_empty() {
        return result;
    }

    scan_forms(query, target_name, &mut result);
    scan_reports(query, target_name, &mut result);
    scan_flows(query, target_name, &mut result);
    scan_user_stories(query, target_name, &mut result);

    debug!(
        target = target_name,
        references = result.references.len(),
        warnings = result.warnings.len(),
        "reference resolution complete"
    );
    result
}

/// Stage 1: forms (page workflows) — ownership, target object, and
/// parameter/output-variable sources.
fn scan_forms(query: &ModelQuery<'_>, target: &str, out: &mut ReferenceResult) {
    for_each_object(query, ScanStage::Forms, out, |object, out| {
        let owner_name = object.name.as_deref();
        let Some(workflows) = object.object_workflow.as_slice() else {
            out.warn(
                ScanStage::Forms,
                owner_name,
                "workflow collection is not a list",
            );
            return;
        };
        for form in workflows.iter().filter(|wf| wf.is_page()) {
            let Some(form_name) = form.name.as_deref().filter(|n| !n.is_empty()) else {
                out.warn(ScanStage::Forms, owner_name, "page workflow has no name");
                continue;
            };
            if owner_name == Some(target) {
                out.push(ReferenceKind::FormOwner, form_name);
            }
            if form.target_child_object.as_deref() == Some(target) {
                out.push(ReferenceKind::FormTarget, form_name);
            }
            scan_members(
                &form.object_workflow_param,
                form_name,
                target,
                ReferenceKind::FormInputControlSource,
                ScanStage::Forms,
                "input parameter",
                out,
            );
            scan_members(
                &form.object_workflow_output_var,
                form_name,
                target,
                ReferenceKind::FormOutputVariableSource,
                ScanStage::Forms,
                "output variable",
                out,
            );
        }
    });
}

/// Stage 2: reports — ownership, target object, and column sources.
fn scan_reports(query: &ModelQuery<'_>, target: &str, out: &mut ReferenceResult) {
    for_each_object(query, ScanStage::Reports, out, |object, out| {
        let owner_name = object.name.as_deref();
        let Some(reports) = object.report.as_slice() else {
            out.warn(
                ScanStage::Reports,
                owner_name,
                "report collection is not a list",
            );
            return;
        };
        for report in reports {
            let Some(report_name) = report.name.as_deref().filter(|n| !n.is_empty()) else {
                out.warn(ScanStage::Reports, owner_name, "report has no name");
                continue;
            };
            if owner_name == Some(target) {
                out.push(ReferenceKind::ReportOwner, report_name);
            }
            if report.target_child_object.as_deref() == Some(target) {
                out.push(ReferenceKind::ReportTarget, report_name);
            }
            scan_members(
                &report.report_column,
                report_name,
                target,
                ReferenceKind::ReportColumnSource,
                ScanStage::Reports,
                "column",
                out,
            );
        }
    });
}

/// Stage 3: non-page workflows — classified ownership and parameter/
/// output-variable sources.
///
/// Page workflows are excluded here: a form and its underlying workflow
/// record are the same entity, and stage 1 already counted it.
fn scan_flows(query: &ModelQuery<'_>, target: &str, out: &mut ReferenceResult) {
    for_each_object(query, ScanStage::Flows, out, |object, out| {
        let owner_name = object.name.as_deref();
        let Some(workflows) = object.object_workflow.as_slice() else {
            out.warn(
                ScanStage::Flows,
                owner_name,
                "workflow collection is not a list",
            );
            return;
        };
        for flow in workflows.iter().filter(|wf| !wf.is_page()) {
            let Some(flow_name) = flow.name.as_deref().filter(|n| !n.is_empty()) else {
                out.warn(ScanStage::Flows, owner_name, "workflow has no name");
                continue;
            };
            let class = classify_flow(flow);
            if owner_name == Some(target) {
                out.push(ReferenceKind::FlowOwner(class), flow_name);
            }
            // Parameter and output-variable sources fire independently of
            // ownership: a workflow owned by A may draw from B.
            scan_members(
                &flow.object_workflow_param,
                flow_name,
                target,
                ReferenceKind::FlowInputParameterSource(class),
                ScanStage::Flows,
                "input parameter",
                out,
            );
            scan_members(
                &flow.object_workflow_output_var,
                flow_name,
                target,
                ReferenceKind::FlowOutputVariableSource(class),
                ScanStage::Flows,
                "output variable",
                out,
            );
        }
    });
}

/// Stage 4: user stories — fuzzy free-text matching.
fn scan_user_stories(query: &ModelQuery<'_>, target: &str, out: &mut ReferenceResult) {
    for namespace in query.namespaces() {
        let Some(stories) = namespace.user_story.as_slice() else {
            out.warn(
                ScanStage::UserStories,
                namespace.name.as_deref(),
                "user story collection is not a list",
            );
            continue;
        };
        for story in stories {
            let Some(text) = story.text() else {
                continue;
            };
            let candidates = extract_candidate_names(text);
            if candidates.iter().any(|c| is_name_match(c, target)) {
                out.push(ReferenceKind::UserStory, text);
            }
        }
    }
}

/// Walk every data object, reporting namespace-level malformation to the
/// calling stage.
fn for_each_object<F>(
    query: &ModelQuery<'_>,
    stage: ScanStage,
    out: &mut ReferenceResult,
    mut visit: F,
) where
    F: FnMut(&crate::model::DataObject, &mut ReferenceResult),
{
    for namespace in query.namespaces() {
        let Some(objects) = namespace.object.as_slice() else {
            out.warn(
                stage,
                namespace.name.as_deref(),
                "object collection is not a list",
            );
            continue;
        };
        for object in objects {
            visit(object, out);
        }
    }
}

/// Scan one member list (parameters, output variables, or columns) for
/// source-object matches, emitting `"<container> / <member>"` references.
fn scan_members<T: SourceCarrier>(
    list: &LenientList<T>,
    container_name: &str,
    target: &str,
    kind: ReferenceKind,
    stage: ScanStage,
    member_desc: &str,
    out: &mut ReferenceResult,
) {
    let Some(members) = list.as_slice() else {
        out.warn(
            stage,
            Some(container_name),
            format!("{member_desc} collection is not a list"),
        );
        return;
    };
    for member in members {
        if member.source_object() == Some(target) {
            let member_name = member
                .member_name()
                .filter(|n| !n.is_empty())
                .unwrap_or(UNNAMED);
            out.push(kind, format!("{container_name} / {member_name}"));
        }
    }
}
