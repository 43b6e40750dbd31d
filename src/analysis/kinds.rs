//! The reference-kind taxonomy.
//!
//! Historically these kinds were ad hoc strings built by concatenating a
//! computed workflow-classification label with a relationship suffix. Here
//! the full set is enumerated as enum data so the compiler checks
//! exhaustiveness, while `label()` preserves the exact historical text for
//! consumers that filter on it.

use std::fmt;

/// Classification of a non-page workflow, by priority: dyna-flow, then
/// dyna-flow task, then init-suffix naming, then general.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowClass {
    /// Flagged `isDynaFlow`.
    DynaFlow,
    /// Flagged `isDynaFlowTask`.
    DynaFlowTask,
    /// Named with an `InitReport`/`InitObjWf` suffix.
    PageInit,
    /// Everything else.
    General,
}

impl FlowClass {
    /// The historical classification label.
    pub fn label(&self) -> &'static str {
        match self {
            FlowClass::DynaFlow => "Workflow",
            FlowClass::DynaFlowTask => "Workflow Task",
            FlowClass::PageInit => "Page Init Flow",
            FlowClass::General => "General Flow",
        }
    }
}

impl fmt::Display for FlowClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The kind of model item a reference was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Form,
    Report,
    Flow,
    UserStory,
    /// A data object itself; not emitted by the resolver, but part of the
    /// taxonomy for consumers that tabulate objects alongside references.
    DataObject,
}

/// One kind of structural reference to a data object.
///
/// Labels are stable text; all form-related labels contain "Form", all
/// report-related labels contain "Report", and all flow-related labels
/// contain "flow" case-insensitively. Prefer the `is_*_related` helpers
/// over substring checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// A form's owner object is the target.
    FormOwner,
    /// A form's target child object is the target.
    FormTarget,
    /// A form input parameter draws from the target.
    FormInputControlSource,
    /// A form output variable draws from the target.
    FormOutputVariableSource,
    /// A report's owner object is the target.
    ReportOwner,
    /// A report's target child object is the target.
    ReportTarget,
    /// A report column draws from the target.
    ReportColumnSource,
    /// A non-page workflow's owner object is the target.
    FlowOwner(FlowClass),
    /// A non-page workflow input parameter draws from the target.
    FlowInputParameterSource(FlowClass),
    /// A non-page workflow output variable draws from the target.
    FlowOutputVariableSource(FlowClass),
    /// A user story sentence mentions the target.
    UserStory,
}

impl ReferenceKind {
    /// The exact historical label for this kind.
    pub fn label(&self) -> &'static str {
        use FlowClass::*;
        match self {
            ReferenceKind::FormOwner => "Form Owner Object",
            ReferenceKind::FormTarget => "Form Target Object",
            ReferenceKind::FormInputControlSource => "Form Input Control Source Object",
            ReferenceKind::FormOutputVariableSource => "Form Output Variable Source Object",
            ReferenceKind::ReportOwner => "Report Owner Object",
            ReferenceKind::ReportTarget => "Report Target Object",
            ReferenceKind::ReportColumnSource => "Report Column Source Object",
            ReferenceKind::FlowOwner(DynaFlow) => "Workflow Owner Object",
            ReferenceKind::FlowOwner(DynaFlowTask) => "Workflow Task Owner Object",
            ReferenceKind::FlowOwner(PageInit) => "Page Init Flow Owner Object",
            ReferenceKind::FlowOwner(General) => "General Flow Owner Object",
            ReferenceKind::FlowInputParameterSource(DynaFlow) => {
                "Workflow Input Parameter Source Object"
            }
            ReferenceKind::FlowInputParameterSource(DynaFlowTask) => {
                "Workflow Task Input Parameter Source Object"
            }
            ReferenceKind::FlowInputParameterSource(PageInit) => {
                "Page Init Flow Input Parameter Source Object"
            }
            ReferenceKind::FlowInputParameterSource(General) => {
                "General Flow Input Parameter Source Object"
            }
            ReferenceKind::FlowOutputVariableSource(DynaFlow) => {
                "Workflow Output Variable Source Object"
            }
            ReferenceKind::FlowOutputVariableSource(DynaFlowTask) => {
                "Workflow Task Output Variable Source Object"
            }
            ReferenceKind::FlowOutputVariableSource(PageInit) => {
                "Page Init Flow Output Variable Source Object"
            }
            ReferenceKind::FlowOutputVariableSource(General) => {
                "General Flow Output Variable Source Object"
            }
            ReferenceKind::UserStory => "User Story Reference",
        }
    }

    /// The kind of item this reference was found in.
    pub fn item_kind(&self) -> ItemKind {
        match self {
            ReferenceKind::FormOwner
            | ReferenceKind::FormTarget
            | ReferenceKind::FormInputControlSource
            | ReferenceKind::FormOutputVariableSource => ItemKind::Form,
            ReferenceKind::ReportOwner
            | ReferenceKind::ReportTarget
            | ReferenceKind::ReportColumnSource => ItemKind::Report,
            ReferenceKind::FlowOwner(_)
            | ReferenceKind::FlowInputParameterSource(_)
            | ReferenceKind::FlowOutputVariableSource(_) => ItemKind::Flow,
            ReferenceKind::UserStory => ItemKind::UserStory,
        }
    }

    /// True for form-related kinds.
    pub fn is_form_related(&self) -> bool {
        self.item_kind() == ItemKind::Form
    }

    /// True for report-related kinds.
    pub fn is_report_related(&self) -> bool {
        self.item_kind() == ItemKind::Report
    }

    /// True for flow-related kinds.
    pub fn is_flow_related(&self) -> bool {
        self.item_kind() == ItemKind::Flow
    }

    /// True for the user-story kind.
    pub fn is_story(&self) -> bool {
        self.item_kind() == ItemKind::UserStory
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
