//! Typed shape of the JSON application model.
//!
//! Field names follow the model file format (camelCase, with the legacy
//! `fKObjectName` spelling). Only the shape needed by the analysis layer is
//! modeled; unknown fields are ignored on deserialization.
//!
//! Model files produced by older tooling occasionally carry a scalar or an
//! object where a list is expected. [`LenientList`] preserves such values
//! instead of failing the whole load, so one corrupt container cannot
//! suppress analysis of the rest of the model.

use serde::Deserialize;
use serde_json::Value;

/// A list-valued model field that tolerates malformed input.
///
/// Deserializes as either the expected element vector or, when the value
/// has the wrong shape, the raw JSON value. Scans treat `Malformed` as an
/// empty list and report a warning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LenientList<T> {
    /// A well-formed list of elements.
    Items(Vec<T>),
    /// Anything that failed to deserialize as a list of `T`.
    Malformed(Value),
}

impl<T> Default for LenientList<T> {
    fn default() -> Self {
        LenientList::Items(Vec::new())
    }
}

impl<T> LenientList<T> {
    /// The elements, or `None` when the underlying value was malformed.
    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            LenientList::Items(items) => Some(items),
            LenientList::Malformed(_) => None,
        }
    }

    /// The elements, treating a malformed value as empty.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().unwrap_or(&[]).iter()
    }

    /// True when the underlying value was not a list.
    pub fn is_malformed(&self) -> bool {
        matches!(self, LenientList::Malformed(_))
    }
}

impl<T> From<Vec<T>> for LenientList<T> {
    fn from(items: Vec<T>) -> Self {
        LenientList::Items(items)
    }
}

/// Flags are stored as the strings `"true"`/`"false"` in the model file.
fn flag_is_true(flag: &Option<String>) -> bool {
    flag.as_deref()
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Accept both the historical string flags and plain JSON booleans.
fn de_flag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<RawFlag>::deserialize(deserializer)? {
        None => None,
        Some(RawFlag::Bool(b)) => Some(b.to_string()),
        Some(RawFlag::Text(s)) => Some(s),
    })
}

/// Root of a model file: a list of namespaces.
///
/// A wrong-typed `namespace` value fails the load outright (the file is
/// not a model), unlike the per-container leniency below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootModel {
    #[serde(default)]
    pub namespace: Vec<Namespace>,
}

/// A namespace: data objects plus the free-text user stories.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub name: Option<String>,
    #[serde(default)]
    pub object: LenientList<DataObject>,
    #[serde(default)]
    pub user_story: LenientList<UserStory>,
}

/// A named entity analogous to a domain class. Owns properties, embedded
/// workflow definitions, reports, and optionally lookup values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataObject {
    pub name: Option<String>,
    pub parent_object_name: Option<String>,
    #[serde(default)]
    pub prop: LenientList<ModelProperty>,
    #[serde(default)]
    pub object_workflow: LenientList<ModelWorkflow>,
    #[serde(default)]
    pub report: LenientList<Report>,
    #[serde(default)]
    pub lookup_item: LenientList<LookupItem>,
}

/// A property of a data object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelProperty {
    pub name: Option<String>,
}

/// A process definition embedded in a data object.
///
/// A workflow flagged as a page is a *form*; the analysis layer counts it
/// under the form scan and excludes it from the generic flow scan.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelWorkflow {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_page: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_dyna_flow: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_dyna_flow_task: Option<String>,
    pub target_child_object: Option<String>,
    #[serde(default)]
    pub object_workflow_param: LenientList<WorkflowParam>,
    #[serde(default)]
    pub object_workflow_output_var: LenientList<WorkflowOutputVar>,
}

impl ModelWorkflow {
    /// True when this workflow is a page (a form).
    pub fn is_page(&self) -> bool {
        flag_is_true(&self.is_page)
    }

    /// True when this workflow is flagged as a dyna-flow.
    pub fn is_dyna_flow(&self) -> bool {
        flag_is_true(&self.is_dyna_flow)
    }

    /// True when this workflow is flagged as a dyna-flow task.
    pub fn is_dyna_flow_task(&self) -> bool {
        flag_is_true(&self.is_dyna_flow_task)
    }
}

/// An input parameter of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowParam {
    pub name: Option<String>,
    pub source_object_name: Option<String>,
    #[serde(rename = "fKObjectName")]
    pub fk_object_name: Option<String>,
}

/// An output variable of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowOutputVar {
    pub name: Option<String>,
    pub source_object_name: Option<String>,
    #[serde(rename = "fKObjectName")]
    pub fk_object_name: Option<String>,
}

/// A columnar data view owned by a data object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub name: Option<String>,
    pub target_child_object: Option<String>,
    #[serde(default)]
    pub report_column: LenientList<ReportColumn>,
}

/// A column of a report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportColumn {
    pub name: Option<String>,
    pub source_object_name: Option<String>,
    #[serde(rename = "fKObjectName")]
    pub fk_object_name: Option<String>,
}

/// A free-text user story sentence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    pub name: Option<String>,
    pub story_number: Option<String>,
    pub story_text: Option<String>,
}

impl UserStory {
    /// The story sentence, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.story_text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// A lookup value of a data object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupItem {
    pub name: Option<String>,
    pub display_name: Option<String>,
}

/// A member that may draw its value from another data object.
///
/// Parameters, output variables, and report columns all carry the same
/// source-object pair: the preferred `sourceObjectName` and the legacy
/// `fKObjectName` fallback. The scan stages are generic over this trait.
pub trait SourceCarrier {
    /// The member's own name, if any.
    fn member_name(&self) -> Option<&str>;

    /// The effective source object: `sourceObjectName`, else the legacy
    /// `fKObjectName`.
    fn source_object(&self) -> Option<&str>;
}

macro_rules! impl_source_carrier {
    ($ty:ty) => {
        impl SourceCarrier for $ty {
            fn member_name(&self) -> Option<&str> {
                self.name.as_deref()
            }

            fn source_object(&self) -> Option<&str> {
                self.source_object_name
                    .as_deref()
                    .or(self.fk_object_name.as_deref())
            }
        }
    };
}

impl_source_carrier!(WorkflowParam);
impl_source_carrier!(WorkflowOutputVar);
impl_source_carrier!(ReportColumn);
