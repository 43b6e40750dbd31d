//! ModelQuery — an immutable snapshot of the loaded model.
//!
//! All reads go through this struct so a resolution pass sees one
//! consistent model. Enumeration order is model order, which makes
//! resolver output deterministic for a fixed model.

use indexmap::IndexMap;

use super::host::ObjectPath;
use super::types::{DataObject, ModelWorkflow, Namespace, Report, RootModel, UserStory};

/// Read-only view over a loaded model (or over nothing, which behaves as
/// an empty model).
#[derive(Clone, Copy)]
pub struct ModelQuery<'a> {
    model: Option<&'a RootModel>,
    object_index: &'a IndexMap<String, ObjectPath>,
}

impl<'a> ModelQuery<'a> {
    pub(crate) fn new(
        model: Option<&'a RootModel>,
        object_index: &'a IndexMap<String, ObjectPath>,
    ) -> Self {
        Self {
            model,
            object_index,
        }
    }

    /// All namespaces, in model order.
    pub fn namespaces(&self) -> &'a [Namespace] {
        self.model.map(|m| m.namespace.as_slice()).unwrap_or(&[])
    }

    /// All data objects across all namespaces, in model order.
    ///
    /// Objects inside a malformed namespace collection are not reachable;
    /// scans detect that case through [`Self::namespaces`].
    pub fn all_objects(&self) -> impl Iterator<Item = &'a DataObject> + 'a {
        self.namespaces().iter().flat_map(|ns| ns.object.iter())
    }

    /// Names of all indexed data objects, in model order.
    pub fn object_names(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.object_index.keys().map(|s| s.as_str())
    }

    /// Look up a data object by exact name.
    pub fn object_by_name(&self, name: &str) -> Option<&'a DataObject> {
        let &(ns_idx, obj_idx) = self.object_index.get(name)?;
        self.model?
            .namespace
            .get(ns_idx)?
            .object
            .as_slice()?
            .get(obj_idx)
    }

    /// Every embedded workflow paired with its owning data object.
    pub fn flows_with_owner(
        &self,
    ) -> impl Iterator<Item = (&'a DataObject, &'a ModelWorkflow)> + 'a {
        self.all_objects()
            .flat_map(|obj| obj.object_workflow.iter().map(move |wf| (obj, wf)))
    }

    /// Page workflows (forms) paired with their owning data object.
    pub fn page_workflows_with_owner(
        &self,
    ) -> impl Iterator<Item = (&'a DataObject, &'a ModelWorkflow)> + 'a {
        self.flows_with_owner().filter(|(_, wf)| wf.is_page())
    }

    /// All page workflows (forms) in the model.
    pub fn all_page_workflows(&self) -> impl Iterator<Item = &'a ModelWorkflow> + 'a {
        self.page_workflows_with_owner().map(|(_, wf)| wf)
    }

    /// Reports paired with their owning data object.
    pub fn reports_with_owner(&self) -> impl Iterator<Item = (&'a DataObject, &'a Report)> + 'a {
        self.all_objects()
            .flat_map(|obj| obj.report.iter().map(move |report| (obj, report)))
    }

    /// All reports in the model.
    pub fn all_reports(&self) -> impl Iterator<Item = &'a Report> + 'a {
        self.reports_with_owner().map(|(_, report)| report)
    }

    /// All user stories across all namespaces, in model order.
    pub fn all_user_stories(&self) -> impl Iterator<Item = &'a UserStory> + 'a {
        self.namespaces().iter().flat_map(|ns| ns.user_story.iter())
    }

    /// The data object owning the form with the given name.
    pub fn form_owner_object(&self, form_name: &str) -> Option<&'a DataObject> {
        self.page_workflows_with_owner()
            .find(|(_, wf)| wf.name.as_deref() == Some(form_name))
            .map(|(owner, _)| owner)
    }

    /// The data object owning the report with the given name.
    pub fn report_owner_object(&self, report_name: &str) -> Option<&'a DataObject> {
        self.reports_with_owner()
            .find(|(_, report)| report.name.as_deref() == Some(report_name))
            .map(|(owner, _)| owner)
    }
}
