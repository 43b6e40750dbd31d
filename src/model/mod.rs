//! Model layer — serde types for the JSON application model, the
//! `ModelHost` that owns a loaded model, and the `ModelQuery` read-only
//! snapshot used by the analysis layer.

mod error;
mod host;
mod query;
mod types;

pub use error::ModelError;
pub use host::ModelHost;
pub use query::ModelQuery;
pub use types::{
    DataObject, LenientList, LookupItem, ModelProperty, ModelWorkflow, Namespace, Report,
    ReportColumn, RootModel, SourceCarrier, UserStory, WorkflowOutputVar, WorkflowParam,
};
