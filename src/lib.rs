//! # appdna-base
//!
//! Core library for AppDNA application-model analysis: model access,
//! cross-reference resolution, and usage aggregation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis  → reference taxonomy, flow classification, the entity
//!   ↓         reference resolver, story extraction, usage sweep
//! model     → serde model types, ModelHost, ModelQuery snapshots
//!   ↓
//! core      → text primitives (word characters, tokenization)
//! ```

// ============================================================================
// MODULES (dependency order: core → model → analysis)
// ============================================================================

/// Text primitives: word-character tests, word tokenization
pub mod core;

/// Model layer: serde types for the JSON model, ModelHost, ModelQuery
pub mod model;

/// Analysis layer: reference taxonomy, resolver, story extraction, usage
pub mod analysis;

// Re-export the types most callers need
pub use analysis::{
    FlowClass, ItemKind, Reference, ReferenceKind, ReferenceResult, ScanStage, ScanWarning,
    UsageSummary, classify_flow, extract_candidate_names, find_references, is_name_match,
    usage_summaries,
};
pub use model::{
    DataObject, LenientList, ModelError, ModelHost, ModelQuery, ModelWorkflow, Namespace, Report,
    ReportColumn, RootModel, UserStory, WorkflowOutputVar, WorkflowParam,
};
