//! Analysis layer — reference taxonomy, flow classification, the entity
//! reference resolver, free-text story extraction, and the usage sweep.
//!
//! ## Key Types
//!
//! - [`ReferenceKind`] — closed taxonomy of reference kinds, including the
//!   full flow-classification × relationship cross-product
//! - [`Reference`] / [`ReferenceResult`] — one discovered usage, and a
//!   whole resolution pass with its non-fatal warnings
//! - [`find_references`] — the resolver entry point
//! - [`usage_summaries`] — per-object reference counts across the model

mod classify;
mod kinds;
mod references;
mod story;
mod usage;

pub use classify::classify_flow;
pub use kinds::{FlowClass, ItemKind, ReferenceKind};
pub use references::{Reference, ReferenceResult, ScanStage, ScanWarning, find_references};
pub use story::{extract_candidate_names, is_name_match};
pub use usage::{UsageSummary, usage_summaries};
