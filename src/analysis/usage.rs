//! Per-object usage aggregation.
//!
//! Runs one reference resolution per data object and partitions each
//! result into per-kind counts. Passes are independent reads over one
//! snapshot, so the sweep parallelizes across entities; output order is
//! model order regardless of scheduling.

use rayon::prelude::*;

use super::kinds::ItemKind;
use super::references::find_references;
use crate::model::ModelQuery;

/// Reference counts for one data object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsageSummary {
    /// The data object the counts are for.
    pub object_name: String,
    /// References found in forms.
    pub form_count: usize,
    /// References found in reports.
    pub report_count: usize,
    /// References found in non-page workflows.
    pub flow_count: usize,
    /// References found in user stories.
    pub user_story_count: usize,
}

impl UsageSummary {
    /// Total references across all item kinds.
    pub fn total(&self) -> usize {
        self.form_count + self.report_count + self.flow_count + self.user_story_count
    }
}

/// Summarize reference usage for every data object in the model.
///
/// One entity degrading (malformed containers near it) contributes only
/// its own reduced counts; the sweep itself never fails.
pub fn usage_summaries(query: &ModelQuery<'_>) -> Vec<UsageSummary> {
    let names: Vec<&str> = query.object_names().collect();
    names
        .par_iter()
        .map(|name| summarize_object(query, name))
        .collect()
}

fn summarize_object(query: &ModelQuery<'_>, object_name: &str) -> UsageSummary {
    let result = find_references(query, object_name);
    let mut summary = UsageSummary {
        object_name: object_name.to_string(),
        ..Default::default()
    };
    for reference in &result.references {
        match reference.item_kind() {
            ItemKind::Form => summary.form_count += 1,
            ItemKind::Report => summary.report_count += 1,
            ItemKind::Flow => summary.flow_count += 1,
            ItemKind::UserStory => summary.user_story_count += 1,
            ItemKind::DataObject => {}
        }
    }
    summary
}
