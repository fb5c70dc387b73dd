use crate::manifest::Manifest;
use crate::record::UpdateRecord;
use crate::select::{select_release, SelectionCriterion};

/// What one run should do, decided purely from page candidates and prior
/// manifest state. The engine executes the plan; nothing here does I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunPlan<'a> {
    /// No row on the page matched the device filter.
    NoCandidates,
    /// Rows matched the device but none passed the region criterion.
    NoQualifying,
    /// The selected release is already at the head of the manifest.
    AlreadyProcessed { build: String },
    /// A new release must be acquired and merged.
    Acquire { record: &'a UpdateRecord },
}

pub fn plan_run<'a>(
    records: &'a [UpdateRecord],
    criterion: &SelectionCriterion,
    manifest: &Manifest,
) -> RunPlan<'a> {
    if records.is_empty() {
        return RunPlan::NoCandidates;
    }
    let Some(record) = select_release(records, criterion) else {
        return RunPlan::NoQualifying;
    };
    let build = record.build_id();
    if manifest.is_current(&build) {
        RunPlan::AlreadyProcessed { build }
    } else {
        RunPlan::Acquire { record }
    }
}
