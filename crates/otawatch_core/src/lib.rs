//! Otawatch core: pure update-discovery and manifest-synchronization logic.
//!
//! No I/O happens here. The engine crate feeds page content in and executes
//! whatever plan comes out.
mod filename;
mod manifest;
mod parse;
mod plan;
mod record;
mod select;

pub use filename::{canonical_file_name, raw_file_name};
pub use manifest::{Manifest, ManifestEntry};
pub use parse::parse_version_cell;
pub use plan::{plan_run, RunPlan};
pub use record::{UpdateRecord, VersionCell};
pub use select::{select_release, SelectionCriterion};
