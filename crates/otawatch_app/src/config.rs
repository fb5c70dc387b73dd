use std::path::PathBuf;

use anyhow::{bail, Context};
use otawatch_core::SelectionCriterion;
use watch_logging::LogDestination;

/// Process configuration, read once at startup from `OTAWATCH_*` environment
/// variables. No runtime reconfiguration.
#[derive(Debug, Clone)]
pub struct Config {
    pub page_url: String,
    pub device: String,
    pub region_marker: Option<String>,
    pub output_dir: PathBuf,
    pub mirror_dirs: Vec<PathBuf>,
    pub ack_cookie: Option<String>,
    pub changes: Vec<String>,
    pub log_destination: LogDestination,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup, so tests do not have
    /// to mutate the process environment.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |name: &str| {
            var(name)
                .filter(|value| !value.trim().is_empty())
                .with_context(|| format!("{name} must be set"))
        };

        let page_url = required("OTAWATCH_PAGE_URL")?;
        let device = required("OTAWATCH_DEVICE")?;
        let output_dir = PathBuf::from(required("OTAWATCH_OUTPUT_DIR")?);

        let mirror_dirs = var("OTAWATCH_MIRROR_DIRS")
            .unwrap_or_default()
            .split(':')
            .filter(|part| !part.trim().is_empty())
            .map(PathBuf::from)
            .collect();

        let changes = match var("OTAWATCH_CHANGES") {
            Some(raw) => raw
                .split('|')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
            None => vec!["Vendor OTA release".to_string()],
        };

        let log_destination = match var("OTAWATCH_LOG").as_deref() {
            None | Some("terminal") => LogDestination::Terminal,
            Some("file") => LogDestination::File,
            Some("both") => LogDestination::Both,
            Some(other) => bail!("OTAWATCH_LOG must be terminal, file or both, got {other:?}"),
        };

        Ok(Self {
            page_url,
            device,
            region_marker: var("OTAWATCH_REGION").filter(|value| !value.trim().is_empty()),
            output_dir,
            mirror_dirs,
            ack_cookie: var("OTAWATCH_ACK_COOKIE").filter(|value| !value.trim().is_empty()),
            changes,
            log_destination,
        })
    }

    pub fn criterion(&self) -> SelectionCriterion {
        SelectionCriterion::new(self.region_marker.clone())
    }
}
