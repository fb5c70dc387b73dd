use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use otawatch_app::Config;
use otawatch_engine::{
    run_sync_blocking, FetchSettings, ReqwestFetcher, RunOutcome, ScraperRowExtractor,
    SyncSettings,
};
use watch_logging::{watch_error, watch_info};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("otawatch: invalid configuration: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    watch_logging::initialize(config.log_destination);

    match run(&config) {
        Ok(outcome) => {
            report(&outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            watch_error!("run failed, manifest untouched: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<RunOutcome, otawatch_engine::SyncError> {
    watch_info!(
        "otawatch run: device={} page={}",
        config.device,
        config.page_url
    );

    let settings = SyncSettings {
        page_url: config.page_url.clone(),
        device: config.device.clone(),
        ack_cookie: config.ack_cookie.clone(),
        criterion: config.criterion(),
        output_dir: config.output_dir.clone(),
        mirror_dirs: config.mirror_dirs.clone(),
        changes: config.changes.clone(),
        timestamp: Arc::new(|| Utc::now().to_rfc3339()),
    };

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    run_sync_blocking(&fetcher, &fetcher, &ScraperRowExtractor, &settings)
}

fn report(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::NoCandidates => watch_info!("done: no candidates"),
        RunOutcome::NoQualifying => watch_info!("done: no qualifying release"),
        RunOutcome::AlreadyProcessed { build } => {
            watch_info!("done: build {build} already processed")
        }
        RunOutcome::Updated { build, filename } => {
            watch_info!("done: recorded build {build} as {filename}")
        }
    }
}
