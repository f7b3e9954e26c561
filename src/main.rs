use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use workout_log::{http, Config, JsonFileBackend, WorkoutStore};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let config = Config::parse();

    let store = WorkoutStore::new(JsonFileBackend::new(&config.data_file))
        .with_page_size(config.page_size);
    if let Err(e) = store.ensure_seeded() {
        error!(error = %e, path = %config.data_file.display(), "cannot seed workout store");
        return ExitCode::FAILURE;
    }
    let records = store.count().unwrap_or_default();

    info!(
        bind = %config.bind,
        data_file = %config.data_file.display(),
        records,
        page_size = store.page_size(),
        "workout log listening"
    );

    match http::serve(Arc::new(store), &config.static_dir, &config.bind).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, bind = %config.bind, "server stopped");
            ExitCode::FAILURE
        }
    }
}
