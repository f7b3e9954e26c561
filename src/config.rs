//! Server configuration, from command-line flags with environment fallbacks.

use std::path::PathBuf;

use clap::Parser;

use crate::listing::DEFAULT_PAGE_SIZE;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "workout_log")]
#[command(about = "Workout log HTTP service backed by a JSON file", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "WORKOUT_LOG_BIND", default_value = "0.0.0.0:5000")]
    pub bind: String,

    /// JSON file holding the workout records
    #[arg(long, env = "WORKOUT_LOG_DATA", default_value = "data/workouts.json")]
    pub data_file: PathBuf,

    /// Directory containing index.html for the landing page
    #[arg(long, env = "WORKOUT_LOG_STATIC", default_value = "static")]
    pub static_dir: PathBuf,

    /// Records per page on the list endpoint
    #[arg(long, env = "WORKOUT_LOG_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}
