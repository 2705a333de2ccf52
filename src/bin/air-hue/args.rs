use std::path::PathBuf;

use air_hue::http::DEFAULT_TIMEOUT;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "AIR_HUE_CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    #[arg(long, env = "AIR_HUE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,
}
