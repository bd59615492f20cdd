use anyhow::Context;
use slotgrid::TrackerConfig;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    slotgrid::logging::init();

    // Optional first argument: path to a JSON5 config file.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = TrackerConfig::load(config_path.as_deref()).context("loading config")?;

    slotgrid::run_gui(config).map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
