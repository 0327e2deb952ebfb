use std::io::{self, Write};

use anyhow::{Context, Result};
use street_garage::{logging, run_scenario, DemoConfig};

fn main() -> Result<()> {
    logging::init_tracing();

    let config = DemoConfig::load().context("failed to load demo config")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_scenario(&config, &mut out).context("failed to write transcript")?;
    out.flush()?;

    Ok(())
}
