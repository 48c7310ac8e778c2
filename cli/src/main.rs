use std::io::{self, Write};

use anyhow::Context;
use serial_fetch_api::{FetchConfig, SerialRunner, UserSource};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let runner = SerialRunner::from_config(FetchConfig::default())?;
    let stdout = io::stdout();
    report(&runner, &mut stdout.lock())
}

fn report<S: UserSource, W: Write>(runner: &SerialRunner<S>, out: &mut W) -> anyhow::Result<()> {
    runner.run(out).context("serial fetch aborted")?;
    Ok(())
}
