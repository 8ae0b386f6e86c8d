use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::config::Config;

mod config;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    let exe = executor(&config)?;
    exe.execute()?;
    if !config.dry_run {
        info!("Wrote client to {}", config.output_root.display());
    }
    Ok(())
}

fn executor(config: &Config) -> Result<clientgen::Executor> {
    let mut exe = clientgen::Executor::new(config.generator_config()?);
    for glob in &config.input {
        exe = exe.input(clientgen::input::Glob::new(glob)?);
    }
    if config.dry_run {
        return Ok(exe.output(clientgen::output::StdOut::default()));
    }
    Ok(exe.output(output(config.output_root.clone())?))
}

fn output(path: PathBuf) -> Result<clientgen::output::FileSet> {
    Ok(clientgen::output::FileSet::new(path)?)
}
