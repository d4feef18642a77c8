use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use log::{info, warn};

use turntable_capture::cli::Cli;
use turntable_capture::{run_pipeline, CaptureConfig, MemoryHost};

fn load_config(cli: &Cli) -> Result<CaptureConfig> {
    let base = match &cli.config {
        Some(path) => CaptureConfig::load(path)?,
        None => CaptureConfig::default(),
    };
    let config = cli.apply(base);
    config.validate().context("Invalid capture configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut host = MemoryHost::new();
    let dims = Vec3::from_slice(&cli.dimensions);
    let subject = host.add_mesh(&cli.subject, dims);
    host.select(subject);

    let report = run_pipeline(&mut host, &config)
        .with_context(|| format!("Capture of '{}' failed", cli.subject))?;

    for warning in &report.warnings {
        warn!("{} was not applied: {}", warning.setting, warning.reason);
    }
    info!(
        "Wrote {} frames of '{}' to {} (started {})",
        report.capture.frames.len(),
        report.target,
        report.capture.output_dir.display(),
        report.capture.started_at.to_rfc3339()
    );

    Ok(())
}
