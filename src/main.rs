//! Diffusion Chamber - Entry Point
//!
//! Runs the reference composition headless: a chamber filled to 80% with two
//! species, observed by the concentration and entropy probes on an in-memory
//! scope. Progress is logged; the final summary can be written as JSON.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use diffusion_chamber::core::{Result, SimulationConfig};
use diffusion_chamber::scope::RecordingScope;
use diffusion_chamber::simulation::Diffusion;

/// Two-species diffusion in a bounded 2D chamber
#[derive(Parser, Debug)]
#[command(name = "diffusion")]
#[command(about = "Simulate two species mixing in a 2D chamber and track system entropy")]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chamber width and height in cells
    #[arg(long)]
    size: Option<usize>,

    /// Chamber temperature (step length is temperature / 100)
    #[arg(long)]
    temperature: Option<f64>,

    /// Number of cycles to run
    #[arg(long)]
    ticks: Option<u64>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Log progress every N cycles (0 disables)
    #[arg(long)]
    log_every: Option<u64>,

    /// Write the run summary as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(ticks) = self.ticks {
            config.ticks = ticks;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(log_every) = self.log_every {
            config.log_every = log_every;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let mut config = args.resolve_config()?;
    if config.seed.is_none() {
        config.seed = Some(rand::random());
    }
    tracing::info!("Starting diffusion run with {:?}", config);

    let ticks = config.ticks;
    let mut diffusion = Diffusion::new(config, Rc::new(RefCell::new(RecordingScope::new())))?;
    let summary = diffusion.run(ticks)?;

    if let Some(title) = diffusion.scope().borrow().title() {
        tracing::info!("{}", title);
    }
    println!("{}", summary.summary());

    if let Some(path) = &args.output {
        std::fs::write(path, summary.to_json()?)?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args_with_config(path: PathBuf) -> Args {
        Args {
            config: Some(path),
            size: None,
            temperature: None,
            ticks: None,
            seed: None,
            log_every: None,
            output: None,
            verbose: false,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "size = 20\ntemperature = 40.0\nticks = 10\nseed = 5").unwrap();

        let args = Args {
            size: Some(30),
            seed: Some(9),
            ..args_with_config(file.path().to_path_buf())
        };
        let config = args.resolve_config().unwrap();

        assert_eq!(config.size, 30);
        assert_eq!(config.seed, Some(9));
        // Values without a flag come from the file
        assert_eq!(config.temperature, 40.0);
        assert_eq!(config.ticks, 10);
    }

    #[test]
    fn test_file_values_used_without_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "size = 12\nlog_every = 0").unwrap();

        let config = args_with_config(file.path().to_path_buf())
            .resolve_config()
            .unwrap();
        assert_eq!(config.size, 12);
        assert_eq!(config.log_every, 0);
        assert_eq!(config.temperature, 75.0);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "size = 12").unwrap();

        let args = Args {
            temperature: Some(-3.0),
            ..args_with_config(file.path().to_path_buf())
        };
        assert!(args.resolve_config().is_err());
    }
}
