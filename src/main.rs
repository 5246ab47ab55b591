//! Maintdeck - view coordination core for an equipment maintenance dashboard
//!
//! This is the binary entry point. All logic lives in the library crates;
//! the binary wires config, logging, and the line-oriented driver together.

mod driver;

use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;

use driver::Driver;

/// Maintdeck - equipment maintenance dashboard coordination core
#[derive(Parser, Debug)]
#[command(name = "maintdeck")]
#[command(about = "Drive the dashboard's view coordination layer from the command line", long_about = None)]
struct Args {
    /// Path to a shell config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Script of driver commands to run instead of reading stdin
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    maintdeck_core::logging::init()?;

    let config = match &args.config {
        Some(path) => maintdeck_shell::load_config_file(path)?,
        None => maintdeck_shell::load_config(),
    };
    tracing::info!(default_view = %config.default_view, "shell configured");

    let mut driver = Driver::new(&config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &args.script {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            driver.run(BufReader::new(file), &mut out)?;
        }
        None => {
            let stdin = std::io::stdin();
            driver.run(stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}
