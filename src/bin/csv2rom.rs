use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use romtools::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use romtools::Config;

/// Turns a semicolon separated ROM dump into a raw binary image.
#[derive(Parser)]
#[command(name = "csv2rom")]
#[command(version)]
struct Cli {
    /// Dump to read, one `LABEL;VALUE;NOTE` record per line
    #[arg(short, long, env = "ROM_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Image to write
    #[arg(short, long, env = "ROM_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Log what is being read and written
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::new(cli.input, cli.output);
    let count = romtools::convert(&config)?;

    println!(
        "{} bytes successfully written to '{}'",
        count,
        config.output.display()
    );
    Ok(())
}
