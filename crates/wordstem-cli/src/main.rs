//! Wordstem — stem words from the command line, files, or token streams.

use std::io::Write;

use tracing_subscriber::EnvFilter;

use wordstem_cli::{Command, Runner};
use wordstem_core::StemConfig;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only stems
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}. Use 'wordstem help' for usage.", e);
            std::process::exit(1);
        }
    };

    let config = StemConfig::from_env()?;
    let runner = Runner::new(&config);

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let result = runner.run(&command, &mut out);
    out.flush()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
