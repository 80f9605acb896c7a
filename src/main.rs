use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use exprasm::cli::{self, Cli};

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    )
    .with_writer(io::stderr)
    .init();

  let mut stdout = io::stdout().lock();
  if let Err(err) = cli::run(&cli, &mut stdout) {
    eprintln!("{err}");
    process::exit(1);
  }
}
