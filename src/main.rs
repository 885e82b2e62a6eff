use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use minecount::{util, DEFAULT_SIZE};

/// Annotate an ASCII minefield with per-cell adjacent-mine counts.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the minefield file (`X` = mine, `O` = empty).
    input: PathBuf,

    /// Grid side length.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let field = util::annotated(&cli.input, cli.size)
        .with_context(|| format!("cannot read minefield from {}", cli.input.display()))?;
    println!("{field}");
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG`; stdout carries only the grid.
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
