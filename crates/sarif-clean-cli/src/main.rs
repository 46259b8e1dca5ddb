use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sarif_clean_core::{CleanError, CleanSummary, io, sanitize};

mod args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit 1; --help and --version exit 0.
    let args = match args::Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if !args.input.exists() {
        eprintln!("Error: {}", CleanError::InputNotFound(args.input.clone()));
        std::process::exit(1);
    }

    let output = args.output_path();

    println!("Reading: {}", args.input.display());
    let raw = io::read_document(&args.input)?;

    println!("Cleaning SARIF for GitHub compatibility...");
    let cleaned = sanitize(&raw.value);
    let summary = CleanSummary::from_log(&cleaned);

    println!("Writing: {}", output.display());
    io::write_document(output, &cleaned)?;

    tracing::debug!(runs = summary.runs, "clean complete");
    print!("{}", summary.render_text());

    Ok(())
}
