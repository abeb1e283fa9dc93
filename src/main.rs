//! Labelplot - scatter plot of a labeled point file in the terminal.

use anyhow::Result;
use clap::Parser;
use labelplot::plot::TerminalRenderer;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "labelplot")]
#[command(about = "Scatter plot of a labeled 2D point dataset", long_about = None)]
struct Args {
    /// Dataset file: a header line, then `<x> <y> <label>` per line
    #[arg(default_value = "./spiral_train.txt")]
    file: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::File::create(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting labelplot");
    }

    let title = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| args.file.display().to_string());
    let mut renderer = TerminalRenderer::new(title);

    if let Err(err) = labelplot::run(&args.file, &mut renderer) {
        tracing::error!("Error: {}", err);
        return Err(err.into());
    }

    tracing::info!("Labelplot exited");
    Ok(())
}
