//! Stereo - terminal music controller

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use stereo_backend::{spawn_controller, BackendConfig, QueuePlayer};
use stereo_core::{Catalog, LibraryFile, MemoryCatalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod console;

use command::{Command, Help};
use console::ConsoleUi;

#[derive(Parser)]
#[command(name = "stereo")]
#[command(about = "Shuffle, lock and browse a music library from the terminal", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the controller and read commands from stdin
    Play {
        /// Library file (JSON with bands, albums and songs)
        #[arg(short, long, env = "STEREO_LIBRARY")]
        library: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check a library file and print a summary
    Check {
        /// Library file (JSON with bands, albums and songs)
        #[arg(short, long, env = "STEREO_LIBRARY")]
        library: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "stereo=debug,stereo_backend=debug,stereo_selection=debug,stereo_actor=debug"
    } else {
        "stereo=info,stereo_backend=info,stereo_actor=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command {
        Commands::Play { library, config } => play(&library, config.as_deref()),
        Commands::Check { library } => check(&library),
    }
}

fn load_catalog(path: &Path) -> anyhow::Result<MemoryCatalog> {
    let library = LibraryFile::load(path)
        .with_context(|| format!("failed to read library {}", path.display()))?;
    let catalog = MemoryCatalog::from_library(library)
        .with_context(|| format!("library {} is inconsistent", path.display()))?;
    Ok(catalog)
}

fn check(library: &Path) -> anyhow::Result<()> {
    let catalog = load_catalog(library)?;
    let bands = catalog.all_bands()?;
    let years = catalog.all_years()?;

    println!("Songs: {}", catalog.song_count());
    println!("Bands: {}", bands.len());
    match (years.first(), years.last()) {
        (Some(first), Some(last)) => println!("Years: {first}-{last}"),
        _ => println!("Years: none"),
    }
    Ok(())
}

fn play(library: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let config = BackendConfig::load(config)?;
    let catalog = load_catalog(library)?;
    tracing::info!(songs = catalog.song_count(), "Library loaded");

    let controls_enabled = Arc::new(AtomicBool::new(true));
    let console = stereo_actor::spawn("console-ui", {
        let controls_enabled = Arc::clone(&controls_enabled);
        move || ConsoleUi::new(Box::new(io::stdout()), controls_enabled)
    })?;

    let controller = spawn_controller(
        Arc::new(catalog),
        Box::new(console.api().clone()),
        QueuePlayer::factory(config.verify_song_files),
        &config,
    )?;

    println!("Type 'help' for commands.");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print!("{Help}"),
            Ok(command) if controls_enabled.load(Ordering::SeqCst) => {
                command.apply(controller.api());
            }
            Ok(_) => println!("Controls are disabled. Type 'quit' to exit."),
            Err(e) => println!("{e}"),
        }
        io::stdout().flush()?;
    }

    controller.abandon();
    controller.join()?;
    console.abandon();
    console.join()?;
    Ok(())
}
