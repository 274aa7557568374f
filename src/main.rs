//! conduitfill - Main entry point
//!
//! A terminal conduit fill calculator: pick wires from a catalog, choose a
//! conduit trade size, and see what percentage of the cross-section the
//! pull occupies.

mod app;
mod catalog;
mod cli;
mod components;
mod conduit;
mod error;
mod fill;
mod selection;
mod theme;
mod ui;

use anyhow::Context;
use log::{debug, error, info};
use std::path::Path;
use strum::IntoEnumIterator;

use crate::catalog::Catalog;
use crate::cli::{Cli, Commands};
use crate::conduit::TradeSize;
use crate::selection::Selection;

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Load the catalog selected on the command line, or the built-in one
fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            info!("Loading catalog from: {}", path.display());
            Catalog::load_from_file(path)
        }
        None => {
            debug!("Using built-in catalog");
            Catalog::builtin()
        }
    }
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging first
    init_logger();
    info!("conduitfill starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { path }) => {
            info!("Validating catalog file: {:?}", path);
            match Catalog::load_from_file(&path).and_then(|c| c.validate().map(|()| c)) {
                Ok(loaded) => {
                    info!("Catalog validation successful");
                    println!(
                        "✓ Catalog file is valid: {} ({} manufacturers, {} wires)",
                        path.display(),
                        loaded.manufacturers().len(),
                        loaded.wire_count()
                    );
                }
                Err(e) => {
                    error!("Catalog validation failed: {:#}", e);
                    eprintln!("✗ Catalog validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Compute { size, wires }) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            run_compute(&catalog, &size, &wires)?;
        }
        Some(Commands::Sizes) => {
            println!("Supported conduit trade sizes (EMT internal diameters):");
            for size in TradeSize::iter() {
                println!("  {:<10} {:.3} in", size.label(), size.internal_diameter_in());
            }
        }
        Some(Commands::Tui) | None => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            info!("Launching TUI calculator");
            app::run_tui(catalog)?;
        }
    }

    Ok(())
}

/// Headless one-shot computation printed to stdout
fn run_compute(catalog: &Catalog, size: &str, wires: &[String]) -> anyhow::Result<()> {
    let trade_size: TradeSize = size
        .parse()
        .ok()
        .with_context(|| format!("Unrecognized conduit trade size: {:?}", size))?;

    let mut selection = Selection::new();
    for spec in wires {
        let (wire_id, quantity) = cli::parse_wire_spec(spec)?;
        if catalog.find_wire(&wire_id).is_none() {
            // Unresolvable ids contribute zero; warn rather than fail
            log::warn!("Wire id not found in catalog, skipping: {}", wire_id);
        }
        let current = selection.quantity(&wire_id);
        selection.set_quantity(&wire_id, current + quantity);
    }

    match fill::compute_fill_for_size(&selection, catalog, trade_size) {
        Some(percent) => {
            println!(
                "Conduit {} ({:.3} in): {:.2}% of cross-section used",
                trade_size.label(),
                trade_size.internal_diameter_in(),
                percent
            );
        }
        None => {
            anyhow::bail!("Fill percentage is not computable for this conduit size");
        }
    }

    Ok(())
}
