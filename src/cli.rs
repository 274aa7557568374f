use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::{ConduitFillError, Result};

/// conduitfill - conduit fill percentage calculator
#[derive(Parser)]
#[command(name = "conduitfill")]
#[command(about = "Estimate how much of a conduit's cross-section a set of wires occupies")]
#[command(version)]
pub struct Cli {
    /// Path to a wire catalog JSON file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive TUI calculator (default when no command is given)
    Tui,
    /// Compute a fill percentage without the TUI
    Compute {
        /// Conduit trade size (e.g. "1/2", "3/4", "1", "2")
        #[arg(short, long, default_value = "1")]
        size: String,

        /// Wire selection entry as ID[=QTY]; repeat for multiple wires
        #[arg(short, long = "wire", value_name = "ID[=QTY]")]
        wires: Vec<String>,
    },
    /// Validate a wire catalog file
    Validate {
        /// Path to the catalog JSON file to validate
        #[arg(value_name = "CATALOG")]
        path: PathBuf,
    },
    /// List supported conduit trade sizes and their internal diameters
    Sizes,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

/// Parse a `--wire` entry of the form `id` or `id=quantity`.
///
/// A bare id means quantity 1, matching the initial quantity a wire gets
/// when first selected in the TUI.
pub fn parse_wire_spec(spec: &str) -> Result<(String, u32)> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(ConduitFillError::selection("empty wire spec"));
    }

    match spec.split_once('=') {
        None => Ok((spec.to_string(), 1)),
        Some((id, qty)) => {
            let id = id.trim();
            if id.is_empty() {
                return Err(ConduitFillError::selection(format!(
                    "wire spec '{spec}' has an empty id"
                )));
            }
            let quantity: u32 = qty.trim().parse().map_err(|_| {
                ConduitFillError::selection(format!(
                    "wire spec '{spec}' has an invalid quantity: {qty:?}"
                ))
            })?;
            if quantity == 0 {
                return Err(ConduitFillError::selection(format!(
                    "wire spec '{spec}' has a zero quantity"
                )));
            }
            Ok((id.to_string(), quantity))
        }
    }
}
