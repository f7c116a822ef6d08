//! Budget Buddy Command Line Interface

pub mod command;

use std::path::PathBuf;

use clap::{command, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a categorised expense summary of a statement file
    Summary {
        /// Statement file (csv, qif, qfx/ofx/qbo or pdf)
        file: PathBuf,
    },

    /// Emit sunburst and pie chart data for a statement file as JSON
    Chart {
        /// Statement file (csv, qif, qfx/ofx/qbo or pdf)
        file: PathBuf,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
