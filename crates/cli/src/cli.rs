//! CLI definitions and command dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{FitArgs, GradientArgs, InfoArgs, fit, gradient, info};

#[derive(Parser)]
#[command(name = "varposter", version)]
#[command(about = "Typographic posters from variable fonts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stack lines of text with a per-character weight gradient
    Gradient(GradientArgs),
    /// Fit one line of text to a paper format using the width axis
    Fit(FitArgs),
    /// Show font axes and metrics
    Info(InfoArgs),
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Gradient(args) => gradient(&args),
            Commands::Fit(args) => fit(&args),
            Commands::Info(args) => info(&args),
        }
    }
}
