//! `varposter info`: font axes and metrics.

use std::path::PathBuf;

use anyhow::Result;

use crate::io::{parse_font, read_font};

#[derive(Debug, Clone, clap::Args)]
pub struct InfoArgs {
    /// Font file (TTF/OTF)
    pub font: PathBuf,
}

pub fn info(args: &InfoArgs) -> Result<()> {
    let data = read_font(&args.font)?;
    let font = parse_font(&data, &args.font)?;

    if let Some(family) = font.family_name() {
        println!("Family: {family}");
    }
    println!("Mapped characters: {}", font.mapped_chars().len());

    match font.vertical_metrics() {
        Some(metrics) => println!(
            "Cap height: {:.0}, descender: {:.0} (per 1000 units)",
            metrics.cap_height, metrics.descender
        ),
        None => println!("Cap height: not declared"),
    }

    let axes = font.axes();
    if axes.is_empty() {
        println!("Not a variable font");
        return Ok(());
    }

    println!("Variable font axes:");
    for axis in axes {
        println!(
            "  {:4}  {:6.0} .. {:6.0} (default: {:6.0})",
            axis.tag, axis.min, axis.max, axis.default,
        );
    }
    Ok(())
}
