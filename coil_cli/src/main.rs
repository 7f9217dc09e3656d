//! # Coil Design CLI
//!
//! Evaluates the compiled-in reference coil and prints the design report.
//!
//! Usage:
//!     coil_cli                       text report
//!     coil_cli --json                input and results as JSON
//!     coil_cli --conductor copper    same design wound with copper

use clap::Parser;
use log::LevelFilter;

use coil_core::calculations::{calculate, CoilInput};
use coil_core::materials::Conductor;
use coil_core::report::{render_json, render_text};

/// Axial-flux motor coil design report
#[derive(Parser)]
#[command(name = "coil_cli")]
#[command(version)]
#[command(about = "Back-EMF, wire sizing and losses for one axial-flux motor coil", long_about = None)]
struct Cli {
    /// Print input and results as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Winding conductor (aluminum or copper)
    #[arg(long)]
    conductor: Option<Conductor>,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let mut input = CoilInput::default();
    if let Some(conductor) = cli.conductor {
        input = input.with_conductor(conductor);
    }

    let result = calculate(&input);

    if !cli.json {
        print!("{}", render_text(&input, &result));
        return;
    }

    match render_json(&input, &result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
