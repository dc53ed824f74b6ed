//! Headless ShapeForge host: replays a script of input commands and
//! prints the resulting scene as JSON.

mod replay;

use clap::Parser;
use replay::ReplayError;
use shapeforge_core::EditorConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shapeforge", about = "Replay editor input scripts headlessly")]
struct Cli {
    /// JSON array of input commands. Read from stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Editor configuration file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial drawing area width.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Initial drawing area height.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Pretty-print the report.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), ReplayError> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Starting ShapeForge replay");

    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    let commands = replay::load_script(cli.script.as_deref(), std::io::stdin().lock())?;
    let report = replay::replay(config, cli.width, cli.height, commands);

    for advisory in &report.advisories {
        eprintln!("{advisory}");
    }
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}
