//! Main application entry point.

use clap::Parser;
use pinboard_app::{App, AppConfig, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pinboard", about = "Replay a Pinboard session and export a snapshot")]
struct Cli {
    /// JSON array of commands to replay.
    script: PathBuf,

    /// App config file (JSON).
    #[arg(long, env = "PINBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Where to write the SVG snapshot.
    #[arg(long, short, default_value = "pinboard.svg")]
    output: PathBuf,

    /// Print the resulting board document as JSON to stdout.
    #[arg(long)]
    dump: bool,
}

fn run(cli: Cli) -> AppResult<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let mut app = App::new(config);
    let redraws = app.replay_file(&cli.script)?;
    log::debug!("{} commands changed the view", redraws);

    app.write_svg(&cli.output)?;
    if cli.dump {
        println!("{}", app.document_json()?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Pinboard");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
