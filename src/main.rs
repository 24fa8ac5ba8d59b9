use backstack::StartScreen;
use backstack::core::config;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "backstack", about = "Guarded screen-stack navigation demo")]
struct Args {
    /// Screen to boot into
    #[arg(long, value_enum)]
    start: Option<StartScreen>,

    /// Disable slide/fade transition animations
    #[arg(long)]
    no_animations: bool,

    /// Log file path
    #[arg(long, default_value = "backstack.log")]
    log_file: String,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - the terminal itself belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("backstack starting up");

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("backstack: {e}");
            std::process::exit(2);
        }
    };
    let resolved = config::resolve(
        &config,
        args.start.as_ref().map(StartScreen::as_str),
        args.no_animations.then_some(false),
    );

    backstack::tui::run(resolved)
}
