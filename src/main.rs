//! MicroDesigner - a terminal mockup of a microservice designer
//!
//! This is the binary entry point. All board logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use microdesigner_app::config;
use microdesigner_core::logging;
use microdesigner_core::prelude::*;

/// MicroDesigner - a terminal mockup of a microservice designer
#[derive(Parser, Debug)]
#[command(name = "microdesigner")]
#[command(about = "A terminal mockup of a microservice designer", long_about = None)]
#[command(version)]
struct Args {
    /// Settings file to use instead of the usual lookup
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the service catalog as JSON and exit (no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = config::load_settings(args.config.as_deref(), &working_dir);
    info!(
        "Loaded settings: icons={}, mouse={}, show_key_hints={}",
        settings.ui.icons, settings.ui.mouse, settings.ui.show_key_hints
    );

    if args.headless {
        return Ok(headless::run()?);
    }

    let result = microdesigner_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("MicroDesigner exiting");
    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["microdesigner"]);
        assert!(args.config.is_none());
        assert!(!args.headless);
    }

    #[test]
    fn test_args_config_and_headless() {
        let args = Args::parse_from(["microdesigner", "--config", "/tmp/md.toml", "--headless"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/md.toml")));
        assert!(args.headless);
    }
}
