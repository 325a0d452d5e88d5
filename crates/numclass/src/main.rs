use crate::prelude::*;
use clap::Parser;

mod api;
mod classify;
mod error;
mod facts;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify integers by primality, perfection, parity and the Armstrong property"
)]
pub struct App {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional diagnostics (true/yes/on/1 enable, anything else disables)
    #[clap(
        long,
        env = "DEBUG",
        global = true,
        default_value = "true",
        action = clap::ArgAction::Set,
        value_parser = parse_debug_flag
    )]
    debug: bool,
}

/// Lenient reading of the debug flag; unrecognized values mean `false`
fn parse_debug_flag(value: &str) -> std::result::Result<bool, std::convert::Infallible> {
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "t" | "yes" | "y" | "on" | "1"
    ))
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Start the HTTP classification server
    Serve(crate::api::ServeOptions),

    /// Classify a single number from the command line
    Classify(crate::classify::ClassifyOptions),
}

fn init_logging(global: &Global) {
    let default_filter = if global.debug {
        "info,numclass=debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    init_logging(&app.global);

    let command = match app.command {
        Some(command) => command,
        None => SubCommands::Serve(
            crate::api::ServeOptions::try_parse_from([env!("CARGO_PKG_NAME")])
                .context("Failed to read server configuration")?,
        ),
    };

    match command {
        SubCommands::Serve(options) => crate::api::run(options, app.global).await,
        SubCommands::Classify(options) => crate::classify::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
