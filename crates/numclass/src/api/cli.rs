use crate::facts::FactsOptions;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Start the number classification HTTP server")]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(flatten)]
    pub facts: FactsOptions,
}
