use eyre::Result;
use tracing_subscriber::EnvFilter;

use brandbook_server::config::{LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ServerConfig::from_env();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    brandbook_server::serve(config).await
}
