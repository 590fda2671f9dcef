use std::env;
use std::net::SocketAddr;

use brandbook_gemini::client::GeminiConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Everything the server reads from its environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    /// `BRANDBOOK_HOST`, `BRANDBOOK_PORT`, `BRANDBOOK_LOG_FORMAT`, plus the
    /// Gemini variables read by [`GeminiConfig::from_env`].
    pub fn from_env() -> Self {
        let host = env::var("BRANDBOOK_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("BRANDBOOK_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let log_format = match env::var("BRANDBOOK_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            host,
            port,
            log_format,
            gemini: GeminiConfig::from_env(),
        }
    }

    /// The host must be an IP literal.
    pub fn bind_addr(&self) -> eyre::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| eyre::eyre!("invalid BRANDBOOK_HOST/BRANDBOOK_PORT: {e}"))
    }
}
