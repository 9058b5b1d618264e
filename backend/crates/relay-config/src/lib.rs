mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod websocket_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use websocket_config::WebSocketConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4001;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

/// Directory holding `config.toml` when `RELAY_CONFIG_DIR` is not set
const DEFAULT_CONFIG_DIR_NAME: &str = ".relay";
const CONFIG_DIR_ENV: &str = "RELAY_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";
