use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures while locating, reading or validating relay config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory unavailable: {message} {location}")]
    ConfigDir {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid [server] section: {message} {location}")]
    Server {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid [logging] section: {message} {location}")]
    Logging {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid [websocket] section: {message} {location}")]
    WebSocket {
        message: String,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn config_dir(message: impl Into<String>) -> Self {
        ConfigError::ConfigDir {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server(message: impl Into<String>) -> Self {
        ConfigError::Server {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logging(message: impl Into<String>) -> Self {
        ConfigError::Logging {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn websocket(message: impl Into<String>) -> Self {
        ConfigError::WebSocket {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
