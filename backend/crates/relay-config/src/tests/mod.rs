
use std::env;

use tempfile::TempDir;

const OVERRIDE_KEYS: [&str; 7] = [
    "PORT",
    "RELAY_SERVER_HOST",
    "RELAY_SERVER_PORT",
    "RELAY_LOG_LEVEL",
    "RELAY_LOG_COLORED",
    "RELAY_LOG_FILE",
    "RELAY_WS_SEND_BUFFER_SIZE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory with RELAY_CONFIG_DIR pointing at it and every
/// override variable cleared for the lifetime of the returned guards.
pub(crate) struct ConfigDirGuard {
    pub(crate) temp: TempDir,
    _dir: EnvGuard,
    _overrides: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> ConfigDirGuard {
    let temp = TempDir::new().unwrap();
    let dir = EnvGuard::set("RELAY_CONFIG_DIR", temp.path().to_str().unwrap());
    let overrides = OVERRIDE_KEYS.into_iter().map(EnvGuard::remove).collect();

    ConfigDirGuard {
        temp,
        _dir: dir,
        _overrides: overrides,
    }
}
