use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// Initialize the fern logger.
///
/// Lines read `[time - LEVEL] [TAG] message [file:line]`, where the tag
/// names the relay stage that logged it (see [`stage_tag`]). Colors apply
/// to stdout only; a log file always gets plain text.
pub fn initialize(
    log_level: relay_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let colors = (colored && log_file.is_none()).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    let dispatch = Dispatch::new()
        .level(log_level.filter())
        .format(move |out, message, record| match colors {
            Some(colors) => out.finish(format_args!(
                "{}",
                LogLine::new(message, record, colors.color(record.level()))
            )),
            None => out.finish(format_args!(
                "{}",
                LogLine::new(message, record, record.level())
            )),
        });

    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|source| ServerError::LogFile {
                    path: log_path.clone(),
                    source,
                })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: e.to_string(),
    })?;

    match log_file {
        Some(path) => info!("Logger initialized: level={log_level}, file={}", path.display()),
        None => info!("Logger initialized: level={log_level}, stdout"),
    }

    Ok(())
}

/// Stage tag for a log target (module path)
pub fn stage_tag(target: &str) -> &'static str {
    let module = target.split("::").take(2).collect::<Vec<_>>();
    match module.as_slice() {
        ["relay_ws", "notification_broadcaster"] => "SEND",
        ["relay_ws", "shutdown_coordinator"] => "SHUTDOWN",
        ["relay_ws", ..] => "WS",
        ["relay_server", "api"] => "HTTP",
        ["relay_server"] | ["relay_server", "logger"] => "START",
        ["relay_config", ..] => "CONFIG",
        _ => "APP",
    }
}

/// One formatted log line
struct LogLine<'a, L> {
    message: &'a fmt::Arguments<'a>,
    record: &'a Record<'a>,
    level: L,
}

impl<'a, L: fmt::Display> LogLine<'a, L> {
    fn new(message: &'a fmt::Arguments<'a>, record: &'a Record<'a>, level: L) -> Self {
        Self {
            message,
            record,
            level,
        }
    }
}

impl<L: fmt::Display> fmt::Display for LogLine<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} - {}] [{}] {} [{}:{}]",
            humantime::format_rfc3339(SystemTime::now()),
            self.level,
            stage_tag(self.record.target()),
            self.message,
            self.record.file().unwrap_or("unknown"),
            self.record.line().unwrap_or(0),
        )
    }
}
