use crate::error::{CliError, Result as CliErrorResult};

use std::path::Path;
use std::time::SystemTime;

use fd_config::LoggingConfig;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;

/// Install the global logger.
///
/// Records go to `log_file` when given, otherwise to stderr so that command
/// output on stdout stays valid JSON. Colors apply to stderr only.
pub fn initialize(logging: &LoggingConfig, log_file: Option<&Path>) -> CliErrorResult<()> {
    let level_filter = logging.level.0;
    let colors = (logging.colored && log_file.is_none()).then(level_colors);

    let sink = Dispatch::new().format(move |out, message, record| {
        let date = humantime::format_rfc3339_seconds(SystemTime::now());
        match &colors {
            Some(colors) => out.finish(format_args!(
                "[{date} - {}] {message}",
                colors.color(record.level())
            )),
            None => out.finish(format_args!("[{date} - {}] {message}", record.level())),
        }
    });

    let sink = match log_file {
        Some(path) => sink.chain(open_log_file(path)?),
        None => sink.chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(sink)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    debug!(
        "Logger initialized: level={level_filter:?}, sink={}",
        log_file.map_or("stderr".into(), |path| path.display().to_string())
    );
    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn open_log_file(path: &Path) -> CliErrorResult<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::Logger {
            message: format!("Failed to open log file {}: {e}", path.display()),
        })
}
