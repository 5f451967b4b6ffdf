// Logging setup
// The terminal is owned by the alternate screen, so logs go to a file

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::app_config::LoggingSettings;

/// Install the global subscriber writing to `settings.file`
///
/// Keep the returned guard alive for the lifetime of the program; dropping it
/// flushes and stops the background writer.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<WorkerGuard> {
    let path = Path::new(&settings.file);
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file '{}' has no file name", settings.file))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()?;

    Ok(guard)
}
