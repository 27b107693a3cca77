//! File logging setup for debugging and error tracking.

use anyhow::Result;

use crate::config::LoggingConfig;

/// Install the global file logger.
///
/// A disabled configuration is a no-op, leaving `log` macros pointing at the
/// default silent logger. Calling this twice is an error (the global logger
/// can only be set once per process).
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {}: {} [{}]",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                message,
                record.target(),
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(&config.file)?)
        .apply()?;

    Ok(())
}
