pub mod formats;

use flexi_logger::{Logger, LoggerHandle};

use crate::Error;

/// Starts the logger on stderr so stdout stays clean for chat output.
///
/// The returned handle must be kept alive for the life of the process.
pub fn init() -> Result<LoggerHandle, Error> {
    let handle = Logger::try_with_env_or_str("warn")?
        .format(formats::cli_format)
        .log_to_stderr()
        .start()?;

    Ok(handle)
}
