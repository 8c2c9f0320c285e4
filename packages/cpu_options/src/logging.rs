//! Log output setup for hosts that do not install their own `tracing`
//! subscriber.
//!
//! The log is a line-oriented text file, appended to for the lifetime of the
//! process and not consumed programmatically by anything else. Hosts that
//! already run a subscriber can skip this module entirely; every event this
//! crate emits goes through the ordinary `tracing` macros.

use std::path::Path;

use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use crate::{Error, Result};

/// Installs a global subscriber writing to `<directory>/<file_name>` and emits
/// a header line naming this crate and its version.
///
/// Call once, before [`CpuOptions::apply()`](crate::CpuOptions::apply).
/// Returns [`Error::Logging`] when a global subscriber is already installed.
pub fn init(directory: &Path, file_name: &str) -> Result<()> {
    let appender = tracing_appender::rolling::never(directory, file_name);

    tracing_subscriber::fmt()
        .with_writer(appender)
        .with_ansi(false)
        .with_max_level(LevelFilter::INFO)
        .try_init()
        .map_err(|error| Error::Logging {
            message: error.to_string(),
        })?;

    info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn second_init_reports_existing_subscriber() {
        let directory = TempDir::new().unwrap();

        // The first call may itself lose the race against a subscriber
        // installed elsewhere in the test process; only the second call has a
        // guaranteed outcome.
        drop(init(directory.path(), "first.log"));

        let result = init(directory.path(), "second.log");

        assert!(matches!(result, Err(Error::Logging { .. })));
    }
}
