use std::io;

use thiserror::Error;

/// Errors that can occur while resolving or applying the CPU options.
///
/// All of these are non-fatal to the host process: [`CpuOptions::apply()`]
/// catches each at its resolution boundary, writes it to the log and leaves
/// the affected setting at its OS/host-assigned default.
///
/// [`CpuOptions::apply()`]: crate::CpuOptions::apply
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A priority name did not match any of the supported values.
    #[error("unsupported CPU priority value: {name}")]
    UnsupportedPriority {
        /// The offending value, exactly as supplied by the command line or the
        /// options file.
        name: String,
    },

    /// The options file could not be read or did not contain the expected key.
    #[error("failed to read the options file: {source}")]
    OptionsFile {
        /// The underlying configuration error.
        #[source]
        source: config::ConfigError,
    },

    /// The operating system rejected an affinity or priority change.
    #[error("{operation} failed: {source}")]
    Os {
        /// The OS operation that failed.
        operation: &'static str,

        /// The error reported by the operating system.
        #[source]
        source: io::Error,
    },

    /// The log output could not be initialized.
    #[error("failed to initialize logging: {message}")]
    Logging {
        /// A human-readable description of the problem.
        message: String,
    },
}

/// A specialized `Result` type for CPU options operations, returning the
/// crate's [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
