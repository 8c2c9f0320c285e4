//! Startup CPU configuration for a host process.
//!
//! This crate is the in-process extension a host application (typically a game
//! executable) loads to override two operating-system-level process settings
//! during startup: the set of CPU cores the process may run on, and the OS
//! scheduling priority class of the process.
//!
//! Both settings are configuration-driven, with optional override via
//! command-line switches the host already parses for its own purposes:
//!
//! * When `-CPUCount:<n>` is present on the command line, the core count is
//!   assumed to be handled elsewhere and no affinity change is made. Otherwise
//!   the process is pinned to the first usable core reported by the operating
//!   system.
//! * When `-CPUPriority:<name>` is present, its value selects the priority
//!   class. Otherwise the `Priority` key of the `[CPUOptions]` section of an
//!   INI options file is consulted.
//!
//! Every failure along the way (unreadable options file, unrecognized priority
//! name, rejected OS call) is written to the log and leaves that one setting
//! at its OS/host-assigned default. Nothing propagates into host code.
//!
//! # Basic usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cpu_options::{ArgsCommandLine, CpuOptions};
//!
//! let command_line = ArgsCommandLine::from_env();
//!
//! CpuOptions::new().apply(&command_line, Path::new("cpu_options.ini"));
//! ```
//!
//! # Operating system compatibility
//!
//! Affinity and priority changes are implemented for Windows and Linux. On
//! other operating systems a fallback implementation reports success without
//! taking effect, so hosts keep working, just without the tuning.

mod pal;

mod affinity;
mod command_line;
mod config_file;
mod error;
mod options;
mod priority;

pub mod logging;

pub use affinity::*;
pub use command_line::*;
pub use config_file::*;
pub use error::*;
pub use options::*;
pub use priority::*;
