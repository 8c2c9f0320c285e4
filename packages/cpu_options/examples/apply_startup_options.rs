//! Mirrors the startup sequence of a host shim: the log and the options file
//! live next to the executable, the switches come from the real command line.
//!
//! Try it with `-CPUCount:4` or `-CPUPriority:High` to see the overrides in
//! the log.

use std::path::{Path, PathBuf};

use cpu_options::{ArgsCommandLine, CpuOptions};

fn main() {
    let directory = std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    if let Err(error) = cpu_options::logging::init(&directory, "cpu_options.log") {
        eprintln!("{error}");
    }

    let command_line = ArgsCommandLine::from_env();

    CpuOptions::new().apply(&command_line, &directory.join("cpu_options.ini"));
}
