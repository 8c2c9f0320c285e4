use std::path::Path;

use tracing::{debug, error, info};

use crate::pal::{Platform, PlatformFacade};
use crate::{
    AffinityMask, CommandLine, Error, OptionsFile, PriorityClass, PriorityName, PrioritySource,
    Result,
};

/// Name of the host switch that overrides the core count. Its presence alone
/// disables the single-core pin; the value is only logged.
pub const CPU_COUNT_SWITCH: &str = "CPUCount";

/// Name of the host switch that carries a priority name, overriding the
/// options file.
pub const CPU_PRIORITY_SWITCH: &str = "CPUPriority";

/// Applies the configured CPU affinity and scheduling priority to the current
/// process.
///
/// Both settings are resolved once, during host startup, and applied
/// independently of each other:
///
/// * Affinity: unless the host command line contains `-CPUCount`, the process
///   is pinned to the first core enabled in the system affinity mask.
/// * Priority: the `-CPUPriority` switch wins over the `Priority` key of the
///   options file's `[CPUOptions]` section.
///
/// Failures are written to the log and leave the affected setting at its
/// OS/host-assigned default; [`apply()`](Self::apply) never reports them to
/// the caller.
#[derive(Debug)]
pub struct CpuOptions {
    platform: PlatformFacade,
}

impl CpuOptions {
    /// Creates an instance operating on the real current process.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pal(PlatformFacade::real())
    }

    pub(crate) fn from_pal(platform: PlatformFacade) -> Self {
        Self { platform }
    }

    /// Resolves and applies both settings.
    ///
    /// The options file is only opened when the priority is not already
    /// supplied on the command line.
    pub fn apply(&self, command_line: &impl CommandLine, options_file_path: &Path) {
        match command_line.switch_value(CPU_COUNT_SWITCH) {
            Some(cpu_count) => {
                info!(
                    "skipped forcing the process to a single CPU core because \
                     the command line contains -{CPU_COUNT_SWITCH}:{cpu_count}"
                );
            }
            None => match self.pin_to_first_usable_processor() {
                Ok(mask) => info!("configured the process to use 1 CPU core (mask {mask})"),
                Err(error) => error!(
                    "an OS error occurred when configuring the process to use 1 CPU core: {error}"
                ),
            },
        }

        match command_line.switch_value(CPU_PRIORITY_SWITCH) {
            Some(priority) => self.apply_priority(&priority, PrioritySource::CommandLine),
            None => match Self::configured_priority(options_file_path) {
                Ok(priority) => self.apply_priority(&priority, PrioritySource::ConfigFile),
                Err(error) => error!("error when setting the CPU priority: {error}"),
            },
        }
    }

    /// Pins the process to the first core enabled in the system affinity mask
    /// and returns the mask that was applied.
    fn pin_to_first_usable_processor(&self) -> Result<AffinityMask> {
        let affinity = self
            .platform
            .process_affinity()
            .map_err(|source| Error::Os {
                operation: "affinity query",
                source,
            })?;

        debug!(
            process = %affinity.process,
            system = %affinity.system,
            "queried affinity masks"
        );

        let first = affinity.system.lowest_set_bit();

        self.platform
            .set_process_affinity(first)
            .map_err(|source| Error::Os {
                operation: "affinity change",
                source,
            })?;

        Ok(first)
    }

    fn apply_priority(&self, name: &str, source: PrioritySource) {
        match self.resolve_and_set_priority(name, source) {
            Ok(Some(class)) => info!("set the process CPU priority to {class}"),
            Ok(None) => info!("the host already applied CPU priority {name}"),
            Err(error) => error!("error when setting the CPU priority: {error}"),
        }
    }

    /// Resolves a priority name and applies the resulting class, if any.
    ///
    /// `Ok(None)` means the name resolved to "make no change" (`Low` from the
    /// command line).
    fn resolve_and_set_priority(
        &self,
        name: &str,
        source: PrioritySource,
    ) -> Result<Option<PriorityClass>> {
        let name: PriorityName = name.parse()?;

        let Some(class) = name.to_class(source) else {
            return Ok(None);
        };

        self.platform
            .set_priority_class(class)
            .map_err(|source| Error::Os {
                operation: "priority change",
                source,
            })?;

        Ok(Some(class))
    }

    fn configured_priority(options_file_path: &Path) -> Result<String> {
        OptionsFile::load(options_file_path)?.priority()
    }
}

impl Default for CpuOptions {
    fn default() -> Self {
        Self::new()
    }
}
