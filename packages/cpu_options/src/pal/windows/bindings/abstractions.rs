use std::fmt::Debug;

use windows::Win32::System::Threading::PROCESS_CREATION_FLAGS;
use windows::core::Result;

/// Bindings for FFI calls into external libraries (either provided by
/// operating system or not).
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    // GetProcessAffinityMask() for the current process; returns the
    // (process, system) mask pair.
    fn get_process_affinity_mask(&self) -> Result<(usize, usize)>;

    // SetProcessAffinityMask() for the current process.
    fn set_process_affinity_mask(&self, mask: usize) -> Result<()>;

    // SetPriorityClass() for the current process.
    fn set_priority_class(&self, priority_class: PROCESS_CREATION_FLAGS) -> Result<()>;
}
