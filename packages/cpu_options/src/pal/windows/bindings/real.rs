use windows::Win32::System::Threading::{
    GetCurrentProcess, GetProcessAffinityMask, PROCESS_CREATION_FLAGS, SetPriorityClass,
    SetProcessAffinityMask,
};
use windows::core::Result;

use crate::pal::windows::Bindings;

/// FFI bindings that target the real operating system that the build is
/// targeting.
///
/// You would only use different bindings in PAL unit tests that need to use
/// mock bindings. Even then, whenever possible, unit tests should use real
/// bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    fn get_process_affinity_mask(&self) -> Result<(usize, usize)> {
        let mut process_mask: usize = 0;
        let mut system_mask: usize = 0;

        // SAFETY: The current-process pseudo handle is always valid and the
        // out pointers reference live locals.
        unsafe {
            GetProcessAffinityMask(
                GetCurrentProcess(),
                &raw mut process_mask,
                &raw mut system_mask,
            )
        }?;

        Ok((process_mask, system_mask))
    }

    fn set_process_affinity_mask(&self, mask: usize) -> Result<()> {
        // SAFETY: The current-process pseudo handle is always valid.
        unsafe { SetProcessAffinityMask(GetCurrentProcess(), mask) }
    }

    fn set_priority_class(&self, priority_class: PROCESS_CREATION_FLAGS) -> Result<()> {
        // SAFETY: The current-process pseudo handle is always valid.
        unsafe { SetPriorityClass(GetCurrentProcess(), priority_class) }
    }
}
