use std::io;

use windows::Win32::System::Threading::{
    ABOVE_NORMAL_PRIORITY_CLASS, BELOW_NORMAL_PRIORITY_CLASS, HIGH_PRIORITY_CLASS,
    IDLE_PRIORITY_CLASS, NORMAL_PRIORITY_CLASS, PROCESS_CREATION_FLAGS,
};

use crate::pal::windows::{Bindings, BindingsFacade};
use crate::pal::{Platform, ProcessAffinity};
use crate::{AffinityMask, PriorityClass};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::target());

#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
}

impl BuildTargetPlatform {
    pub(crate) const fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }
}

fn to_creation_flags(class: PriorityClass) -> PROCESS_CREATION_FLAGS {
    match class {
        PriorityClass::High => HIGH_PRIORITY_CLASS,
        PriorityClass::AboveNormal => ABOVE_NORMAL_PRIORITY_CLASS,
        PriorityClass::Normal => NORMAL_PRIORITY_CLASS,
        PriorityClass::BelowNormal => BELOW_NORMAL_PRIORITY_CLASS,
        PriorityClass::Idle => IDLE_PRIORITY_CLASS,
    }
}

impl Platform for BuildTargetPlatform {
    fn process_affinity(&self) -> io::Result<ProcessAffinity> {
        let (process, system) = self
            .bindings
            .get_process_affinity_mask()
            .map_err(io::Error::from)?;

        Ok(ProcessAffinity {
            process: AffinityMask::new(process),
            system: AffinityMask::new(system),
        })
    }

    fn set_process_affinity(&self, mask: AffinityMask) -> io::Result<()> {
        self.bindings
            .set_process_affinity_mask(mask.bits())
            .map_err(io::Error::from)
    }

    fn set_priority_class(&self, class: PriorityClass) -> io::Result<()> {
        self.bindings
            .set_priority_class(to_creation_flags(class))
            .map_err(io::Error::from)
    }
}
