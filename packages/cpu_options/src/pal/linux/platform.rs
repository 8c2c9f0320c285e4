use std::{io, mem};

use libc::cpu_set_t;

use crate::pal::linux::{Bindings, BindingsFacade};
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

/// Nice value applied for each scheduling class.
///
/// Linux has no process priority classes, so the Windows tiers are projected
/// onto the nice scale. Negative values require `CAP_SYS_NICE` or a matching
/// `RLIMIT_NICE`; failures surface through `setpriority()` like any other.
fn to_nice(class: PriorityClass) -> i32 {
    match class {
        PriorityClass::High => -10,
        PriorityClass::AboveNormal => -5,
        PriorityClass::Normal => 0,
        PriorityClass::BelowNormal => 5,
        PriorityClass::Idle => 19,
    }
}

fn cpu_set_to_mask(cpuset: &cpu_set_t) -> AffinityMask {
    let mut mask = 0_usize;

    // The mask covers the first usize::BITS processors; cpu_set_t is larger
    // (1024 CPUs) but a startup tool selecting the first usable core never
    // needs the tail.
    for index in 0..usize::BITS as usize {
        // SAFETY: index is within the bounds of cpu_set_t.
        if unsafe { libc::CPU_ISSET(index, cpuset) } {
            mask |= 1 << index;
        }
    }

    AffinityMask::new(mask)
}

fn mask_to_cpu_set(mask: AffinityMask) -> cpu_set_t {
    // SAFETY: All zeroes is a valid cpu_set_t.
    let mut cpuset: cpu_set_t = unsafe { mem::zeroed() };

    for index in 0..usize::BITS as usize {
        if mask.bits() & (1 << index) != 0 {
            // SAFETY: index is within the bounds of cpu_set_t.
            unsafe { libc::CPU_SET(index, &mut cpuset) };
        }
    }

    cpuset
}

impl Platform for BuildTargetPlatform {
    fn process_affinity(&self) -> io::Result<ProcessAffinity> {
        let cpuset = self.bindings.sched_getaffinity_current()?;
        let mask = cpu_set_to_mask(&cpuset);

        // sched_getaffinity() reports the allowed set; Linux has no separate
        // system-wide mask query, so the allowed set stands in for both.
        Ok(ProcessAffinity {
            process: mask,
            system: mask,
        })
    }

    fn set_process_affinity(&self, mask: AffinityMask) -> io::Result<()> {
        self.bindings
            .sched_setaffinity_current(&mask_to_cpu_set(mask))
    }

    fn set_priority_class(&self, class: PriorityClass) -> io::Result<()> {
        self.bindings.setpriority_current(to_nice(class))
    }
}
