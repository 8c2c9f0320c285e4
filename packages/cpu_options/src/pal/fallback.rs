use std::io;
use std::num::NonZeroUsize;
use std::sync::OnceLock;

use crate::pal::{Platform, ProcessAffinity};
use crate::{AffinityMask, PriorityClass};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

static PROCESSOR_COUNT: OnceLock<usize> = OnceLock::new();

/// Fallback platform implementation for operating systems without native
/// support.
///
/// The affinity query is derived from `std::thread::available_parallelism()`
/// and both change operations report success without taking effect. Hosts on
/// unsupported platforms keep working, just without the tuning.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

fn processor_count() -> usize {
    *PROCESSOR_COUNT.get_or_init(|| {
        std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    })
}

impl Platform for BuildTargetPlatform {
    fn process_affinity(&self) -> io::Result<ProcessAffinity> {
        let count = processor_count().min(usize::BITS as usize);

        // count is at least 1, so the shift stays in range.
        let mask = AffinityMask::new(usize::MAX >> (usize::BITS as usize - count));

        Ok(ProcessAffinity {
            process: mask,
            system: mask,
        })
    }

    fn set_process_affinity(&self, _mask: AffinityMask) -> io::Result<()> {
        Ok(())
    }

    fn set_priority_class(&self, _class: PriorityClass) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_masks_are_nonempty_and_equal() {
        let affinity = BUILD_TARGET_PLATFORM.process_affinity().unwrap();

        assert!(!affinity.system.is_empty());
        assert_eq!(affinity.process, affinity.system);
    }

    #[test]
    fn changes_succeed_without_effect() {
        BUILD_TARGET_PLATFORM
            .set_process_affinity(AffinityMask::new(0b1))
            .unwrap();
        BUILD_TARGET_PLATFORM
            .set_priority_class(PriorityClass::High)
            .unwrap();
    }
}
