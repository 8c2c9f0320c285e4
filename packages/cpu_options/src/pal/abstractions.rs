use std::fmt::Debug;
use std::io;

use crate::{AffinityMask, PriorityClass};

/// The affinity masks of the current process, as reported by the operating
/// system in a single query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ProcessAffinity {
    /// Mask of processors the process is currently allowed to run on.
    pub(crate) process: AffinityMask,

    /// Mask of processors the operating system reports as usable system-wide.
    pub(crate) system: AffinityMask,
}

/// The operating system calls used to adjust the current process.
///
/// All such calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    fn process_affinity(&self) -> io::Result<ProcessAffinity>;

    fn set_process_affinity(&self, mask: AffinityMask) -> io::Result<()>;

    fn set_priority_class(&self, class: PriorityClass) -> io::Result<()>;
}
