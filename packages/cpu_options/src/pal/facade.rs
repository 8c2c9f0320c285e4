use std::fmt::Debug;
use std::io;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockPlatform;
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, Platform, ProcessAffinity};
use crate::{AffinityMask, PriorityClass};

/// Enum to hide the real/mock choice behind a single wrapper type.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Real(&'static BuildTargetPlatform),

    #[cfg(test)]
    Mock(Arc<MockPlatform>),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockPlatform) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

impl Platform for PlatformFacade {
    fn process_affinity(&self) -> io::Result<ProcessAffinity> {
        match self {
            Self::Real(platform) => platform.process_affinity(),
            #[cfg(test)]
            Self::Mock(platform) => platform.process_affinity(),
        }
    }

    fn set_process_affinity(&self, mask: AffinityMask) -> io::Result<()> {
        match self {
            Self::Real(platform) => platform.set_process_affinity(mask),
            #[cfg(test)]
            Self::Mock(platform) => platform.set_process_affinity(mask),
        }
    }

    fn set_priority_class(&self, class: PriorityClass) -> io::Result<()> {
        match self {
            Self::Real(platform) => platform.set_priority_class(class),
            #[cfg(test)]
            Self::Mock(platform) => platform.set_priority_class(class),
        }
    }
}

impl From<&'static BuildTargetPlatform> for PlatformFacade {
    fn from(platform: &'static BuildTargetPlatform) -> Self {
        Self::Real(platform)
    }
}

#[cfg(test)]
impl From<MockPlatform> for PlatformFacade {
    fn from(platform: MockPlatform) -> Self {
        Self::Mock(Arc::new(platform))
    }
}

impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Mock(inner) => inner.fmt(f),
        }
    }
}
