use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

use windows::Win32::System::Threading::PROCESS_CREATION_FLAGS;
use windows::core::Result;

#[cfg(test)]
use crate::pal::windows::MockBindings;
use crate::pal::windows::{Bindings, BuildTargetBindings};

/// Enum to hide the real/mock choice behind a single wrapper type.
#[derive(Clone)]
pub(crate) enum BindingsFacade {
    Target(&'static BuildTargetBindings),

    #[cfg(test)]
    Mock(Arc<MockBindings>),
}

impl BindingsFacade {
    pub(crate) const fn target() -> Self {
        Self::Target(&BuildTargetBindings)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockBindings) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

impl Bindings for BindingsFacade {
    fn get_process_affinity_mask(&self) -> Result<(usize, usize)> {
        match self {
            Self::Target(bindings) => bindings.get_process_affinity_mask(),
            #[cfg(test)]
            Self::Mock(mock) => mock.get_process_affinity_mask(),
        }
    }

    fn set_process_affinity_mask(&self, mask: usize) -> Result<()> {
        match self {
            Self::Target(bindings) => bindings.set_process_affinity_mask(mask),
            #[cfg(test)]
            Self::Mock(mock) => mock.set_process_affinity_mask(mask),
        }
    }

    fn set_priority_class(&self, priority_class: PROCESS_CREATION_FLAGS) -> Result<()> {
        match self {
            Self::Target(bindings) => bindings.set_priority_class(priority_class),
            #[cfg(test)]
            Self::Mock(mock) => mock.set_priority_class(priority_class),
        }
    }
}

#[cfg(test)]
impl From<MockBindings> for BindingsFacade {
    fn from(mock: MockBindings) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

impl Debug for BindingsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Mock(inner) => inner.fmt(f),
        }
    }
}
