use std::str::FromStr;

use derive_more::Display;

use crate::Error;

/// Symbolic name of a process scheduling priority, as written in the options
/// file or passed via the host's `-CPUPriority` command-line switch.
///
/// The set of names is closed. Matching is case-insensitive and requires the
/// full name; prefixes and extensions are rejected.
///
/// `Low` is the one name that does not map 1:1 onto a scheduling class - see
/// [`PriorityName::to_class()`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the set of priority names is fixed by the host contract"
)]
pub enum PriorityName {
    /// Maps to [`PriorityClass::High`].
    #[display("High")]
    High,

    /// Maps to [`PriorityClass::AboveNormal`].
    #[display("AboveNormal")]
    AboveNormal,

    /// Maps to [`PriorityClass::Normal`].
    ///
    /// Normal is the default for a new process, but there is no harm in
    /// allowing it to be selected anyway.
    #[display("Normal")]
    Normal,

    /// Maps to [`PriorityClass::BelowNormal`].
    #[display("BelowNormal")]
    BelowNormal,

    /// Maps to [`PriorityClass::Idle`].
    #[display("Idle")]
    Idle,

    /// The one value the host itself understands on its command line.
    ///
    /// From the options file this aliases to [`PriorityClass::Idle`]. From the
    /// command line it is a no-op because the host has already applied it by
    /// the time this code runs.
    #[display("Low")]
    Low,
}

/// Where a priority name originated; selects which `Low` rule applies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "there are exactly two places a priority name can come from"
)]
pub enum PrioritySource {
    /// The name was supplied via the host's `-CPUPriority` switch.
    CommandLine,

    /// The name was read from the `[CPUOptions]` section of the options file.
    ConfigFile,
}

/// An OS-defined process scheduling class, ordered from least to most favored
/// by the scheduler.
///
/// How each class is realized is up to the platform layer (priority class
/// constants on Windows, nice values on Linux).
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(
    clippy::exhaustive_enums,
    reason = "mirroring the fixed tier structure of platform scheduling APIs"
)]
pub enum PriorityClass {
    /// Runs only when the system is otherwise idle.
    #[display("Idle")]
    Idle,

    /// Scheduled less favorably than the default.
    #[display("BelowNormal")]
    BelowNormal,

    /// The default scheduling class for a new process.
    #[display("Normal")]
    Normal,

    /// Scheduled more favorably than the default.
    #[display("AboveNormal")]
    AboveNormal,

    /// Scheduled ahead of all ordinary processes.
    #[display("High")]
    High,
}

const NAMES: [(&str, PriorityName); 6] = [
    ("High", PriorityName::High),
    ("AboveNormal", PriorityName::AboveNormal),
    ("Normal", PriorityName::Normal),
    ("BelowNormal", PriorityName::BelowNormal),
    ("Idle", PriorityName::Idle),
    ("Low", PriorityName::Low),
];

impl FromStr for PriorityName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        // eq_ignore_ascii_case() only matches equal-length strings, so partial
        // and extended names fall through to the error below.
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, value)| *value)
            .ok_or_else(|| Error::UnsupportedPriority {
                name: s.to_string(),
            })
    }
}

impl PriorityName {
    /// Resolves the name to the scheduling class to apply, given where the
    /// name came from.
    ///
    /// `None` means no change should be made: `Low` from the command line is
    /// assumed to have been applied by the host before this code runs.
    #[must_use]
    pub fn to_class(self, source: PrioritySource) -> Option<PriorityClass> {
        match self {
            Self::High => Some(PriorityClass::High),
            Self::AboveNormal => Some(PriorityClass::AboveNormal),
            Self::Normal => Some(PriorityClass::Normal),
            Self::BelowNormal => Some(PriorityClass::BelowNormal),
            Self::Idle => Some(PriorityClass::Idle),
            Self::Low => match source {
                PrioritySource::CommandLine => None,
                PrioritySource::ConfigFile => Some(PriorityClass::Idle),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_except_low_resolves_identically_from_both_sources() {
        for name in [
            PriorityName::High,
            PriorityName::AboveNormal,
            PriorityName::Normal,
            PriorityName::BelowNormal,
            PriorityName::Idle,
        ] {
            let from_command_line = name.to_class(PrioritySource::CommandLine);
            let from_config_file = name.to_class(PrioritySource::ConfigFile);

            assert!(from_command_line.is_some());
            assert_eq!(from_command_line, from_config_file);
        }
    }

    #[test]
    fn low_from_command_line_is_a_noop() {
        assert_eq!(PriorityName::Low.to_class(PrioritySource::CommandLine), None);
    }

    #[test]
    fn low_from_config_file_aliases_idle() {
        assert_eq!(
            PriorityName::Low.to_class(PrioritySource::ConfigFile),
            Some(PriorityClass::Idle)
        );
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        assert_eq!("high".parse::<PriorityName>().unwrap(), PriorityName::High);
        assert_eq!("HIGH".parse::<PriorityName>().unwrap(), PriorityName::High);
        assert_eq!("High".parse::<PriorityName>().unwrap(), PriorityName::High);
        assert_eq!(
            "aBoVeNoRmAl".parse::<PriorityName>().unwrap(),
            PriorityName::AboveNormal
        );
    }

    #[test]
    fn partial_and_extended_names_are_rejected() {
        for invalid in ["Hi", "Highest", "Norm", "Normal ", " Idle", "Lo", ""] {
            invalid.parse::<PriorityName>().unwrap_err();
        }
    }

    #[test]
    fn rejection_names_the_offending_value() {
        let error = "Turbo".parse::<PriorityName>().unwrap_err();

        assert!(error.to_string().contains("Turbo"));
    }

    #[test]
    fn classes_are_ordered_by_scheduler_favor() {
        assert!(PriorityClass::Idle < PriorityClass::BelowNormal);
        assert!(PriorityClass::BelowNormal < PriorityClass::Normal);
        assert!(PriorityClass::Normal < PriorityClass::AboveNormal);
        assert!(PriorityClass::AboveNormal < PriorityClass::High);
    }
}
