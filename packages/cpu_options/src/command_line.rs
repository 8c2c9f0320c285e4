/// Read-only view of the command line the host was started with.
///
/// The host owns argument parsing; this trait only exposes whether a named
/// switch was supplied and what value it carried. Implement it to adapt
/// whatever argument accessor the host provides.
pub trait CommandLine {
    /// Returns the value of the named switch if it was supplied, `None`
    /// otherwise.
    ///
    /// Switch names are matched case-insensitively. A switch supplied without
    /// a value yields an empty string.
    fn switch_value(&self, name: &str) -> Option<String>;
}

/// A [`CommandLine`] backed by a parsed argument list, using the host's
/// `-Name:Value` switch syntax.
///
/// Tokens that do not start with `-` are positional arguments and are not
/// visible through this view. When a switch is supplied more than once, the
/// first occurrence wins.
#[derive(Clone, Debug, Default)]
pub struct ArgsCommandLine {
    switches: Vec<(String, String)>,
}

impl ArgsCommandLine {
    /// Captures the switches of the current process, skipping the executable
    /// path in the first argument.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// Parses switches out of an argument list.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let switches = args
            .into_iter()
            .filter_map(|arg| {
                let switch = arg.as_ref().strip_prefix('-')?;

                Some(match switch.split_once(':') {
                    Some((name, value)) => (name.to_string(), value.to_string()),
                    None => (switch.to_string(), String::new()),
                })
            })
            .collect();

        Self { switches }
    }
}

impl CommandLine for ArgsCommandLine {
    fn switch_value(&self, name: &str) -> Option<String> {
        self.switches
            .iter()
            .find(|(switch, _)| switch.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_with_value_is_found() {
        let command_line = ArgsCommandLine::from_args(["-CPUCount:4"]);

        assert_eq!(command_line.switch_value("CPUCount"), Some("4".to_string()));
    }

    #[test]
    fn switch_without_value_yields_empty_string() {
        let command_line = ArgsCommandLine::from_args(["-CPUPriority"]);

        assert_eq!(
            command_line.switch_value("CPUPriority"),
            Some(String::new())
        );
    }

    #[test]
    fn switch_lookup_is_case_insensitive() {
        let command_line = ArgsCommandLine::from_args(["-cpupriority:high"]);

        assert_eq!(
            command_line.switch_value("CPUPriority"),
            Some("high".to_string())
        );
    }

    #[test]
    fn absent_switch_is_none() {
        let command_line = ArgsCommandLine::from_args(["-CPUCount:4"]);

        assert_eq!(command_line.switch_value("CPUPriority"), None);
    }

    #[test]
    fn positional_arguments_are_not_switches() {
        let command_line = ArgsCommandLine::from_args(["save.dat", "CPUCount:4"]);

        assert_eq!(command_line.switch_value("CPUCount"), None);
        assert_eq!(command_line.switch_value("save.dat"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let command_line = ArgsCommandLine::from_args(["-CPUCount:2", "-CPUCount:8"]);

        assert_eq!(command_line.switch_value("CPUCount"), Some("2".to_string()));
    }

    #[test]
    fn value_may_contain_further_colons() {
        let command_line = ArgsCommandLine::from_args(["-UserDir:C:\\Games\\Saves"]);

        assert_eq!(
            command_line.switch_value("UserDir"),
            Some("C:\\Games\\Saves".to_string())
        );
    }

    #[test]
    fn empty_argument_list_has_no_switches() {
        let command_line = ArgsCommandLine::from_args::<_, &str>([]);

        assert_eq!(command_line.switch_value("CPUCount"), None);
    }
}
