use std::path::Path;

use config::{Config, File, FileFormat};

use crate::{Error, Result};

/// The key holding the priority name, as a `section.key` path into the INI
/// structure.
pub(crate) const PRIORITY_KEY: &str = "CPUOptions.Priority";

/// The persisted options file, an INI-format text file shipped next to the
/// extension.
///
/// The priority is read from the `Priority` key of the `[CPUOptions]` section.
/// The recommended shipped value is `AboveNormal`:
///
/// ```ini
/// [CPUOptions]
/// Priority = AboveNormal
/// ```
#[derive(Clone, Debug)]
pub struct OptionsFile {
    settings: Config,
}

impl OptionsFile {
    /// Loads and parses the options file at the given path.
    ///
    /// A missing or malformed file is an error; the caller decides whether
    /// that is fatal (for this crate it never is - the setting is simply left
    /// alone).
    pub fn load(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini))
            .build()
            .map_err(|source| Error::OptionsFile { source })?;

        Ok(Self { settings })
    }

    /// Returns the configured priority name.
    ///
    /// Absence of the `[CPUOptions]` section or the `Priority` key is an
    /// error; no default is invented here.
    pub fn priority(&self) -> Result<String> {
        self.settings
            .get_string(PRIORITY_KEY)
            .map_err(|source| Error::OptionsFile { source })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_options_file(contents: &str) -> (TempDir, std::path::PathBuf) {
        let directory = TempDir::new().unwrap();
        let path = directory.path().join("cpu_options.ini");

        fs::write(&path, contents).unwrap();

        (directory, path)
    }

    #[test]
    fn reads_priority_from_cpu_options_section() {
        let (_directory, path) = write_options_file("[CPUOptions]\nPriority = AboveNormal\n");

        let options = OptionsFile::load(&path).unwrap();

        assert_eq!(options.priority().unwrap(), "AboveNormal");
    }

    #[test]
    fn priority_value_is_passed_through_verbatim() {
        // Validation of the name happens later, at resolution time.
        let (_directory, path) = write_options_file("[CPUOptions]\nPriority = Turbo\n");

        let options = OptionsFile::load(&path).unwrap();

        assert_eq!(options.priority().unwrap(), "Turbo");
    }

    #[test]
    fn missing_file_is_error() {
        let directory = TempDir::new().unwrap();

        let result = OptionsFile::load(&directory.path().join("does_not_exist.ini"));

        assert!(matches!(result, Err(Error::OptionsFile { .. })));
    }

    #[test]
    fn missing_key_is_error() {
        let (_directory, path) = write_options_file("[CPUOptions]\nSomethingElse = 1\n");

        let options = OptionsFile::load(&path).unwrap();

        assert!(matches!(
            options.priority(),
            Err(Error::OptionsFile { .. })
        ));
    }

    #[test]
    fn missing_section_is_error() {
        let (_directory, path) = write_options_file("[Graphics]\nPriority = High\n");

        let options = OptionsFile::load(&path).unwrap();

        assert!(matches!(
            options.priority(),
            Err(Error::OptionsFile { .. })
        ));
    }

    #[test]
    fn empty_file_is_missing_key() {
        let (_directory, path) = write_options_file("");

        let options = OptionsFile::load(&path).unwrap();

        assert!(options.priority().is_err());
    }
}
