use indexmap::IndexMap;

/// Flat key/value settings. Values are kept exactly as written, and the
/// iteration order is the order in which keys were first inserted.
pub type SettingsGroup = IndexMap<String, String>;

/// Script arguments after splitting every value on `,`.
pub type ArgumentLists = IndexMap<String, Vec<String>>;

/// One chosen value per script argument.
pub type Combination = IndexMap<String, String>;

/// The named sections of a configuration layer.
///
/// The lowercase names double as the prefixes recognised on the command line,
/// e.g. `--slurm.time` or `--launcher.confirm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SettingsSection {
    /// Scheduler directives, rendered as `#SBATCH --key=value`
    Slurm,
    /// Arguments forwarded to the launched module
    Script,
    /// Options of the launcher itself
    Launcher,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::SettingsSection;

    #[test]
    fn test_prefix() {
        assert_eq!(SettingsSection::from_str("slurm"), Ok(SettingsSection::Slurm));
        assert_eq!(SettingsSection::from_str("launcher"), Ok(SettingsSection::Launcher));
        assert!(SettingsSection::from_str("Slurm").is_err());
        assert_eq!(SettingsSection::Script.to_string(), "script");
    }
}
