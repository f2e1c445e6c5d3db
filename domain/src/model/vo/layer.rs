use serde::{Deserialize, Deserializer};

use super::{ArgumentLists, SettingsGroup, SettingsSection};

/// One source of configuration: the packaged default, the local file or the
/// command line.
///
/// A section that is missing, or written without a body, is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    #[serde(default, deserialize_with = "nullable")]
    pub slurm: SettingsGroup,

    #[serde(default, deserialize_with = "nullable")]
    pub script: SettingsGroup,

    #[serde(default, deserialize_with = "nullable")]
    pub launcher: SettingsGroup,
}

/// Settings after all layers were applied and script arguments were split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedConfig {
    pub directives: SettingsGroup,
    pub arguments: ArgumentLists,
    pub launcher: SettingsGroup,
}

impl ConfigLayer {
    pub fn section(&self, section: SettingsSection) -> &SettingsGroup {
        match section {
            SettingsSection::Slurm => &self.slurm,
            SettingsSection::Script => &self.script,
            SettingsSection::Launcher => &self.launcher,
        }
    }

    pub fn section_mut(&mut self, section: SettingsSection) -> &mut SettingsGroup {
        match section {
            SettingsSection::Slurm => &mut self.slurm,
            SettingsSection::Script => &mut self.script,
            SettingsSection::Launcher => &mut self.launcher,
        }
    }

    /// Apply `other` on top of `self`, key by key.
    ///
    /// Overwritten keys keep their original position; new keys are appended.
    pub fn overlay(&mut self, other: ConfigLayer) {
        self.slurm.extend(other.slurm);
        self.script.extend(other.script);
        self.launcher.extend(other.launcher);
    }

    pub fn is_empty(&self) -> bool {
        self.slurm.is_empty() && self.script.is_empty() && self.launcher.is_empty()
    }
}

fn nullable<'de, D>(deserializer: D) -> Result<SettingsGroup, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SettingsGroup>::deserialize(deserializer)?.unwrap_or_default())
}
