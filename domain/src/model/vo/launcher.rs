use super::SettingsGroup;
use crate::LaunchError;

pub const DEFAULT_SUBMIT_CMD: &str = "sbatch";

/// Typed view of the `launcher` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherOptions {
    /// Print the script and ask before submitting
    pub confirm: bool,
    /// Inserted verbatim before the invocation line
    pub preamble: String,
    /// Prefixed to the module name to form the command
    pub cmd_prefix: String,
    /// Scheduler submission command, followed by the script path
    pub submit_cmd: String,
    /// Stop after printing the script
    pub dry_run: bool,
}

impl TryFrom<&SettingsGroup> for LauncherOptions {
    type Error = LaunchError;

    fn try_from(settings: &SettingsGroup) -> Result<Self, Self::Error> {
        let required = |key: &'static str| {
            settings.get(key).cloned().ok_or(LaunchError::MissingLauncherOption(key))
        };

        let confirm = parse_flag("confirm", &required("confirm")?)?;
        let preamble = required("preamble")?;
        let cmd_prefix = required("cmd_prefix")?;
        let submit_cmd = match settings.get("submit_cmd") {
            Some(cmd) if cmd.trim().is_empty() => {
                return Err(LaunchError::EmptyLauncherOption("submit_cmd"))
            }
            Some(cmd) => cmd.clone(),
            None => DEFAULT_SUBMIT_CMD.to_owned(),
        };
        let dry_run = match settings.get("dry_run") {
            Some(value) => parse_flag("dry_run", value)?,
            None => false,
        };

        Ok(Self {
            confirm,
            preamble,
            cmd_prefix,
            submit_cmd,
            dry_run,
        })
    }
}

/// Boolean-like strings, compared case-insensitively.
pub fn parse_flag(key: &'static str, value: &str) -> Result<bool, LaunchError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(LaunchError::InvalidFlag {
            key,
            value: value.to_owned(),
        }),
    }
}
