use domain::model::vo::{ConfigLayer, SettingsSection};
use domain::LaunchError;
use indexmap::IndexMap;

/// The module to launch and the settings given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliInvocation {
    pub module: String,
    pub overrides: ConfigLayer,
}

struct Flag {
    section: SettingsSection,
    key: String,
    has_value: bool,
}

/// Parse `<module> [--key value [value ...]]*`.
///
/// `--slurm.<key>` and `--launcher.<key>` take their last value. Every other key
/// is a script argument whose values are joined with a single space; a script
/// argument given without values is kept with an empty value.
pub fn parse_args<I>(args: I) -> Result<CliInvocation, LaunchError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let module = args.next().ok_or(LaunchError::MissingModule)?;

    let mut overrides = ConfigLayer::default();
    let mut script_values: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut current: Option<Flag> = None;

    for token in args {
        if let Some(name) = token.strip_prefix("--") {
            let (section, key) = route(name)?;
            if let Some(flag) = current.take() {
                warn_if_unset(&flag);
            }
            if section == SettingsSection::Script {
                script_values.insert(key.clone(), Vec::new());
            }
            current = Some(Flag {
                section,
                key,
                has_value: false,
            });
            continue;
        }

        let Some(flag) = current.as_mut() else {
            return Err(LaunchError::UnexpectedPositional(token));
        };
        flag.has_value = true;
        match flag.section {
            SettingsSection::Script => {
                script_values.entry(flag.key.clone()).or_default().push(token);
            }
            section => {
                overrides.section_mut(section).insert(flag.key.clone(), token);
            }
        }
    }
    if let Some(flag) = current {
        warn_if_unset(&flag);
    }

    overrides
        .script
        .extend(script_values.into_iter().map(|(key, values)| (key, values.join(" "))));

    tracing::debug!(
        module = %module,
        slurm = overrides.slurm.len(),
        script = overrides.script.len(),
        launcher = overrides.launcher.len(),
        "Parsed command line"
    );
    Ok(CliInvocation { module, overrides })
}

fn route(name: &str) -> Result<(SettingsSection, String), LaunchError> {
    let (section, key) = match name.split_once('.') {
        Some((prefix, key)) => match prefix.parse() {
            Ok(section @ (SettingsSection::Slurm | SettingsSection::Launcher)) => (section, key),
            _ => (SettingsSection::Script, name),
        },
        None => (SettingsSection::Script, name),
    };
    if key.is_empty() {
        return Err(LaunchError::EmptyKey(format!("--{name}")));
    }
    Ok((section, key.to_owned()))
}

fn warn_if_unset(flag: &Flag) {
    if flag.section != SettingsSection::Script && !flag.has_value {
        tracing::warn!("--{}.{} was given without a value and is ignored", flag.section, flag.key);
    }
}
