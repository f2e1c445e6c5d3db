use domain::model::vo::{ArgumentLists, ConfigLayer, MergedConfig, SettingsGroup};

/// Merge the packaged default, the optional local file and the command line,
/// in that order of increasing precedence.
pub fn merge(
    default: ConfigLayer,
    file: Option<ConfigLayer>,
    overrides: ConfigLayer,
) -> MergedConfig {
    let mut merged = default;
    match file {
        Some(file) => merged.overlay(file),
        None => tracing::debug!("No local configuration, using packaged defaults"),
    }
    merged.overlay(overrides);

    let ConfigLayer {
        slurm,
        script,
        launcher,
    } = merged;
    MergedConfig {
        arguments: split_arguments(&script),
        directives: slurm,
        launcher,
    }
}

/// Split every script argument on `,`. A value without a comma becomes a
/// single-element list.
pub fn split_arguments(script: &SettingsGroup) -> ArgumentLists {
    script
        .iter()
        .map(|(key, value)| (key.clone(), value.split(',').map(str::to_owned).collect()))
        .collect()
}


#[cfg(test)]
mod proptests {
    use domain::model::vo::{ConfigLayer, SettingsGroup};
    use proptest::prelude::*;

    use super::{merge, split_arguments};

    /// Few distinct keys, so the layers overlap often.
    fn group() -> impl Strategy<Value = SettingsGroup> {
        prop::collection::vec(("[a-f]", "[a-z0-9:.]{0,6}"), 0..6)
            .prop_map(|pairs| pairs.into_iter().collect())
    }

    fn layer() -> impl Strategy<Value = ConfigLayer> {
        (group(), group(), group()).prop_map(|(slurm, script, launcher)| ConfigLayer {
            slurm,
            script,
            launcher,
        })
    }

    fn resolve(key: &str, layers: [Option<&SettingsGroup>; 3]) -> Option<String> {
        layers.into_iter().flatten().find_map(|group| group.get(key).cloned())
    }

    proptest! {
        /// Every key resolves to the command line, then the file, then the default.
        #[test]
        fn prop_precedence(
            default in layer(),
            file in prop::option::of(layer()),
            cli in layer(),
        ) {
            let merged = merge(default.clone(), file.clone(), cli.clone());

            let sections = [
                (&merged.directives, &default.slurm, file.as_ref().map(|f| &f.slurm), &cli.slurm),
                (
                    &merged.launcher,
                    &default.launcher,
                    file.as_ref().map(|f| &f.launcher),
                    &cli.launcher,
                ),
            ];
            for (merged, default, file, cli) in sections {
                let file_keys = file.into_iter().flat_map(|f| f.keys());
                for key in default.keys().chain(cli.keys()).chain(file_keys) {
                    let expected = resolve(key, [Some(cli), file, Some(default)]);
                    prop_assert_eq!(merged.get(key).cloned(), expected);
                }
                let known = |key: &String| {
                    default.contains_key(key)
                        || cli.contains_key(key)
                        || file.is_some_and(|f| f.contains_key(key))
                };
                prop_assert!(merged.keys().all(known));
            }

            for (key, values) in &merged.arguments {
                let file = file.as_ref().map(|f| &f.script);
                let expected = resolve(key, [Some(&cli.script), file, Some(&default.script)]);
                prop_assert_eq!(Some(values.join(",")), expected);
            }
        }

        /// Joining comma-free values and splitting them again is the identity.
        #[test]
        fn prop_split_join(xs in prop::collection::vec("[^,]{0,8}", 1..8)) {
            let group: SettingsGroup = [("k".to_owned(), xs.join(","))].into_iter().collect();
            let lists = split_arguments(&group);
            prop_assert_eq!(&lists["k"], &xs);
        }
    }
}
