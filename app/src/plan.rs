use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use domain::model::entity::JobScript;
use domain::model::vo::{LauncherOptions, ScriptRequest};
use service::prelude::{generate, merge, CliInvocation};

use crate::config;

/// The rendered script together with the options that decide how it is submitted.
#[derive(Debug)]
pub struct LaunchPlan {
    pub script: JobScript,
    pub options: LauncherOptions,
}

/// Merge the packaged default, the file at `local_config` and the command line,
/// then render the script.
pub fn plan(invocation: CliInvocation, local_config: &Path) -> anyhow::Result<LaunchPlan> {
    let default = config::packaged_default().with_context(|| "Failed to load defaults".red())?;
    let local = config::load_local(local_config)
        .with_context(|| "Failed to load local configuration".red())?;
    let merged = merge(default, local, invocation.overrides);

    let options = LauncherOptions::try_from(&merged.launcher)
        .with_context(|| "Invalid launcher configuration".red())?;
    let request = ScriptRequest::builder()
        .module(invocation.module)
        .arguments(merged.arguments)
        .directives(merged.directives)
        .launcher(options.clone())
        .build();
    let script = generate(&request).with_context(|| "Cannot generate job script".red())?;

    Ok(LaunchPlan { script, options })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use domain::LaunchError;
    use indoc::indoc;
    use service::prelude::parse_args;

    use super::plan;
    use crate::config::LOCAL_CONFIG_FILE;

    fn invocation(s: &str) -> service::prelude::CliInvocation {
        parse_args(s.split_whitespace().map(str::to_owned)).unwrap()
    }

    #[test]
    fn test_layers_reach_script_and_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(
            &path,
            indoc! {"
                slurm:
                  time: 2:00:00
                  partition: gpu
                script:
                  lr: 0.1,0.01
                launcher:
                  confirm: false
                  cmd_prefix: 'srun python -m '
            "},
        )
        .unwrap();

        let plan = plan(invocation("train --seed 1,2,3 --slurm.time 4:00:00"), &path).unwrap();
        assert!(!plan.options.confirm);
        assert_eq!(plan.options.submit_cmd, "sbatch");
        assert_eq!(plan.script.job_count(), 6);

        let text = plan.script.text();
        assert!(text.contains("#SBATCH --time=4:00:00\n"));
        assert!(text.contains("#SBATCH --partition=gpu\n"));
        assert!(text.contains("#SBATCH --mem=4G\n"));
        assert!(text.contains("#SBATCH --array=0-5\n"));
        assert!(text.contains("    \"--lr 0.01 --seed 3\"\n"));
        assert!(text.ends_with("srun python -m train ${PARAMS_ARRAY[$SLURM_ARRAY_TASK_ID]}\n"));
    }

    #[test]
    fn test_without_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let plan = plan(invocation("serve"), &dir.path().join(LOCAL_CONFIG_FILE)).unwrap();
        assert!(plan.options.confirm);
        assert_eq!(plan.script.job_count(), 1);
        assert!(plan.script.text().contains("#SBATCH --time=1:00:00\n"));
        assert!(plan.script.text().ends_with("python -m serve\n"));
    }

    #[test]
    fn test_cli_overrides_file_launcher() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&path, "launcher:\n  confirm: false\n").unwrap();

        let plan = plan(invocation("train --launcher.confirm yes"), &path).unwrap();
        assert!(plan.options.confirm);
    }

    #[test]
    fn test_invalid_launcher_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&path, "launcher:\n  confirm: sometimes\n").unwrap();

        let err = plan(invocation("train"), &path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LaunchError>(),
            Some(LaunchError::InvalidFlag { key: "confirm", .. })
        ));
    }
}
