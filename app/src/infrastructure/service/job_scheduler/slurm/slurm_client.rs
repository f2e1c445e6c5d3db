use std::path::Path;

use anyhow::Context;
use domain::{model::entity::SubmitOutput, service::JobScheduler, LaunchError};
use tokio::process::Command;

/// Submits scripts with `sbatch`, or whatever `launcher.submit_cmd` names.
pub struct SlurmClient {
    program: String,
    args: Vec<String>,
}

impl SlurmClient {
    /// `submit_cmd` is split on whitespace into the program and its leading arguments.
    pub fn new(submit_cmd: &str) -> Self {
        let mut words = submit_cmd.split_whitespace().map(str::to_owned);
        let program = words.next().unwrap_or_default();
        Self {
            program,
            args: words.collect(),
        }
    }
}

#[async_trait::async_trait]
impl JobScheduler for SlurmClient {
    async fn submit_job(&self, script_path: &Path) -> anyhow::Result<SubmitOutput> {
        tracing::debug!("running {} {:?} {}", self.program, self.args, script_path.display());
        let out = Command::new(&self.program)
            .args(&self.args)
            .arg(script_path)
            .output()
            .await
            .with_context(|| format!("Unable to run {}", self.program))?;
        if !out.status.success() {
            return Err(LaunchError::Submission {
                command: self.program.clone(),
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_owned(),
            }
            .into());
        }
        Ok(SubmitOutput {
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}
