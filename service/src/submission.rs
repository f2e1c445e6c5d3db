use std::io::Write;

use anyhow::Context;
use domain::model::entity::{JobScript, SubmitOutput};
use domain::model::vo::LauncherOptions;
use domain::service::{Console, JobScheduler};

/// How a launch ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Submitted(SubmitOutput),
    Aborted,
    DryRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Accept,
    Decline,
}

/// Confirms and submits rendered scripts.
pub struct Launcher<S, C> {
    scheduler: S,
    console: C,
}

impl<S, C> Launcher<S, C>
where
    S: JobScheduler + Send + Sync,
    C: Console,
{
    pub fn new(scheduler: S, console: C) -> Self {
        Self { scheduler, console }
    }

    pub async fn launch(
        &self,
        script: &JobScript,
        options: &LauncherOptions,
    ) -> anyhow::Result<LaunchOutcome> {
        if options.dry_run {
            self.console.print(script.text());
            self.console.print(&format!("Dry run, {} jobs not submitted.", script.job_count()));
            return Ok(LaunchOutcome::DryRun);
        }

        if options.confirm {
            self.console.print(script.text());
            if self.ask(script.job_count())? == Answer::Decline {
                self.console.print("Aborting.");
                return Ok(LaunchOutcome::Aborted);
            }
        }

        let output = self.submit(script).await?;
        self.console.print(&output.stdout);
        self.console.print(&output.stderr);
        Ok(LaunchOutcome::Submitted(output))
    }

    fn ask(&self, job_count: usize) -> anyhow::Result<Answer> {
        let prompt = format!("Launch {job_count} jobs? [Y/n] ");
        loop {
            let Some(response) = self.console.read_line(&prompt)? else {
                tracing::debug!("Input closed while waiting for confirmation");
                return Ok(Answer::Decline);
            };
            match parse_answer(&response) {
                Some(answer) => return Ok(answer),
                None => self.console.print("Invalid response."),
            }
        }
    }

    /// The script lives in a temporary file for exactly as long as the
    /// scheduler call, whatever its result.
    async fn submit(&self, script: &JobScript) -> anyhow::Result<SubmitOutput> {
        let mut file = tempfile::Builder::new()
            .prefix("slurm-launch-")
            .suffix(".sh")
            .tempfile()
            .context("Unable to create temporary script file")?;
        file.write_all(script.text().as_bytes())
            .context("Unable to write temporary script file")?;
        file.flush().context("Unable to write temporary script file")?;

        tracing::info!(
            path = %file.path().display(),
            jobs = script.job_count(),
            array = script.is_array(),
            "Submitting job script"
        );
        let output = self.scheduler.submit_job(file.path()).await?;
        if let Some(job_id) = output.job_id() {
            tracing::info!(job_id, "Job script accepted");
        }
        Ok(output)
    }
}

fn parse_answer(response: &str) -> Option<Answer> {
    match response.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Some(Answer::Accept),
        "n" | "no" => Some(Answer::Decline),
        _ => None,
    }
}
