use std::path::Path;

use crate::model::entity::SubmitOutput;

#[async_trait::async_trait]
pub trait JobScheduler {
    /// Hand the script at `script_path` to the scheduler.
    ///
    /// Fails when the submission command cannot be run or exits non-zero.
    async fn submit_job(&self, script_path: &Path) -> anyhow::Result<SubmitOutput>;
}
