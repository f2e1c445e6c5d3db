pub mod console;
pub mod job_scheduler;

#[rustfmt::skip]
pub use self::{
    console::TerminalConsole,
    job_scheduler::slurm::SlurmClient,
};
