mod console;
mod job_scheduler;

#[rustfmt::skip]
pub use self::{
    console::Console,
    job_scheduler::JobScheduler,
};
