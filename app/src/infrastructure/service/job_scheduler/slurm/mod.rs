pub mod slurm_client;

#[rustfmt::skip]
pub use self::slurm_client::*;
