pub mod cli_args;
pub mod config_merger;
pub mod script_generator;
pub mod submission;

pub mod prelude {
    #[rustfmt::skip]
    pub use super::{
        cli_args::{parse_args, CliInvocation},
        config_merger::{merge, split_arguments},
        script_generator::{cartesian_product, generate, render_params},
        submission::{LaunchOutcome, Launcher},
    };
}
