mod cli;
mod config;
mod infrastructure;
mod plan;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use domain::LaunchError;
use service::prelude::{LaunchOutcome, Launcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use self::cli::Command;
use self::infrastructure::service::{SlurmClient, TerminalConsole};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so the printed script stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:?}", error_label(&e).red());
            ExitCode::from(exit_status(&e))
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let invocation = match cli::parse(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Version => {
            println!("slurm-launch {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Launch(invocation) => invocation,
    };

    let plan::LaunchPlan { script, options } =
        plan::plan(invocation, Path::new(config::LOCAL_CONFIG_FILE))?;

    let launcher = Launcher::new(SlurmClient::new(&options.submit_cmd), TerminalConsole);
    match launcher.launch(&script, &options).await.with_context(|| "Submission failed".red())? {
        LaunchOutcome::Submitted(output) => {
            tracing::info!(job_id = output.job_id(), jobs = script.job_count(), "Launched")
        }
        LaunchOutcome::Aborted => tracing::info!("Launch aborted by user"),
        LaunchOutcome::DryRun => tracing::info!("Dry run, nothing submitted"),
    }
    Ok(())
}

fn error_label(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LaunchError>() {
        Some(e) => format!("Error ({}):", e.kind()),
        None => "Error:".to_owned(),
    }
}

/// Exit status per error family; 1 for anything that is not a `LaunchError`.
fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<LaunchError>().map_or(1, |e| e.kind().exit_code())
}
