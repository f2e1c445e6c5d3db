use service::prelude::{parse_args, CliInvocation};

pub const USAGE: &str = "\
Usage: slurm-launch <module> [--key value [value ...]]...

Renders a batch script from ./slurm.yaml and the packaged defaults, then submits it.

  --slurm.<name> <value>      scheduler directive, rendered as #SBATCH --<name>=<value>
  --launcher.<name> <value>   launcher option (confirm, preamble, cmd_prefix, submit_cmd, dry_run)
  --<name> <v1,v2,...>        script argument; comma-separated values launch one job per value

Set RUST_LOG=debug for diagnostics.";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Launch(CliInvocation),
}

pub fn parse<I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.first().map(String::as_str) {
        Some("--help" | "-h") => Ok(Command::Help),
        Some("--version" | "-V") => Ok(Command::Version),
        _ => Ok(Command::Launch(parse_args(args)?)),
    }
}
