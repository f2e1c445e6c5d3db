/// Every way a single launch can fail.
///
/// Usage errors come from the command line, configuration errors from the merged
/// settings, and submission errors from the scheduler binary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaunchError {
    #[error("Must provide a module to run")]
    MissingModule,

    #[error(
        "Invalid argument {0}, must start with '--'. Note that positional arguments are not supported."
    )]
    UnexpectedPositional(String),

    #[error("Invalid argument {0}, the key after '--' must not be empty")]
    EmptyKey(String),

    #[error("missing required launcher option `{0}`")]
    MissingLauncherOption(&'static str),

    #[error("launcher option `{key}` must be one of true/false, yes/no, on/off, 1/0; got `{value}`")]
    InvalidFlag { key: &'static str, value: String },

    #[error("launcher option `{0}` must not be empty")]
    EmptyLauncherOption(&'static str),

    #[error("script argument `{0}` has no values, so no job would be launched")]
    EmptyArgument(String),

    #[error("`{command}` exited with {status}: {stderr}")]
    Submission {
        command: String,
        status: String,
        stderr: String,
    },
}

/// The three failure families a launch can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKind {
    Usage,
    Config,
    Submission,
}

impl LaunchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingModule | Self::UnexpectedPositional(_) | Self::EmptyKey(_) => {
                ErrorKind::Usage
            }
            Self::MissingLauncherOption(_)
            | Self::InvalidFlag { .. }
            | Self::EmptyLauncherOption(_)
            | Self::EmptyArgument(_) => ErrorKind::Config,
            Self::Submission { .. } => ErrorKind::Submission,
        }
    }
}

impl ErrorKind {
    /// Process exit status reported for this family.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Usage => 2,
            Self::Config => 3,
            Self::Submission => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, LaunchError};

    #[test]
    fn test_kind() {
        assert_eq!(LaunchError::MissingModule.kind(), ErrorKind::Usage);
        assert_eq!(LaunchError::EmptyArgument("lr".into()).kind(), ErrorKind::Config);
        assert_eq!(LaunchError::MissingLauncherOption("preamble").kind(), ErrorKind::Config);
        let err = LaunchError::Submission {
            command: "sbatch".into(),
            status: "exit status: 1".into(),
            stderr: "invalid partition".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Submission);
        assert_eq!(err.kind().exit_code(), 4);
        assert_eq!(ErrorKind::Usage.to_string(), "usage");
        assert_eq!(err.to_string(), "`sbatch` exited with exit status: 1: invalid partition");
    }

    #[test]
    fn test_positional_message() {
        let err = LaunchError::UnexpectedPositional("0.1".into());
        assert!(err.to_string().starts_with("Invalid argument 0.1, must start with '--'."));
    }
}
