use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported platform: {0} (expected `android` or `ios`)")]
    UnsupportedPlatform(String),

    #[error("missing required option `--{0}`")]
    MissingArgument(&'static str),

    #[error("`--flavor` must not be empty")]
    EmptyFlavor,

    #[error("{0}")]
    Args(String),

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error("build failed with exit code {code}")]
    ToolFailed { code: i32 },
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Usage errors exit with 2, matching the convention of most argument
    /// parsers. A failed build passes the tool's own status through.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnsupportedPlatform(_) | Error::Spawn { .. } | Error::Output(_) => 1,
            Error::MissingArgument(_) | Error::EmptyFlavor | Error::Args(_) => 2,
            Error::ToolFailed { code } => *code,
        }
    }
}

impl From<gumdrop::Error> for Error {
    fn from(e: gumdrop::Error) -> Self {
        Error::Args(e.to_string())
    }
}
