use std::{
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access {path}: {error}")]
    Io {
        #[source]
        error: io::Error,
        path: PathBuf,
    },
    #[error("{count} group(s) in {path} do not start with an enum declaration")]
    Malformed { path: PathBuf, count: usize },
}

impl Error {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Io { .. } => ExitCode::from(exit_codes::IO),
            Error::Malformed { .. } => ExitCode::from(exit_codes::MALFORMED_FILE),
        }
    }
}

pub mod exit_codes {
    pub const MALFORMED_FILE: u8 = 1;
    pub const _USAGE: u8 = 2; // Used by clap
    pub const IO: u8 = 3;
}

pub trait ResultExt {
    type Result;

    fn with_path<P: AsRef<Path>>(self, path: P) -> Self::Result;
    fn with_stdout(self) -> Self::Result;
    fn with_stderr(self) -> Self::Result;
}

impl<T> ResultExt for Result<T, io::Error> {
    type Result = Result<T, Error>;

    fn with_path<P: AsRef<Path>>(self, path: P) -> Self::Result {
        self.map_err(|error| Error::Io {
            error,
            path: path.as_ref().to_path_buf(),
        })
    }

    fn with_stdout(self) -> Self::Result {
        self.with_path("standard output")
    }

    fn with_stderr(self) -> Self::Result {
        self.with_path("standard error")
    }
}
