use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelpgError {
    #[error("expected at most one input file, got {count}")]
    TooManyInputs { count: usize },

    #[error("start page is required (-s)")]
    MissingStartPage,

    #[error("end page is required (-e)")]
    MissingEndPage,

    #[error("invalid page range {start}..{end}: start must be >= 1 and <= end")]
    InvalidPageRange { start: i64, end: i64 },

    #[error("invalid page length {0}: must be at least 1")]
    InvalidPageLength(i64),

    #[error("-l and -f are mutually exclusive")]
    LengthWithFormFeed,

    #[error("input file \"{}\" does not exist!", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open input file \"{}\"", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("print command is empty")]
    EmptyPrintCommand,

    #[error("could not start print command `{command}`")]
    PrinterSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl SelpgError {
    pub fn shows_usage(&self) -> bool {
        !matches!(
            self,
            SelpgError::EmptyPrintCommand | SelpgError::PrinterSpawn { .. }
        )
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, SelpgError::InputNotFound { .. })
    }
}
