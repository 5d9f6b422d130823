use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("grid size must be at least 1, got {0}")]
    InvalidGridSize(usize),

    #[error("invalid configuration: grid size {n}, trials {trials}")]
    InvalidConfig { n: usize, trials: usize },

    #[error("expected {expected} samples before finalizing, have {actual}")]
    IncompleteSamples { expected: usize, actual: usize },

    #[error("site ({row}, {col}) is outside a {n}x{n} grid")]
    OutOfRange { row: usize, col: usize, n: usize },

    #[error("The file '{}' could not be found.", .path.display())]
    MissingInput { path: PathBuf },

    #[error("malformed input: {0}")]
    Parse(String),

    #[error("bad settings: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
