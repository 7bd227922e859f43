/// Everything that can go wrong while loading, saving or driving a simulation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record of a known kind couldn't be turned into a space object.
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },
    #[error("dataset contains no space objects")]
    EmptyDataset,
    #[error("time step must be positive, got {0}")]
    InvalidTimeStep(f64),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        Error::Format {
            line,
            reason: reason.into(),
        }
    }
}
