use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid option values or missing linguistic resources. Raised only while
    /// constructing a `DrugFinder`.
    #[error("Configuration Error: {0}")]
    ConfigurationError(String),

    /// A dictionary location is missing or unreadable.
    #[error("Resource Unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Parser Error: {0}")]
    ParserError(String),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}
