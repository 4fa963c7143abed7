use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayLogError {
    #[error("failed to read play log: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed play log: {0}")]
    Csv(#[from] csv::Error),
    #[error("play log is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("play log has no {0} column")]
    MissingColumn(&'static str),
    #[error("play log has no plays with a usable date")]
    NoAggregates,
}
