//! Error types for pipeline-formats

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid {format} coordinates: expected {expected} values, found {found}")]
    InvalidCoordinates {
        format: &'static str,
        expected: usize,
        found: usize,
    },
}
