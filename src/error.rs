use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("Invalid stats input: {0}")]
    InvalidStats(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
