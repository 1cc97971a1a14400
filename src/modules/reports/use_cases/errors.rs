use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("forbidden: {0} is not an admin")]
    Forbidden(String),

    #[error(transparent)]
    Queries(#[from] anyhow::Error),
}
