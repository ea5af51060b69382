use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn invalid_id(raw: &str) -> Self { Self::InvalidId(format!("'{}' is not a valid comment id", raw)) }
}
