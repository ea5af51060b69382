pub mod repository;
pub mod repo;
pub mod service;

use uuid::Uuid;

use crate::errors::ServiceError;

pub use models::comment::Model as Comment;

/// Parse a raw path id the way the store does; anything that is not exactly a UUID,
/// surrounding whitespace included, is rejected.
pub fn parse_comment_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::invalid_id(raw))
}
