//! Service layer sitting between the HTTP handlers and the comment store.
//! - `CommentRepository` is the store contract; SeaORM and in-memory backends implement it.
//! - `CommentService` is what handlers hold, built from an injected repository.

pub mod errors;
pub mod comment;
#[cfg(test)]
pub mod test_support;
