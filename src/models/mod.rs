//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

use uuid::Uuid;

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use author::{Author, NewAuthor};
pub use book::{Book, BookSummary};
pub use book_instance::{BookInstance, BookInstanceStatus, NewBookInstance};
pub use genre::{Genre, GenreForm};

/// Resolve a path identifier; anything that is not a UUID cannot name a record.
pub fn parse_id(raw: &str, kind: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("{} not found", kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Genre").unwrap(), id);

        match parse_id("not-an-id", "Genre") {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Genre not found"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
