//! Repository layer for catalog records
//!
//! Each entity has a store trait. [`Repository`] implements them on
//! PostgreSQL and [`MemoryStore`] keeps everything in process memory.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod memory;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, Book, BookInstance, BookSummary, Genre, NewAuthor, NewBookInstance},
};

pub use memory::MemoryStore;

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreStore: Send + Sync {
    /// All genres, ascending by name under plain byte ordering
    async fn genres_list(&self) -> AppResult<Vec<Genre>>;

    async fn genres_get_by_id(&self, id: Uuid) -> AppResult<Option<Genre>>;

    /// First genre whose name equals `name` ignoring case but not accents
    async fn genres_find_by_name(&self, name: &str) -> AppResult<Option<Genre>>;

    async fn genres_create(&self, genre: &Genre) -> AppResult<Genre>;

    /// Replace the stored fields of `genre.id`; `None` if no such record
    async fn genres_update(&self, genre: &Genre) -> AppResult<Option<Genre>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Title and summary of every book filed under the genre, by title
    async fn books_list_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<BookSummary>>;

    async fn books_get_by_id(&self, id: Uuid) -> AppResult<Option<Book>>;

    async fn books_create(&self, book: &Book) -> AppResult<Book>;
}

#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// All authors, ascending by family name
    async fn authors_list(&self) -> AppResult<Vec<Author>>;

    async fn authors_get_by_id(&self, id: Uuid) -> AppResult<Option<Author>>;

    /// Check the schema constraints, then insert
    async fn authors_create(&self, data: &NewAuthor) -> AppResult<Author>;
}

#[async_trait]
pub trait BookInstanceStore: Send + Sync {
    async fn book_instances_get_by_id(&self, id: Uuid) -> AppResult<Option<BookInstance>>;

    /// Check the schema constraints, apply defaults, then insert
    async fn book_instances_create(&self, data: &NewBookInstance) -> AppResult<BookInstance>;
}
