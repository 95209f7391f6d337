//! In-process store
//!
//! Records live in insertion order, so "first match" lookups behave like a
//! natural-order scan. Guards are never held across an await point.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;
use validator::Validate;

use super::{AuthorStore, BookInstanceStore, BookStore, GenreStore};
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookInstance, BookSummary, Genre, NewAuthor, NewBookInstance},
};

#[derive(Debug, Default)]
struct Tables {
    genres: Vec<Genre>,
    books: Vec<Book>,
    authors: Vec<Author>,
    book_instances: Vec<BookInstance>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("lock poisoned".to_string()))
    }
}

/// Comparison key for case-insensitive, accent-sensitive matching.
/// Compatibility forms fold too, so a ligature matches its spelled-out letters.
fn collation_key(name: &str) -> String {
    name.to_lowercase().nfkc().collect()
}

#[async_trait]
impl GenreStore for MemoryStore {
    async fn genres_list(&self) -> AppResult<Vec<Genre>> {
        let mut genres = self.read()?.genres.clone();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn genres_get_by_id(&self, id: Uuid) -> AppResult<Option<Genre>> {
        Ok(self.read()?.genres.iter().find(|g| g.id == id).cloned())
    }

    async fn genres_find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let key = collation_key(name);
        Ok(self
            .read()?
            .genres
            .iter()
            .find(|g| collation_key(&g.name) == key)
            .cloned())
    }

    async fn genres_create(&self, genre: &Genre) -> AppResult<Genre> {
        let mut tables = self.write()?;
        if tables.genres.iter().any(|g| g.id == genre.id) {
            return Err(AppError::Internal(format!("Duplicate genre id {}", genre.id)));
        }
        tables.genres.push(genre.clone());
        Ok(genre.clone())
    }

    async fn genres_update(&self, genre: &Genre) -> AppResult<Option<Genre>> {
        let mut tables = self.write()?;
        Ok(tables
            .genres
            .iter_mut()
            .find(|g| g.id == genre.id)
            .map(|stored| {
                stored.name = genre.name.clone();
                stored.clone()
            }))
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn books_list_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<BookSummary>> {
        let mut books: Vec<BookSummary> = self
            .read()?
            .books
            .iter()
            .filter(|b| b.genre.contains(&genre_id))
            .map(Book::summary_view)
            .collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }

    async fn books_get_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        Ok(self.read()?.books.iter().find(|b| b.id == id).cloned())
    }

    async fn books_create(&self, book: &Book) -> AppResult<Book> {
        self.write()?.books.push(book.clone());
        Ok(book.clone())
    }
}

#[async_trait]
impl AuthorStore for MemoryStore {
    async fn authors_list(&self) -> AppResult<Vec<Author>> {
        let mut authors = self.read()?.authors.clone();
        authors.sort_by(|a, b| a.family_name.cmp(&b.family_name));
        Ok(authors)
    }

    async fn authors_get_by_id(&self, id: Uuid) -> AppResult<Option<Author>> {
        Ok(self.read()?.authors.iter().find(|a| a.id == id).cloned())
    }

    async fn authors_create(&self, data: &NewAuthor) -> AppResult<Author> {
        data.validate()?;
        let author = data.to_author();
        self.write()?.authors.push(author.clone());
        Ok(author)
    }
}

#[async_trait]
impl BookInstanceStore for MemoryStore {
    async fn book_instances_get_by_id(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        Ok(self
            .read()?
            .book_instances
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn book_instances_create(&self, data: &NewBookInstance) -> AppResult<BookInstance> {
        data.validate()?;
        let instance = data.to_instance(Utc::now());
        self.write()?.book_instances.push(instance.clone());
        Ok(instance)
    }
}
