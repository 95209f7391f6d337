//! Book persistence on PostgreSQL

use async_trait::async_trait;
use sqlx::FromRow;
use uuid::Uuid;

use super::{BookStore, Repository};
use crate::{
    error::AppResult,
    models::{Book, BookSummary},
};

#[derive(FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author_id: Uuid,
    summary: String,
    isbn: String,
}

impl BookRow {
    fn into_book(self, genre: Vec<Uuid>) -> Book {
        Book {
            id: self.id,
            title: self.title,
            author: self.author_id,
            summary: self.summary,
            isbn: self.isbn,
            genre,
        }
    }
}

#[async_trait]
impl BookStore for Repository {
    async fn books_list_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<BookSummary>> {
        let rows = sqlx::query_as::<_, BookSummary>(
            r#"
            SELECT b.id, b.title, b.summary
            FROM books b
            JOIN book_genres bg ON bg.book_id = b.id
            WHERE bg.genre_id = $1
            ORDER BY b.title COLLATE "C"
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn books_get_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author_id, summary, isbn FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let genre: Vec<Uuid> =
            sqlx::query_scalar("SELECT genre_id FROM book_genres WHERE book_id = $1")
                .bind(id)
                .fetch_all(&self.pool)
                .await?;

        Ok(Some(row.into_book(genre)))
    }

    async fn books_create(&self, book: &Book) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (id, title, author_id, summary, isbn)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author_id, summary, isbn
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(book.author)
        .bind(&book.summary)
        .bind(&book.isbn)
        .fetch_one(&mut *tx)
        .await?;

        for genre_id in &book.genre {
            sqlx::query("INSERT INTO book_genres (book_id, genre_id) VALUES ($1, $2)")
                .bind(book.id)
                .bind(genre_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(row.into_book(book.genre.clone()))
    }
}
