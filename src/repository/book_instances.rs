//! Book instance persistence on PostgreSQL

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{BookInstanceStore, Repository};
use crate::{
    error::{AppError, AppResult},
    models::{BookInstance, NewBookInstance},
};

/// Status is stored as its text label
#[derive(FromRow)]
struct BookInstanceRow {
    id: Uuid,
    book_id: Uuid,
    imprint: String,
    status: String,
    due_back: DateTime<Utc>,
}

impl TryFrom<BookInstanceRow> for BookInstance {
    type Error = AppError;

    fn try_from(row: BookInstanceRow) -> Result<Self, Self::Error> {
        Ok(BookInstance {
            id: row.id,
            book: row.book_id,
            imprint: row.imprint,
            status: row.status.parse()?,
            due_back: row.due_back,
        })
    }
}

#[async_trait]
impl BookInstanceStore for Repository {
    async fn book_instances_get_by_id(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        sqlx::query_as::<_, BookInstanceRow>(
            "SELECT id, book_id, imprint, status, due_back FROM book_instances WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(BookInstance::try_from)
        .transpose()
    }

    async fn book_instances_create(&self, data: &NewBookInstance) -> AppResult<BookInstance> {
        data.validate()?;
        let instance = data.to_instance(Utc::now());

        let row = sqlx::query_as::<_, BookInstanceRow>(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, status, due_back)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(instance.id)
        .bind(instance.book)
        .bind(&instance.imprint)
        .bind(instance.status.as_str())
        .bind(instance.due_back)
        .fetch_one(&self.pool)
        .await?;

        BookInstance::try_from(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookInstanceStatus;
    use chrono::TimeZone;

    fn row(status: &str) -> BookInstanceRow {
        BookInstanceRow {
            id: Uuid::new_v4(),
            book_id: Uuid::new_v4(),
            imprint: "Gollancz, 2011".to_string(),
            status: status.to_string(),
            due_back: Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_row_maps_columns() {
        let source = row("Loaned");
        let (id, book_id, due_back) = (source.id, source.book_id, source.due_back);

        let instance = BookInstance::try_from(source).unwrap();
        assert_eq!(instance.id, id);
        assert_eq!(instance.book, book_id);
        assert_eq!(instance.imprint, "Gollancz, 2011");
        assert_eq!(instance.status, BookInstanceStatus::Loaned);
        assert_eq!(instance.due_back, due_back);
    }

    #[test]
    fn test_row_with_unknown_status_is_rejected() {
        let result = BookInstance::try_from(row("Lost"));
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("Lost")));

        // labels are matched exactly
        assert!(BookInstance::try_from(row("loaned")).is_err());
    }
}
