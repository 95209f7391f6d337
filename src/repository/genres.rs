//! Genre persistence on PostgreSQL

use async_trait::async_trait;
use uuid::Uuid;

use super::{GenreStore, Repository};
use crate::{error::AppResult, models::Genre};

#[async_trait]
impl GenreStore for Repository {
    async fn genres_list(&self) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>(r#"SELECT id, name FROM genres ORDER BY name COLLATE "C""#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn genres_get_by_id(&self, id: Uuid) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(genre)
    }

    async fn genres_find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        // catalog_ci is the ICU collation created by the initial migration
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres WHERE name COLLATE catalog_ci = $1 LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(genre)
    }

    async fn genres_create(&self, genre: &Genre) -> AppResult<Genre> {
        let row = sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (id, name) VALUES ($1, $2) RETURNING id, name",
        )
        .bind(genre.id)
        .bind(&genre.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn genres_update(&self, genre: &Genre) -> AppResult<Option<Genre>> {
        let row = sqlx::query_as::<_, Genre>(
            "UPDATE genres SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(&genre.name)
        .bind(genre.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
