//! Genre controller logic
//!
//! Every operation ends in a [`View`] to render or a redirect. Form
//! validation failures are not errors: they come back as a re-rendered form.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{parse_id, Genre, GenreForm},
    repository::{BookStore, GenreStore},
    validation,
    views::{Outcome, View, CREATE_GENRE_TITLE, UPDATE_GENRE_TITLE},
};

const GENRE_NOT_FOUND: &str = "Genre not found";

#[derive(Clone)]
pub struct GenresService {
    genres: Arc<dyn GenreStore>,
    books: Arc<dyn BookStore>,
}

impl GenresService {
    pub fn new(genres: Arc<dyn GenreStore>, books: Arc<dyn BookStore>) -> Self {
        Self { genres, books }
    }

    /// All genres by name
    pub async fn list(&self) -> AppResult<View> {
        let genres = self.genres.genres_list().await?;
        Ok(View::GenreList { genres })
    }

    /// Genre with the books filed under it
    pub async fn detail(&self, id: &str) -> AppResult<View> {
        let id = parse_id(id, "Genre")?;

        let (genre, books) = tokio::try_join!(
            self.genres.genres_get_by_id(id),
            self.books.books_list_by_genre(id),
        )?;

        let genre = genre.ok_or_else(|| AppError::NotFound(GENRE_NOT_FOUND.to_string()))?;
        Ok(View::GenreDetail { genre, books })
    }

    pub fn create_form(&self) -> View {
        View::GenreForm {
            title: CREATE_GENRE_TITLE,
            genre: None,
            errors: Vec::new(),
        }
    }

    /// Create a genre unless one with the same name (ignoring case) exists.
    ///
    /// Both paths redirect to the canonical URL of the stored genre. The
    /// lookup and the insert are separate statements, so two concurrent
    /// submissions of a new name can both insert.
    pub async fn create(&self, form: &GenreForm) -> AppResult<Outcome> {
        let checked = validation::genre_name().run(&form.name);
        let genre = Genre::new(checked.value);

        if !checked.errors.is_empty() {
            return Ok(Outcome::Render(View::GenreForm {
                title: CREATE_GENRE_TITLE,
                genre: Some(genre),
                errors: checked.errors,
            }));
        }

        if let Some(existing) = self.genres.genres_find_by_name(&genre.name).await? {
            tracing::debug!(
                "Genre '{}' already exists as id={}, redirecting",
                genre.name,
                existing.id
            );
            return Ok(Outcome::Redirect(existing.url()));
        }

        let created = self.genres.genres_create(&genre).await?;
        tracing::info!("Genre created: id={} name='{}'", created.id, created.name);
        Ok(Outcome::Redirect(created.url()))
    }

    /// Edit form prefilled with the stored genre
    pub async fn update_form(&self, id: &str) -> AppResult<View> {
        let genre = self.get(id).await?;
        Ok(View::GenreForm {
            title: UPDATE_GENRE_TITLE,
            genre: Some(genre),
            errors: Vec::new(),
        })
    }

    /// Rename a genre in place.
    ///
    /// No duplicate-name check is made here, unlike [`GenresService::create`].
    pub async fn update(&self, id: &str, form: &GenreForm) -> AppResult<Outcome> {
        let id = parse_id(id, "Genre")?;
        let checked = validation::genre_name().run(&form.name);

        if !checked.errors.is_empty() {
            let current = self
                .genres
                .genres_get_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(GENRE_NOT_FOUND.to_string()))?;

            return Ok(Outcome::Render(View::GenreForm {
                title: UPDATE_GENRE_TITLE,
                genre: Some(current),
                errors: checked.errors,
            }));
        }

        let genre = Genre::with_id(id, checked.value);
        let updated = self
            .genres
            .genres_update(&genre)
            .await?
            .ok_or_else(|| AppError::NotFound(GENRE_NOT_FOUND.to_string()))?;

        tracing::info!("Genre updated: id={} name='{}'", updated.id, updated.name);
        Ok(Outcome::Redirect(updated.url()))
    }

    async fn get(&self, id: &str) -> AppResult<Genre> {
        let id = parse_id(id, "Genre")?;
        self.genres
            .genres_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(GENRE_NOT_FOUND.to_string()))
    }
}
