//! Genre pages

use axum::{
    extract::{Path, State},
    Form,
};

use crate::{
    error::AppResult,
    models::GenreForm,
    views::{Outcome, View},
    AppState,
};

pub const DELETE_GET_PLACEHOLDER: &str = "NOT IMPLEMENTED: Genre delete GET";
pub const DELETE_POST_PLACEHOLDER: &str = "NOT IMPLEMENTED: Genre delete POST";

/// GET /catalog/genres
pub async fn genre_list(State(state): State<AppState>) -> AppResult<View> {
    state.services.genres.list().await
}

/// GET /catalog/genre/:id
pub async fn genre_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<View> {
    state.services.genres.detail(&id).await
}

/// GET /catalog/genre/create
pub async fn genre_create_get(State(state): State<AppState>) -> View {
    state.services.genres.create_form()
}

/// POST /catalog/genre/create
pub async fn genre_create_post(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<Outcome> {
    state.services.genres.create(&form).await
}

/// GET /catalog/genre/:id/delete
pub async fn genre_delete_get(Path(_id): Path<String>) -> &'static str {
    DELETE_GET_PLACEHOLDER
}

/// POST /catalog/genre/:id/delete
pub async fn genre_delete_post(Path(_id): Path<String>) -> &'static str {
    DELETE_POST_PLACEHOLDER
}

/// GET /catalog/genre/:id/update
pub async fn genre_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<View> {
    state.services.genres.update_form(&id).await
}

/// POST /catalog/genre/:id/update
pub async fn genre_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<GenreForm>,
) -> AppResult<Outcome> {
    state.services.genres.update(&id, &form).await
}
