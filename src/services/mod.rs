//! Business logic services

pub mod genres;

use std::sync::Arc;

use crate::repository::{BookStore, GenreStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub genres: genres::GenresService,
}

impl Services {
    /// Create all services on top of one store
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: GenreStore + BookStore + 'static,
    {
        Self {
            genres: genres::GenresService::new(store.clone(), store),
        }
    }
}
