//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Genre record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: Uuid,
    /// Trimmed and markup-escaped display name
    pub name: String,
}

impl Genre {
    /// Unsaved genre; the identifier is assigned on construction
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

/// Submitted genre form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
}

impl GenreForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
