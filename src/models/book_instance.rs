//! Book instance (physical copy) model

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Circulation status of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookInstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl BookInstanceStatus {
    pub const ALL: [BookInstanceStatus; 4] = [
        BookInstanceStatus::Available,
        BookInstanceStatus::Maintenance,
        BookInstanceStatus::Loaned,
        BookInstanceStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookInstanceStatus::Available => "Available",
            BookInstanceStatus::Maintenance => "Maintenance",
            BookInstanceStatus::Loaned => "Loaned",
            BookInstanceStatus::Reserved => "Reserved",
        }
    }
}

impl fmt::Display for BookInstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookInstanceStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown book instance status: {}", s)))
    }
}

/// Book instance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInstance {
    pub id: Uuid,
    pub book: Uuid,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: DateTime<Utc>,
}

impl BookInstance {
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }

    /// Full date with short time in UTC, e.g. "Monday 12 March 1990 at 14:05"
    pub fn due_back_formatted(&self) -> String {
        format!(
            "{} {} at {}",
            self.due_back.format("%A %-d %B"),
            self.due_back.year(),
            self.due_back.format("%H:%M")
        )
    }

    /// ISO-8601 instant with milliseconds, e.g. "1990-03-12T14:05:00.000Z"
    pub fn due_back_yyyy_mm_dd(&self) -> String {
        self.due_back.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Create book instance request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewBookInstance {
    pub book: Uuid,
    #[validate(length(min = 1, message = "Imprint is required"))]
    pub imprint: String,
    pub status: Option<BookInstanceStatus>,
    pub due_back: Option<DateTime<Utc>>,
}

impl NewBookInstance {
    /// Apply schema defaults: Maintenance status, due back at `now`
    pub fn to_instance(&self, now: DateTime<Utc>) -> BookInstance {
        BookInstance {
            id: Uuid::new_v4(),
            book: self.book,
            imprint: self.imprint.clone(),
            status: self.status.unwrap_or_default(),
            due_back: self.due_back.unwrap_or(now),
        }
    }
}
