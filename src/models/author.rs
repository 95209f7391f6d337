//! Author model and related types

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Full author model from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub date_of_death: Option<DateTime<Utc>>,
}

impl Author {
    /// "Family, First", or an empty string when either part is missing
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// "(birth - death)" in UTC; an unknown date renders empty
    pub fn lifespan(&self) -> String {
        format!(
            "({} - {})",
            format_medium(self.date_of_birth),
            format_medium(self.date_of_death)
        )
    }

    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }
}

/// en-GB month abbreviations; September is "Sept", not "Sep"
const MONTHS_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Medium date with short time, en-GB style: "12 Mar 1990, 14:05".
/// The year is not zero-padded.
fn format_medium(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| {
        format!(
            "{} {} {}, {}",
            d.day(),
            MONTHS_ABBREV[d.month0() as usize],
            d.year(),
            d.format("%H:%M")
        )
    })
    .unwrap_or_default()
}

/// Create author request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAuthor {
    #[validate(length(min = 1, max = 100, message = "First name must be 1 to 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Family name must be 1 to 100 characters"))]
    pub family_name: String,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub date_of_death: Option<DateTime<Utc>>,
}

impl NewAuthor {
    /// Build the record to insert, assigning a fresh identifier
    pub fn to_author(&self) -> Author {
        Author {
            id: Uuid::new_v4(),
            first_name: self.first_name.clone(),
            family_name: self.family_name.clone(),
            date_of_birth: self.date_of_birth,
            date_of_death: self.date_of_death,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn author(first: &str, family: &str) -> Author {
        Author {
            id: Uuid::new_v4(),
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(author("Jane", "Austen").name(), "Austen, Jane");
        assert_eq!(author("", "Austen").name(), "");
        assert_eq!(author("Jane", "").name(), "");
    }

    #[test]
    fn test_lifespan_is_utc() {
        let mut austen = author("Jane", "Austen");
        austen.date_of_birth = Some(Utc.with_ymd_and_hms(1775, 12, 16, 0, 0, 0).unwrap());
        austen.date_of_death = Some(Utc.with_ymd_and_hms(1817, 7, 18, 9, 30, 0).unwrap());
        assert_eq!(austen.lifespan(), "(16 Dec 1775, 00:00 - 18 Jul 1817, 09:30)");
        // recomputed identically on every read
        assert_eq!(austen.lifespan(), austen.lifespan());
    }

    #[test]
    fn test_lifespan_september_and_early_years() {
        let mut author = author("Ada", "Example");
        author.date_of_birth = Some(Utc.with_ymd_and_hms(2020, 9, 5, 10, 0, 0).unwrap());
        author.date_of_death = Some(Utc.with_ymd_and_hms(999, 3, 12, 14, 5, 0).unwrap());
        assert_eq!(author.lifespan(), "(5 Sept 2020, 10:00 - 12 Mar 999, 14:05)");
    }

    #[test]
    fn test_lifespan_with_unknown_dates() {
        let mut living = author("Zadie", "Smith");
        living.date_of_birth = Some(Utc.with_ymd_and_hms(1975, 10, 25, 12, 0, 0).unwrap());
        assert_eq!(living.lifespan(), "(25 Oct 1975, 12:00 - )");
        assert_eq!(author("A", "B").lifespan(), "( - )");
    }

    #[test]
    fn test_new_author_limits() {
        let ok = NewAuthor {
            first_name: "Jane".to_string(),
            family_name: "Austen".to_string(),
            date_of_birth: None,
            date_of_death: None,
        };
        assert!(ok.validate().is_ok());

        let too_long = NewAuthor {
            family_name: "x".repeat(101),
            ..ok.clone()
        };
        assert!(too_long.validate().is_err());

        let missing = NewAuthor {
            first_name: String::new(),
            ..ok
        };
        let errors = missing.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }
}
