//! Server-rendered pages
//!
//! Each [`View`] names a page and carries the data it shows. Genre names are
//! stored already escaped by form sanitization and are written out as-is;
//! every other piece of text is escaped here.

mod pages;

use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::{
    models::{BookSummary, Genre},
    validation::FieldError,
};

pub const CREATE_GENRE_TITLE: &str = "Create Genre";
pub const UPDATE_GENRE_TITLE: &str = "Update Genre";

/// A page to render together with its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    GenreList {
        genres: Vec<Genre>,
    },
    GenreDetail {
        genre: Genre,
        books: Vec<BookSummary>,
    },
    /// Create or update form; `genre` repopulates the inputs
    GenreForm {
        title: &'static str,
        genre: Option<Genre>,
        errors: Vec<FieldError>,
    },
    Error {
        status: u16,
        message: String,
    },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::GenreList { .. } => "genre_list",
            View::GenreDetail { .. } => "genre_detail",
            View::GenreForm { .. } => "genre_form",
            View::Error { .. } => "error",
        }
    }

    pub fn title(&self) -> String {
        match self {
            View::GenreList { .. } => "Genre List".to_string(),
            View::GenreDetail { .. } => "Genre detail".to_string(),
            View::GenreForm { title, .. } => title.to_string(),
            View::Error { status, .. } => format!("Error {}", status),
        }
    }

    pub fn render(&self) -> Html<String> {
        let body = match self {
            View::GenreList { genres } => pages::genre_list(genres),
            View::GenreDetail { genre, books } => pages::genre_detail(genre, books),
            View::GenreForm { genre, errors, .. } => pages::genre_form(genre.as_ref(), errors),
            View::Error { message, .. } => pages::error(message),
        };
        Html(pages::layout(&self.title(), &body))
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        self.render().into_response()
    }
}

/// What a form submission ends in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(View),
    /// See Other to a canonical record URL
    Redirect(String),
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Render(view) => view.into_response(),
            Outcome::Redirect(url) => Redirect::to(&url).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation;
    use uuid::Uuid;

    #[test]
    fn test_view_names() {
        let form = View::GenreForm {
            title: CREATE_GENRE_TITLE,
            genre: None,
            errors: vec![],
        };
        assert_eq!(form.name(), "genre_form");
        assert_eq!(form.title(), "Create Genre");
        assert_eq!(View::GenreList { genres: vec![] }.name(), "genre_list");
    }

    #[test]
    fn test_list_links_each_genre() {
        let horror = Genre::new("Horror");
        let page = View::GenreList {
            genres: vec![horror.clone()],
        }
        .render()
        .0;
        assert!(page.contains("<title>Genre List</title>"));
        assert!(page.contains(&format!(r#"<a href="{}">Horror</a>"#, horror.url())));
    }

    #[test]
    fn test_stored_names_are_not_escaped_twice() {
        let sanitized = validation::genre_name().run("Sci & Fi").value;
        let page = View::GenreList {
            genres: vec![Genre::new(sanitized)],
        }
        .render()
        .0;
        assert!(page.contains("Sci &amp; Fi"));
        assert!(!page.contains("&amp;amp;"));
    }

    #[test]
    fn test_book_text_is_escaped() {
        let page = View::GenreDetail {
            genre: Genre::new("Fantasy"),
            books: vec![BookSummary {
                id: Uuid::new_v4(),
                title: "<script>".to_string(),
                summary: "Dragons & such".to_string(),
            }],
        }
        .render()
        .0;
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("Dragons &amp; such"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_form_lists_errors() {
        let page = View::GenreForm {
            title: CREATE_GENRE_TITLE,
            genre: Some(Genre::new("ab")),
            errors: validation::genre_name().run("ab").errors,
        }
        .render()
        .0;
        assert!(page.contains(r#"value="ab""#));
        assert!(page.contains(validation::GENRE_NAME_MESSAGE));
    }

    #[test]
    fn test_every_row_is_rendered_in_order() {
        let genres: Vec<Genre> = ["Horror", "Poetry", "Western"]
            .into_iter()
            .map(Genre::new)
            .collect();
        let page = View::GenreList {
            genres: genres.clone(),
        }
        .render()
        .0;
        for genre in &genres {
            assert!(page.contains(&format!(r#"<li><a href="{}">"#, genre.url())));
        }
        let horror = page.find(">Horror<").unwrap();
        let poetry = page.find(">Poetry<").unwrap();
        let western = page.find(">Western<").unwrap();
        assert!(horror < poetry && poetry < western);

        let books: Vec<BookSummary> = (1..=3)
            .map(|n| BookSummary {
                id: Uuid::new_v4(),
                title: format!("Volume {}", n),
                summary: String::new(),
            })
            .collect();
        let page = View::GenreDetail {
            genre: Genre::new("Fantasy"),
            books,
        }
        .render()
        .0;
        assert_eq!(page.matches("<dt>").count(), 3);
        assert!(page.contains("</dl>"));

        let errors: Vec<FieldError> = ["first problem", "second problem"]
            .into_iter()
            .map(|message| FieldError {
                field: "name".to_string(),
                message: message.to_string(),
                value: String::new(),
            })
            .collect();
        let page = View::GenreForm {
            title: UPDATE_GENRE_TITLE,
            genre: None,
            errors,
        }
        .render()
        .0;
        assert!(page.contains("<li>first problem</li>\n<li>second problem</li>"));
    }
}
