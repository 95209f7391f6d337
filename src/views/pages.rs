//! HTML fragments for each page

use crate::{
    models::{BookSummary, Genre},
    validation::{escape, FieldError},
};

pub(super) fn layout(title: &str, body: &str) -> String {
    let title = escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav>
<ul>
<li><a href="/catalog/genres">All genres</a></li>
<li><a href="/catalog/genre/create">Create new genre</a></li>
</ul>
</nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#
    )
}

pub(super) fn genre_list(genres: &[Genre]) -> String {
    if genres.is_empty() {
        return "<p>There are no genres.</p>".to_string();
    }

    let items: String = genres
        .iter()
        .map(|genre| format!("<li><a href=\"{}\">{}</a></li>\n", genre.url(), genre.name))
        .collect();
    format!("<ul>\n{}</ul>", items)
}

pub(super) fn genre_detail(genre: &Genre, books: &[BookSummary]) -> String {
    let mut html = format!("<h2>Genre: {}</h2>\n<h3>Books</h3>\n", genre.name);

    if books.is_empty() {
        html.push_str("<p>This genre has no books.</p>\n");
    } else {
        let rows: String = books
            .iter()
            .map(|book| {
                format!(
                    "<dt><a href=\"{}\">{}</a></dt><dd>{}</dd>\n",
                    book.url(),
                    escape(&book.title),
                    escape(&book.summary)
                )
            })
            .collect();
        html.push_str(&format!("<dl>\n{}</dl>\n", rows));
    }

    html.push_str(&format!(
        r#"<p><a href="{url}/update">Update genre</a> | <a href="{url}/delete">Delete genre</a></p>"#,
        url = genre.url()
    ));
    html
}

pub(super) fn genre_form(genre: Option<&Genre>, errors: &[FieldError]) -> String {
    let name = genre.map(|g| g.name.as_str()).unwrap_or_default();
    let mut html = format!(
        r#"<form method="POST" action="">
<label for="name">Genre:</label>
<input id="name" type="text" name="name" placeholder="Fantasy, Poetry etc." required value="{}">
<button type="submit">Submit</button>
</form>
"#,
        name
    );

    if !errors.is_empty() {
        let items: String = errors
            .iter()
            .map(|error| format!("<li>{}</li>\n", escape(&error.message)))
            .collect();
        html.push_str(&format!("<ul class=\"errors\">\n{}</ul>\n", items));
    }
    html
}

pub(super) fn error(message: &str) -> String {
    format!("<p>{}</p>", escape(message))
}
