use serde::{Deserialize, Serialize};

/// Placeholder shown when the API response omits an author or publisher.
pub const NOT_AVAILABLE: &str = "(not available)";

const AUTHOR_PREFIX: &str = "Author(s): ";
const PUBLISHER_PREFIX: &str = "Published by: ";

/// Google Books API response envelope
#[derive(Debug, Deserialize)]
pub struct VolumesResponse {
    pub items: Option<Vec<VolumeItem>>,
}

/// A single item of the `items` array
#[derive(Debug, Deserialize)]
pub struct VolumeItem {
    #[serde(rename = "volumeInfo")]
    pub volume_info: Option<VolumeInfo>,
}

/// Nested volume metadata. Every field is optional in practice.
#[derive(Debug, Default, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,
}

/// A single book record, ready for display.
///
/// Author and publisher carry their display prefixes; the publication date
/// is omitted from serialized output when the API response did not have one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publisher: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

impl Book {
    pub fn new(
        title: String,
        author: String,
        publisher: String,
        published_date: Option<String>,
    ) -> Self {
        Self {
            title,
            author: format!("{AUTHOR_PREFIX}{author}"),
            publisher: format!("{PUBLISHER_PREFIX}{publisher}"),
            published_date,
        }
    }
}

/// Complete search output with the normalized query and the matching books
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub total: usize,
    pub books: Vec<Book>,
}

/// Build the search output handed to the presenter
pub fn build_search_output(query: String, books: Vec<Book>) -> SearchOutput {
    SearchOutput {
        query,
        total: books.len(),
        books,
    }
}

/// Error raised for a search phrase the catalog cannot be queried with
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum QueryError {
    #[error("the search phrase is empty")]
    Empty,

    #[error("only letters, digits and spaces are allowed")]
    DisallowedCharacters,
}

/// Check a raw search phrase before it is normalized.
///
/// Only letters, digits and spaces are accepted, matching the input rules of
/// the search field.
pub fn validate_phrase(phrase: &str) -> Result<(), QueryError> {
    if phrase.trim().is_empty() {
        return Err(QueryError::Empty);
    }

    if phrase
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        return Err(QueryError::DisallowedCharacters);
    }

    Ok(())
}

/// Normalize a search phrase for the request URL.
///
/// The phrase is trimmed and lowercased, and runs of whitespace become a
/// single `+`. Words are percent-encoded so non-ASCII letters embed safely.
pub fn normalize_query(phrase: &str) -> String {
    phrase
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

/// Build the volumes request URL from its parts
pub fn build_request_url(base: &str, query: &str, limit: usize, api_key: &str) -> String {
    format!("{base}?q={query}&maxResults={limit}&key={api_key}")
}

/// Extract a list of [`Book`] records from a raw volumes JSON response.
///
/// An empty body, a malformed document, or a document without an `items`
/// array yields no records. Parse failures are logged and never surfaced to
/// the caller. Items keep their response order; a missing `authors` array or
/// `publisher` falls back to [`NOT_AVAILABLE`], and a missing
/// `publishedDate` leaves the record without a date.
pub fn extract_books(body: &str) -> Vec<Book> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let response: VolumesResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(err) => {
            log::warn!("Problem parsing the volumes JSON response: {err}");
            return Vec::new();
        }
    };

    let Some(items) = response.items else {
        return Vec::new();
    };

    items
        .into_iter()
        .map(|item| {
            let info = item.volume_info.unwrap_or_default();

            let author = match info.authors {
                Some(authors) if !authors.is_empty() => authors.join(", "),
                _ => NOT_AVAILABLE.to_string(),
            };

            Book::new(
                info.title.unwrap_or_default(),
                author,
                info.publisher.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                info.published_date,
            )
        })
        .collect()
}
