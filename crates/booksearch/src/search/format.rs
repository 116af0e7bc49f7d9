use booksearch_core::volumes::{Book, SearchOutput};
use colored::Colorize;

pub const EMPTY_STATE_NO_INTERNET: &str = "No internet connection.";
pub const EMPTY_STATE_NO_BOOKS: &str =
    "No books found. Please try again with different keywords.";

/// Render the search results as a numbered list with a header and a count
pub fn format_results_text(output: &SearchOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("BOOK SEARCH RESULTS FOR \"{}\"", output.query)
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    for (idx, book) in output.books.iter().enumerate() {
        result.push_str(&format_row(idx + 1, book));
    }

    result.push_str(&format!(
        "\n{} {}\n",
        output.total.to_string().bright_cyan().bold(),
        "volume(s) found".bright_white()
    ));

    result
}

/// Render one book the way a list row lays it out: title, author line,
/// then publisher with the publication date appended when there is one.
fn format_row(position: usize, book: &Book) -> String {
    let mut row = String::new();

    let title = if book.title.is_empty() {
        "(No title)"
    } else {
        book.title.as_str()
    };

    row.push_str(&format!(
        "\n{} {}\n",
        format!("[{position}]").yellow().bold(),
        title.white().bold()
    ));

    row.push_str(&format!("    {}\n", book.author.bright_white()));

    match &book.published_date {
        Some(date) => row.push_str(&format!(
            "    {}, {}\n",
            book.publisher.bright_white(),
            date.bright_black()
        )),
        None => row.push_str(&format!("    {}\n", book.publisher.bright_white())),
    }

    row
}
