//! Stored reading records and the value objects built from them.

pub mod book;
pub mod goal;

pub use book::{Book, ReadingStatus, UserBook};
pub use goal::{GoalKind, ProgressSnapshot, ReadingGoal};

use crate::error::{AppError, Result};
use std::path::Path;

/// Load the user's books from a JSON export of the book store.
///
/// The file holds an array of [`UserBook`] records. Records without an id get
/// a deterministic one derived from title and author.
pub fn load_user_books(path: &Path) -> Result<Vec<UserBook>> {
    let content = std::fs::read_to_string(path)?;
    let mut books: Vec<UserBook> = serde_json::from_str(&content)?;

    for user_book in &mut books {
        if user_book.book.id.is_empty() {
            user_book.book.id = Book::derive_id(&user_book.book.title, &user_book.book.author);
        }
        if user_book.book_id.is_empty() {
            user_book.book_id = user_book.book.id.clone();
        }
    }

    tracing::debug!(path = %path.display(), count = books.len(), "Loaded user books");
    Ok(books)
}

/// Find a book by its id.
pub fn find_user_book<'a>(books: &'a [UserBook], book_id: &str) -> Result<&'a UserBook> {
    books
        .iter()
        .find(|b| b.book_id == book_id)
        .ok_or_else(|| AppError::NotFound(book_id.to_string()))
}
