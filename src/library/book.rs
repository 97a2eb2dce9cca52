//! Book and user-book record models.

use crate::dates::parse_date;
use crate::error::Result;
use crate::library::goal::{GoalKind, ProgressSnapshot, ReadingGoal};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Book metadata as returned by the book search service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier for the book.
    #[serde(default)]
    pub id: String,

    /// Book title.
    pub title: String,

    /// Author display name.
    #[serde(default)]
    pub author: String,

    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    /// ISBN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// Number of pages (if known).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i64>,

    /// Publication date as provided by the metadata source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    /// Book description or summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Book {
    /// Create a new book with minimal information.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        let title = title.into();
        let author = author.into();

        Self {
            id: Self::derive_id(&title, &author),
            title,
            author,
            ..Default::default()
        }
    }

    /// Deterministic id for a book that has none.
    pub fn derive_id(title: &str, author: &str) -> String {
        let key = format!("{}\u{1f}{}", title.trim().to_lowercase(), author.trim().to_lowercase());
        Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string()
    }

    /// Display name for the author.
    pub fn author_display(&self) -> &str {
        if self.author.trim().is_empty() {
            "Unknown Author"
        } else {
            &self.author
        }
    }
}

/// Where a book sits on the user's shelf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    /// Currently being read.
    #[default]
    Reading,
    /// Finished.
    Completed,
    /// On the wish list.
    WantToRead,
}

/// A book on the user's shelf together with their reading state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBook {
    /// Id of the shelved book.
    #[serde(default)]
    pub book_id: String,

    /// Book metadata.
    pub book: Book,

    /// Shelf status.
    #[serde(default)]
    pub status: ReadingStatus,

    /// Date reading started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Date the book was finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,

    /// Last page read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<i64>,

    /// Whether a reading goal is active.
    #[serde(default)]
    pub goal_enabled: bool,

    /// Goal kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalKind>,

    /// Pages per day or months, depending on `goal_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_value: Option<i64>,

    /// Rating from 1 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    /// Review comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl UserBook {
    /// Shelve a book with the given status.
    pub fn new(book: Book, status: ReadingStatus) -> Self {
        Self {
            book_id: book.id.clone(),
            book,
            status,
            ..Default::default()
        }
    }

    /// Active reading goal, if any.
    pub fn goal(&self) -> Result<Option<ReadingGoal>> {
        ReadingGoal::from_record(self.goal_enabled, self.goal_type, self.goal_value)
    }

    /// Progress snapshot built from this record.
    pub fn snapshot(&self) -> Result<ProgressSnapshot> {
        ProgressSnapshot::new(
            self.current_page.unwrap_or(0),
            self.book.pages,
            self.started_on()?,
        )
    }

    /// Parsed start date.
    pub fn started_on(&self) -> Result<Option<NaiveDate>> {
        self.start_date.as_deref().map(parse_date).transpose()
    }

    /// Parsed completion date.
    pub fn completed_on(&self) -> Result<Option<NaiveDate>> {
        self.completed_date.as_deref().map(parse_date).transpose()
    }

    /// Whether the book has been finished.
    pub fn is_completed(&self) -> bool {
        self.status == ReadingStatus::Completed
    }
}
