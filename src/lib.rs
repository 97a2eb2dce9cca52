//! readpace: reading goal pacing and progress tracking.
//!
//! Given a book's page count, a reading goal, a start date and the current
//! page, this crate works out how far along the reader is, where they should
//! be by today, and whether they are keeping pace.
//!
//! # Features
//!
//! - Progress percentage and pacing targets for pages-per-day and
//!   finish-within-months goals
//! - Validated goal and progress value objects built from stored records
//! - Achievement badges unlocked by completed books
//! - Shelf statistics and reading streaks
//! - Daily reminder composition
//! - Injectable clock for deterministic "today"

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Achievement badges.
pub mod badges;
/// Clock abstraction.
pub mod clock;
/// Configuration and CLI.
pub mod config;
/// Date parsing and labels.
pub mod dates;
/// Error types.
pub mod error;
/// Book records and value objects.
pub mod library;
/// Pacing and progress calculations.
pub mod progress;
/// Reading reminders.
pub mod reminder;
/// Shelf statistics.
pub mod stats;


pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Cli, Command, Config};
pub use error::{AppError, Result};
pub use library::{GoalKind, ProgressSnapshot, ReadingGoal, UserBook};
pub use progress::{
    ProgressCalculator, ProgressReport, calculate_expected_pages, calculate_progress,
    days_since_start, describe_goal, is_on_track,
};
