//! Shelf-wide reading statistics.

use crate::dates::days_between;
use crate::library::{ReadingStatus, UserBook};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Dashboard statistics for a user's shelf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadingStats {
    /// Books with status completed.
    pub total_completed: u32,
    /// Completed books finished in today's month.
    pub completed_this_month: u32,
    /// Completed books finished in today's year.
    pub completed_this_year: u32,
    /// Books being read.
    pub currently_reading: u32,
    /// Completed books as a percentage of all shelved books.
    pub completion_rate: u8,
    /// Recent-completion streak.
    pub reading_streak: u32,
    /// Yearly challenge progress in percent (0 without a challenge).
    pub yearly_goal_progress: u8,
}

impl ReadingStats {
    /// Compute statistics as of `today`.
    ///
    /// `yearly_goal` is the number of books the user wants to finish this year;
    /// 0 disables the challenge.
    pub fn compute(books: &[UserBook], today: NaiveDate, yearly_goal: u32) -> Self {
        let completion_dates: Vec<NaiveDate> = books
            .iter()
            .filter(|b| b.is_completed())
            .filter_map(|b| match b.completed_on() {
                Ok(date) => date,
                Err(e) => {
                    tracing::warn!(book = %b.book_id, error = %e, "Ignoring completion date");
                    None
                }
            })
            .collect();

        let total_completed = count(books.iter().filter(|b| b.is_completed()));
        let currently_reading =
            count(books.iter().filter(|b| b.status == ReadingStatus::Reading));

        let completed_this_year = count(
            completion_dates
                .iter()
                .filter(|d| d.year() == today.year()),
        );
        let completed_this_month = count(
            completion_dates
                .iter()
                .filter(|d| d.year() == today.year() && d.month() == today.month()),
        );

        Self {
            total_completed,
            completed_this_month,
            completed_this_year,
            currently_reading,
            completion_rate: percent_of(total_completed, books.len() as u64),
            reading_streak: reading_streak(&completion_dates, today),
            yearly_goal_progress: percent_of(completed_this_year, u64::from(yearly_goal)),
        }
    }
}

/// Count recent completions, newest first, while each falls within
/// `streak + 7` days of `today`.
pub fn reading_streak(completion_dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut dates = completion_dates.to_vec();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak: u32 = 0;
    for date in dates {
        if days_between(date, today) <= i64::from(streak) + 7 {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}

fn count<I: Iterator>(iter: I) -> u32 {
    u32::try_from(iter.count()).unwrap_or(u32::MAX)
}

// Rounded half up, capped at 100; 0 when `whole` is 0.
fn percent_of(part: u32, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let percent = (200 * u64::from(part) + whole) / (2 * whole);
    percent.min(100) as u8
}
