//! Daily reading reminder composition.
//!
//! Only the content and schedule are computed here; delivering the
//! notification is up to the host platform.

use crate::library::{GoalKind, ReadingStatus, UserBook};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Title shared by all reading reminders.
pub const REMINDER_TITLE: &str = "⏰ Reading Reminder";

/// A reminder ready to hand to the notification scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    /// Stable notification id derived from the book id.
    pub id: u32,
    /// Book the reminder is about.
    pub book_id: String,
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub message: String,
    /// Next time the reminder fires; it repeats daily afterwards.
    pub fire_at: NaiveDateTime,
}

/// Stable 32-bit id for a book's notification.
///
/// Multiply-by-31 hash over the UTF-16 code units with 32-bit wrapping, made
/// non-negative.
pub fn notification_id(book_id: &str) -> u32 {
    book_id
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Next occurrence of `hour:00` at or after `now`.
///
/// Today's slot is used unless it has already passed. Hours above 23 are
/// treated as 23.
pub fn next_fire_time(now: NaiveDateTime, hour: u32) -> NaiveDateTime {
    let slot = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    let today = now.date().and_time(slot);

    if now > today {
        today + Duration::days(1)
    } else {
        today
    }
}

/// Reminder text for a book.
pub fn reminder_message(user_book: &UserBook) -> String {
    let title = &user_book.book.title;

    let goal = user_book.goal().unwrap_or_else(|e| {
        tracing::warn!(book = %user_book.book_id, error = %e, "Ignoring malformed goal");
        None
    });

    match goal {
        Some(goal) if goal.kind() == GoalKind::PagesPerDay => format!(
            "Don't forget to read {} pages of \"{}\" today! 📖",
            goal.value(),
            title
        ),
        Some(_) => format!("Keep up with your reading goal for \"{}\"! 📚", title),
        None => format!("Time to continue reading \"{}\"! 📕", title),
    }
}

/// Compose the reminder for a book, if it should have one.
///
/// Books get a reminder only while being read with a goal enabled. An
/// enabled goal on a finished or wish-listed book schedules nothing.
pub fn compose_reminder(user_book: &UserBook, now: NaiveDateTime, hour: u32) -> Option<Reminder> {
    if !user_book.goal_enabled || user_book.status != ReadingStatus::Reading {
        return None;
    }

    Some(Reminder {
        id: notification_id(&user_book.book_id),
        book_id: user_book.book_id.clone(),
        title: REMINDER_TITLE.to_string(),
        message: reminder_message(user_book),
        fire_at: next_fire_time(now, hour),
    })
}
