//! Reading goal and progress snapshot value objects.
//!
//! Both are validated on construction so the calculator can stay total over
//! its inputs.

use crate::error::{AppError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of reading goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalKind {
    /// Read a fixed number of pages every day.
    #[serde(rename = "pages")]
    PagesPerDay,
    /// Finish the book within a number of months.
    #[serde(rename = "duration")]
    FinishByDuration,
}

/// A user-chosen reading pace target.
///
/// `value` is pages per day for [`GoalKind::PagesPerDay`] and months to
/// finish for [`GoalKind::FinishByDuration`]. It is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadingGoal {
    kind: GoalKind,
    value: u32,
}

impl ReadingGoal {
    /// Create a goal, rejecting non-positive or oversized values.
    pub fn new(kind: GoalKind, value: i64) -> Result<Self> {
        if value <= 0 {
            return Err(AppError::InvalidInput(format!(
                "Goal value must be positive, got {}",
                value
            )));
        }

        let value = u32::try_from(value).map_err(|_| {
            AppError::InvalidInput(format!("Goal value out of range: {}", value))
        })?;

        Ok(Self { kind, value })
    }

    /// Pages-per-day goal.
    pub fn pages_per_day(pages: i64) -> Result<Self> {
        Self::new(GoalKind::PagesPerDay, pages)
    }

    /// Finish-within-months goal.
    pub fn finish_in_months(months: i64) -> Result<Self> {
        Self::new(GoalKind::FinishByDuration, months)
    }

    /// Build a goal from the fields of a stored record.
    ///
    /// A disabled goal, a missing kind, or a missing or zero value all mean
    /// "no goal". Negative values are malformed.
    pub fn from_record(
        enabled: bool,
        kind: Option<GoalKind>,
        value: Option<i64>,
    ) -> Result<Option<Self>> {
        if !enabled {
            return Ok(None);
        }

        match (kind, value) {
            (Some(kind), Some(value)) if value != 0 => Self::new(kind, value).map(Some),
            _ => Ok(None),
        }
    }

    /// Goal kind.
    pub fn kind(&self) -> GoalKind {
        self.kind
    }

    /// Goal value (pages per day or months).
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Reading progress of a single book at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    current_page: u32,
    total_pages: Option<u32>,
    start_date: Option<NaiveDate>,
}

impl ProgressSnapshot {
    /// Create a snapshot, rejecting negative or oversized page counts.
    ///
    /// `current_page` may exceed `total_pages`; outputs are clamped instead.
    pub fn new(
        current_page: i64,
        total_pages: Option<i64>,
        start_date: Option<NaiveDate>,
    ) -> Result<Self> {
        let current_page = page_count("current page", current_page)?;
        let total_pages = total_pages
            .map(|t| page_count("total pages", t))
            .transpose()?;

        Ok(Self {
            current_page,
            total_pages,
            start_date,
        })
    }

    /// Current page.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total page count, if the book metadata has one.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Date reading started, if it has.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }
}

fn page_count(field: &str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(AppError::InvalidInput(format!(
            "{} must not be negative, got {}",
            field, value
        )));
    }

    u32::try_from(value)
        .map_err(|_| AppError::InvalidInput(format!("{} out of range: {}", field, value)))
}
