//! Goal pacing and progress calculations.
//!
//! All functions here are pure: "today" is always passed in (directly or via a
//! [`Clock`]), nothing is stored between calls, and every documented input is
//! handled without an error. Malformed inputs are rejected earlier, when the
//! [`ReadingGoal`] and [`ProgressSnapshot`] values are built.

use crate::clock::{Clock, SystemClock};
use crate::dates::days_between;
use crate::library::{GoalKind, ProgressSnapshot, ReadingGoal};
use chrono::NaiveDate;
use serde::Serialize;

/// Days per month used by duration goals.
///
/// Fixed approximation, not calendar months: a 2-month goal is 60 days.
pub const DAYS_PER_MONTH: u32 = 30;

/// Whole days elapsed from `start_date` to `today`.
///
/// Zero when reading started today, negative when `start_date` is in the
/// future. Callers clamp where negative days make no sense.
pub fn days_since_start(start_date: NaiveDate, today: NaiveDate) -> i64 {
    days_between(start_date, today)
}

/// Percentage of the book read, in `0..=100`.
///
/// Rounds half up. Unknown or zero `total_pages` yields 0.
pub fn calculate_progress(current_page: u32, total_pages: Option<u32>) -> u8 {
    let total = match total_pages {
        Some(t) if t > 0 => u64::from(t),
        _ => return 0,
    };

    let current = u64::from(current_page);
    let percent = (200 * current + total) / (2 * total);
    percent.min(100) as u8
}

/// Pages the reader should have reached by `today` to stay on pace.
///
/// Returns 0 when there is no goal or no known page count. The result is
/// always within `0..=total_pages` and never decreases as `today` advances.
pub fn calculate_expected_pages(
    start_date: NaiveDate,
    goal: Option<ReadingGoal>,
    total_pages: Option<u32>,
    today: NaiveDate,
) -> u32 {
    let (goal, total) = match (goal, total_pages) {
        (Some(goal), Some(total)) if total > 0 => (goal, total),
        _ => return 0,
    };

    let days = days_since_start(start_date, today).max(0) as u64;

    match goal.kind() {
        GoalKind::PagesPerDay => {
            let expected = days.saturating_mul(u64::from(goal.value()));
            expected.min(u64::from(total)) as u32
        }
        GoalKind::FinishByDuration => {
            let budget = u128::from(goal.value()) * u128::from(DAYS_PER_MONTH);
            let scaled = 2 * u128::from(total) * u128::from(days);
            let expected = (scaled + budget) / (2 * budget);
            expected.min(u128::from(total)) as u32
        }
    }
}

/// Expected pages for a snapshot. Without a start date there is no pace to
/// keep, so the target is 0.
pub fn expected_pages_for(
    snapshot: &ProgressSnapshot,
    goal: Option<ReadingGoal>,
    today: NaiveDate,
) -> u32 {
    snapshot
        .start_date()
        .map(|start| calculate_expected_pages(start, goal, snapshot.total_pages(), today))
        .unwrap_or(0)
}

/// Whether `current_page` meets the pacing target.
///
/// Always true without a goal or page count: the target is then 0.
pub fn is_on_track(
    current_page: u32,
    start_date: NaiveDate,
    goal: Option<ReadingGoal>,
    total_pages: Option<u32>,
    today: NaiveDate,
) -> bool {
    current_page >= calculate_expected_pages(start_date, goal, total_pages, today)
}

/// Human-readable goal text.
pub fn describe_goal(goal: Option<ReadingGoal>) -> String {
    match goal {
        None => "No goal set".to_string(),
        Some(goal) => match goal.kind() {
            GoalKind::PagesPerDay => format!("{} pages per day", goal.value()),
            GoalKind::FinishByDuration if goal.value() == 1 => "Complete in 1 month".to_string(),
            GoalKind::FinishByDuration => format!("Complete in {} months", goal.value()),
        },
    }
}

/// Derived figures for one book, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    /// Percentage read.
    pub percentage: u8,
    /// Pacing target for today.
    pub expected_pages: u32,
    /// Current page meets the pacing target.
    pub on_track: bool,
    /// Days since reading started, if it has.
    pub days_elapsed: Option<i64>,
    /// Pages left, if the page count is known.
    pub pages_remaining: Option<u32>,
    /// Goal text.
    pub goal_description: String,
}

impl ProgressReport {
    /// Compute the report for a snapshot and goal as of `today`.
    pub fn compute(
        snapshot: &ProgressSnapshot,
        goal: Option<ReadingGoal>,
        today: NaiveDate,
    ) -> Self {
        let current = snapshot.current_page();
        let expected_pages = expected_pages_for(snapshot, goal, today);

        let report = Self {
            percentage: calculate_progress(current, snapshot.total_pages()),
            expected_pages,
            on_track: current >= expected_pages,
            days_elapsed: snapshot.start_date().map(|s| days_since_start(s, today)),
            pages_remaining: snapshot.total_pages().map(|t| t.saturating_sub(current)),
            goal_description: describe_goal(goal),
        };

        tracing::debug!(
            percentage = report.percentage,
            expected = report.expected_pages,
            on_track = report.on_track,
            "Computed progress report"
        );

        report
    }
}

/// Progress calculations with "today" taken from a clock.
#[derive(Debug, Clone, Default)]
pub struct ProgressCalculator<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> ProgressCalculator<C> {
    /// Create a calculator reading dates from `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Current date according to the clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Days since `start_date`, as of the clock's today.
    pub fn days_since_start(&self, start_date: NaiveDate) -> i64 {
        days_since_start(start_date, self.today())
    }

    /// Pacing target for a snapshot.
    pub fn expected_pages(&self, snapshot: &ProgressSnapshot, goal: Option<ReadingGoal>) -> u32 {
        expected_pages_for(snapshot, goal, self.today())
    }

    /// Whether a snapshot is on pace.
    pub fn is_on_track(&self, snapshot: &ProgressSnapshot, goal: Option<ReadingGoal>) -> bool {
        snapshot.current_page() >= self.expected_pages(snapshot, goal)
    }

    /// Full report for a snapshot.
    pub fn report(&self, snapshot: &ProgressSnapshot, goal: Option<ReadingGoal>) -> ProgressReport {
        ProgressReport::compute(snapshot, goal, self.today())
    }
}
