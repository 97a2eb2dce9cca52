//! Achievement badges unlocked by completing books.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An achievement badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Badge id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What it takes to earn it.
    pub description: String,
    /// Completed books needed.
    pub books_required: u32,
    /// Emoji icon.
    pub icon: String,
    /// Whether the badge has been earned.
    #[serde(default)]
    pub earned: bool,
    /// When it was earned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_date: Option<DateTime<Utc>>,
}

impl Badge {
    fn milestone(books_required: u32, name: &str, icon: &str) -> Self {
        Self {
            id: format!("badge-{}", books_required),
            name: name.to_string(),
            description: format!("Complete {} books", books_required),
            books_required,
            icon: icon.to_string(),
            earned: false,
            earned_date: None,
        }
    }

    /// Books still to complete before this badge is earned.
    pub fn books_remaining(&self, completed: u32) -> u32 {
        self.books_required.saturating_sub(completed)
    }
}

/// The default badge catalog, ordered by requirement.
pub fn default_badges() -> Vec<Badge> {
    vec![
        Badge::milestone(25, "Bookworm", "📚"),
        Badge::milestone(50, "Book Enthusiast", "📖"),
        Badge::milestone(75, "Avid Reader", "📕"),
        Badge::milestone(100, "Century Reader", "🏆"),
        Badge::milestone(150, "Master Reader", "🌟"),
        Badge::milestone(200, "Reading Legend", "👑"),
        Badge::milestone(500, "Ultimate Bibliophile", "🎖️"),
    ]
}

/// Mark every badge whose requirement `completed` meets as earned.
///
/// Already earned badges keep their date and are never revoked. Returns the
/// ids of badges earned by this call.
pub fn award_badges(badges: &mut [Badge], completed: u32, now: DateTime<Utc>) -> Vec<String> {
    let mut newly_earned = Vec::new();

    for badge in badges.iter_mut() {
        if badge.earned || completed < badge.books_required {
            continue;
        }

        badge.earned = true;
        badge.earned_date = Some(now);
        tracing::info!(badge = %badge.name, completed, "Badge earned");
        newly_earned.push(badge.id.clone());
    }

    tracing::debug!(completed, earned = newly_earned.len(), "Evaluated badges");
    newly_earned
}

/// The unearned badge closest to being earned.
pub fn next_badge(badges: &[Badge]) -> Option<&Badge> {
    badges
        .iter()
        .filter(|b| !b.earned)
        .min_by_key(|b| b.books_required)
}
