//! readpace command-line entry point.

use clap::Parser;
use readpace::{
    badges::{self, Badge},
    clock::{Clock, FixedClock, SystemClock},
    config::{Cli, Command, Config},
    dates::format_date,
    library::{self, ReadingStatus, UserBook},
    progress::{ProgressCalculator, ProgressReport},
    reminder,
    stats::ReadingStats,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Status line for one book.
#[derive(Debug, Serialize)]
struct BookStatus<'a> {
    book_id: &'a str,
    title: &'a str,
    author: &'a str,
    current_page: u32,
    total_pages: Option<u32>,
    #[serde(flatten)]
    report: ProgressReport,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Find or load config
    let config_path = cli.config.clone().or_else(Config::find_config_file);

    let config = if let Some(ref path) = config_path {
        Config::load(path)?
    } else {
        Config::default()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Freeze the clock once so every figure in a run agrees on "today"
    let clock = match cli.today {
        Some(date) => FixedClock::at_date(date),
        None => FixedClock(SystemClock.now()),
    };

    let books_path = cli
        .books
        .clone()
        .unwrap_or_else(|| config.data.books_path.clone());

    match cli.command {
        Some(Command::Init { force }) => cmd_init(force),
        Some(Command::Status { book_id, json }) => {
            cmd_status(&books_path, clock, book_id.as_deref(), json)
        }
        Some(Command::Stats) => cmd_stats(&books_path, clock, &config),
        Some(Command::Badges) => cmd_badges(&books_path, clock),
        Some(Command::Reminders) => cmd_reminders(&books_path, clock, &config),
        None => cmd_status(&books_path, clock, None, false),
    }
}

/// Write a default config file.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let config_path = PathBuf::from("config.toml");

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, Config::generate_default())?;
    println!("Created config file: {}", config_path.display());
    println!("\nPoint [data] books_path at your exported books file.");

    Ok(())
}

/// Progress and pacing for books being read.
fn cmd_status(
    books_path: &Path,
    clock: FixedClock,
    book_id: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let books = library::load_user_books(books_path)?;
    let calculator = ProgressCalculator::new(clock);

    let selected: Vec<&UserBook> = match book_id {
        Some(id) => vec![library::find_user_book(&books, id)?],
        None => books
            .iter()
            .filter(|b| b.status == ReadingStatus::Reading)
            .collect(),
    };

    let mut rows = Vec::with_capacity(selected.len());
    for user_book in selected {
        let parts = user_book
            .snapshot()
            .and_then(|s| user_book.goal().map(|g| (s, g)));
        let (snapshot, goal) = match parts {
            Ok(parts) => parts,
            Err(e) => {
                tracing::warn!(book = %user_book.book_id, error = %e, "Skipping malformed record");
                continue;
            }
        };

        rows.push(BookStatus {
            book_id: &user_book.book_id,
            title: &user_book.book.title,
            author: user_book.book.author_display(),
            current_page: snapshot.current_page(),
            total_pages: snapshot.total_pages(),
            report: calculator.report(&snapshot, goal),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No books in progress.");
        return Ok(());
    }

    println!(
        "{:<32} {:<20} {:>9} {:>6} {:>9} {:<9} GOAL",
        "TITLE", "AUTHOR", "PAGES", "DONE", "EXPECTED", "PACE"
    );
    println!("{}", "-".repeat(111));
    for row in rows {
        let pages = match row.total_pages {
            Some(total) => format!("{}/{}", row.current_page, total),
            None => format!("{}/?", row.current_page),
        };
        println!(
            "{:<32} {:<20} {:>9} {:>5}% {:>9} {:<9} {}",
            truncate(row.title, 32),
            truncate(row.author, 20),
            pages,
            row.report.percentage,
            row.report.expected_pages,
            if row.report.on_track { "on track" } else { "behind" },
            row.report.goal_description
        );
    }

    Ok(())
}

/// Shelf statistics.
fn cmd_stats(books_path: &Path, clock: FixedClock, config: &Config) -> anyhow::Result<()> {
    let books = library::load_user_books(books_path)?;
    let today = clock.today();
    let stats = ReadingStats::compute(&books, today, config.challenge.yearly_books);

    println!("Statistics as of {}", format_date(today));
    println!("{}", "-".repeat(40));
    println!("{:<28} {}", "Books completed", stats.total_completed);
    println!("{:<28} {}", "Completed this month", stats.completed_this_month);
    println!("{:<28} {}", "Completed this year", stats.completed_this_year);
    println!("{:<28} {}", "Currently reading", stats.currently_reading);
    println!("{:<28} {}%", "Completion rate", stats.completion_rate);
    println!("{:<28} {}", "Reading streak", stats.reading_streak);

    if config.challenge.yearly_books > 0 {
        println!(
            "{:<28} {}/{} ({}%)",
            "Yearly challenge",
            stats.completed_this_year,
            config.challenge.yearly_books,
            stats.yearly_goal_progress
        );
    }

    Ok(())
}

/// Badge catalog with earned state.
fn cmd_badges(books_path: &Path, clock: FixedClock) -> anyhow::Result<()> {
    let books = library::load_user_books(books_path)?;
    let stats = ReadingStats::compute(&books, clock.today(), 0);

    let mut catalog = badges::default_badges();
    badges::award_badges(&mut catalog, stats.total_completed, clock.now().and_utc());

    let earned = catalog.iter().filter(|b| b.earned).count();
    println!("{} of {} badges earned", earned, catalog.len());
    println!("{}", "-".repeat(60));
    for badge in &catalog {
        println!("{}", badge_line(badge, stats.total_completed));
    }

    if let Some(next) = badges::next_badge(&catalog) {
        println!(
            "\nNext: {} in {} more books",
            next.name,
            next.books_remaining(stats.total_completed)
        );
    }

    Ok(())
}

fn badge_line(badge: &Badge, completed: u32) -> String {
    if badge.earned {
        format!("{} {:<24} earned", badge.icon, badge.name)
    } else {
        format!(
            "{} {:<24} {}/{} books",
            badge.icon,
            badge.name,
            completed.min(badge.books_required),
            badge.books_required
        )
    }
}

/// Reminders that would be scheduled next.
fn cmd_reminders(books_path: &Path, clock: FixedClock, config: &Config) -> anyhow::Result<()> {
    if !config.reminders.enabled {
        println!("Reminders are disabled.");
        return Ok(());
    }

    let books = library::load_user_books(books_path)?;
    let reminders: Vec<_> = books
        .iter()
        .filter_map(|b| reminder::compose_reminder(b, clock.now(), config.reminders.hour))
        .collect();

    if reminders.is_empty() {
        println!("No reminders scheduled.");
        return Ok(());
    }

    for r in reminders {
        println!("[{}] {} (id {})", r.fire_at.format("%Y-%m-%d %H:%M"), r.title, r.id);
        println!("    {}", r.message);
    }

    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
