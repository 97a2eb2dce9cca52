use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reading goal pacing and progress tracking.
#[derive(Parser, Debug, Clone)]
#[command(name = "readpace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file.
    #[arg(short, long, env = "READPACE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Path to the books file (overrides config).
    #[arg(short, long, env = "READPACE_BOOKS", global = true)]
    pub books: Option<PathBuf>,

    /// Evaluate as of this date instead of the current date (YYYY-MM-DD).
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show progress and pacing for books being read (default).
    Status {
        /// Only show this book.
        book_id: Option<String>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show shelf statistics.
    Stats,

    /// Show badges and which are earned.
    Badges,

    /// Show the reminders that would be scheduled next.
    Reminders,

    /// Create a default config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Main configuration from TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data file configuration.
    #[serde(default)]
    pub data: DataConfig,

    /// Reminder configuration.
    #[serde(default)]
    pub reminders: ReminderConfig,

    /// Yearly challenge configuration.
    #[serde(default)]
    pub challenge: ChallengeConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Data file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the JSON books file exported by the book store.
    #[serde(default = "default_books_path")]
    pub books_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            books_path: default_books_path(),
        }
    }
}

fn default_books_path() -> PathBuf {
    PathBuf::from("data/books.json")
}

/// Reminder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Whether reminders are listed.
    #[serde(default = "default_reminders_enabled")]
    pub enabled: bool,

    /// Hour of day (0-23) reminders fire at.
    #[serde(default = "default_reminder_hour")]
    pub hour: u32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: default_reminders_enabled(),
            hour: default_reminder_hour(),
        }
    }
}

fn default_reminders_enabled() -> bool {
    true
}

fn default_reminder_hour() -> u32 {
    6
}

/// Yearly challenge configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChallengeConfig {
    /// Books to finish this year (0 to disable).
    #[serde(default)]
    pub yearly_books: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "readpace=info".to_string()
}

impl Config {
    /// Load configuration from file.
    pub fn load(path: &PathBuf) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to read config file: {}", e))
        })?;

        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> crate::error::Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to parse config file: {}", e))
        })?;

        if config.reminders.hour > 23 {
            return Err(crate::error::AppError::Config(format!(
                "reminders.hour must be between 0 and 23, got {}",
                config.reminders.hour
            )));
        }

        Ok(config)
    }

    /// Find config file in default locations.
    pub fn find_config_file() -> Option<PathBuf> {
        let candidates = [
            PathBuf::from("config.toml"),
            PathBuf::from("readpace.toml"),
            dirs::config_dir()
                .map(|p| p.join("readpace").join("config.toml"))
                .unwrap_or_default(),
        ];

        candidates
            .into_iter()
            .find(|p| !p.as_os_str().is_empty() && p.exists())
    }

    /// Generate default config file content.
    pub fn generate_default() -> String {
        r#"# readpace configuration

[data]
# JSON export of the book store
books_path = "data/books.json"

[reminders]
enabled = true
# Hour of day (0-23)
hour = 6

[challenge]
# Books to finish this year (0 to disable)
yearly_books = 0

[log]
# Used when RUST_LOG is not set
filter = "readpace=info"
"#
        .to_string()
    }
}
