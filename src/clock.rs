//! Time and ID provider
//!
//! All task IDs use the format: `{6-char-hex}-task-{slug}`.
//! Example: `019430-task-plan-family-vacation`.
//!
//! The pipeline never reads the system clock directly; injecting [`Clock`]
//! keeps every stage deterministic under test.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Source of the current time and fresh task identifiers
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Generate a unique task ID incorporating a slug of `name`
    fn new_id(&self, name: &str) -> String;
}

/// Production clock backed by system time and UUIDv7 entropy
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn new_id(&self, name: &str) -> String {
        let uuid = uuid::Uuid::now_v7();
        let hex_prefix = &uuid.to_string()[..6];
        format!("{}-task-{}", hex_prefix, slugify(name))
    }
}

/// Deterministic clock for tests: pinned instant, sequential IDs
#[derive(Debug)]
pub struct FixedClock {
    now: DateTime<Utc>,
    counter: AtomicU64,
}

impl FixedClock {
    /// Pin the clock to midnight UTC on the given date
    pub fn at(date: NaiveDate) -> Self {
        Self {
            now: date.and_time(NaiveTime::MIN).and_utc(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn new_id(&self, name: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{:06x}-task-{}", n, slugify(name))
    }
}

/// Slugify a title for use in IDs
fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        // Strip apostrophes entirely, replace other non-alphanumeric with hyphens
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c)
            } else if c == '\'' || c == '\u{2019}' || c == '\u{2018}' {
                None
            } else {
                Some('-')
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(50)
        .collect()
}
