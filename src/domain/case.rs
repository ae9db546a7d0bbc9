use crate::domain::ids::CaseId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single work item on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Case {
    /// Creates a new case stamped with the current time
    pub fn new(id: CaseId, title: String) -> Self {
        Self::stamped(id, title, Utc::now())
    }

    /// Creates a case whose creation and update times are `at`
    pub fn stamped(id: CaseId, title: String, at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            created_at: at,
            updated_at: at,
        }
    }

    /// Marks the case as updated now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Display label for the last update, relative to `now`
    pub fn updated_label(&self, now: DateTime<Utc>) -> String {
        relative_label(self.updated_at, now)
    }
}

/// Renders `at` relative to `now`: "Just now", "5 minutes ago", "3 days ago".
///
/// Timestamps in the future render as "Just now".
pub fn relative_label(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);

    if elapsed < Duration::minutes(1) {
        return "Just now".to_string();
    }

    let (amount, unit) = if elapsed < Duration::hours(1) {
        (elapsed.num_minutes(), "minute")
    } else if elapsed < Duration::days(1) {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}
