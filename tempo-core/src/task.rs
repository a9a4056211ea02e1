//! Task model for the priority round-robin scheduler.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::days_until;

/// One unit of work to schedule.
///
/// Note: we keep this small + serializable. The mutable fields (`remaining`,
/// `waiting`, `turnaround`) belong to a single scheduling run and are reset
/// by the registry before every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,

    /// Hard calendar deadline; only its distance from the creation date
    /// feeds the tie-break ordering.
    pub deadline: NaiveDate,

    /// Whole days from the creation date to the deadline. May be zero or
    /// negative (overdue). Computed once at creation, never updated.
    pub days_until_deadline: i64,

    /// Total work in abstract hours. Immutable once created.
    pub duration: i32,

    /// Urgency class, 1 = highest. Any positive integer is accepted.
    pub priority: i32,

    /// Hours of work left; `duration` down to 0.
    pub remaining: i32,

    /// Hours spent eligible-but-not-running during the current run.
    pub waiting: i32,

    /// Simulated clock hour at which the task completed; 0 until then.
    pub turnaround: i32,
}

impl Task {
    /// Build a task, computing the deadline distance against `today`.
    ///
    /// Validation (non-empty name, positive duration/priority) lives in
    /// `TaskRegistry::add_task`; this constructor assumes clean input.
    pub fn new(
        name: impl Into<String>,
        deadline: NaiveDate,
        duration: i32,
        priority: i32,
        today: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            deadline,
            days_until_deadline: days_until(deadline, today),
            duration,
            priority,
            remaining: duration,
            waiting: 0,
            turnaround: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// Human-readable label for a priority class.
pub fn priority_label(priority: i32) -> &'static str {
    match priority {
        1 => "critical",
        2 => "important",
        _ => "normal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn new_task_starts_with_full_remaining_and_zeroed_stats() {
        let t = Task::new("essay", d("2026-09-05"), 5, 1, d("2026-08-29"));
        assert_eq!(t.remaining, 5);
        assert_eq!(t.waiting, 0);
        assert_eq!(t.turnaround, 0);
        assert_eq!(t.days_until_deadline, 7);
        assert!(!t.is_complete());
    }

    #[test]
    fn overdue_deadline_gives_negative_days() {
        let t = Task::new("late", d("2026-08-25"), 2, 1, d("2026-08-29"));
        assert_eq!(t.days_until_deadline, -4);
    }

    #[test]
    fn priority_labels() {
        assert_eq!(priority_label(1), "critical");
        assert_eq!(priority_label(2), "important");
        assert_eq!(priority_label(3), "normal");
        assert_eq!(priority_label(9), "normal");
    }
}
