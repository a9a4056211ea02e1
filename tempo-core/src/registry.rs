//! TaskRegistry — insertion-ordered task collection with validated intake.
//!
//! The registry owns every task for the session and is the only thing the
//! engine mutates. Insertion order is the final tie-break for scheduling,
//! so the registry never reorders; the deadline-sorted view is presentation
//! only.

use anyhow::{Result, bail};
use chrono::NaiveDate;

use crate::task::Task;

#[derive(Debug, Default, Clone)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validate and append a task, computing its deadline distance against
    /// `today`. On error nothing is added.
    ///
    /// Duplicate names are allowed; identity is positional.
    pub fn add_task(
        &mut self,
        name: impl Into<String>,
        deadline: NaiveDate,
        duration: i32,
        priority: i32,
        today: NaiveDate,
    ) -> Result<&Task> {
        let name = name.into();
        if name.trim().is_empty() {
            bail!("task name must not be empty");
        }
        if duration <= 0 {
            bail!("task '{name}': duration must be a positive number of hours, got {duration}");
        }
        if priority < 1 {
            bail!("task '{name}': priority must be >= 1, got {priority}");
        }

        self.tasks.push(Task::new(name, deadline, duration, priority, today));
        Ok(self.tasks.last().expect("just pushed"))
    }

    /// Restore every task to its pre-run state: full remaining work, zero
    /// waiting and turnaround. No-op on an empty registry.
    pub fn reset_for_run(&mut self) {
        for t in &mut self.tasks {
            t.remaining = t.duration;
            t.waiting = 0;
            t.turnaround = 0;
        }
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    /// Deadline-ascending view for display. Stable, so equal deadlines keep
    /// insertion order.
    pub fn by_deadline(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by_key(|t| t.deadline);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_deadline;

    fn d(s: &str) -> NaiveDate {
        parse_deadline(s).unwrap()
    }

    const TODAY: &str = "2026-08-29";

    #[test]
    fn add_task_appends_in_insertion_order() {
        let mut reg = TaskRegistry::new();
        reg.add_task("b", d("2026-09-10"), 4, 2, d(TODAY)).unwrap();
        reg.add_task("a", d("2026-09-01"), 2, 1, d(TODAY)).unwrap();

        let names: Vec<&str> = reg.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn add_task_rejects_bad_input_without_mutation() {
        let mut reg = TaskRegistry::new();

        assert!(reg.add_task("  ", d("2026-09-01"), 2, 1, d(TODAY)).is_err());
        assert!(reg.add_task("x", d("2026-09-01"), 0, 1, d(TODAY)).is_err());
        assert!(reg.add_task("x", d("2026-09-01"), -3, 1, d(TODAY)).is_err());
        assert!(reg.add_task("x", d("2026-09-01"), 2, 0, d(TODAY)).is_err());

        assert!(reg.is_empty());
    }

    #[test]
    fn reset_for_run_restores_mutable_fields() {
        let mut reg = TaskRegistry::new();
        reg.add_task("a", d("2026-09-01"), 5, 1, d(TODAY)).unwrap();

        {
            let t = &mut reg.tasks_mut()[0];
            t.remaining = 0;
            t.waiting = 7;
            t.turnaround = 12;
        }

        reg.reset_for_run();
        let t = &reg.tasks()[0];
        assert_eq!(t.remaining, 5);
        assert_eq!(t.waiting, 0);
        assert_eq!(t.turnaround, 0);
    }

    #[test]
    fn by_deadline_is_a_stable_view() {
        let mut reg = TaskRegistry::new();
        reg.add_task("late", d("2026-09-20"), 1, 1, d(TODAY)).unwrap();
        reg.add_task("soon", d("2026-09-01"), 1, 1, d(TODAY)).unwrap();
        reg.add_task("also-soon", d("2026-09-01"), 1, 1, d(TODAY)).unwrap();

        let names: Vec<&str> = reg.by_deadline().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["soon", "also-soon", "late"]);

        // The registry itself keeps insertion order.
        assert_eq!(reg.tasks()[0].name, "late");
    }
}
