//! Plain-text rendering of the task table, Gantt timeline, and statistics.
//!
//! Pure string building so the CLI stays thin and the formats are testable.

use crate::engine::Schedule;
use crate::registry::TaskRegistry;
use crate::task::{Task, priority_label};

/// Gantt timeline as `NAME [S-Eh]` entries joined by arrows, wrapped to a
/// fresh line after every third entry.
pub fn render_gantt(schedule: &Schedule) -> String {
    let mut out = String::from("Timeline:\n\n");
    let last = schedule.timeline.len().saturating_sub(1);
    for (i, s) in schedule.timeline.iter().enumerate() {
        out.push_str(&format!("{} [{}-{}h]", s.task_name, s.start_hour, s.end_hour));
        if i < last {
            out.push_str(" -> ");
            if (i + 1) % 3 == 0 {
                out.push('\n');
            }
        }
    }
    out
}

fn deadline_note(t: &Task) -> String {
    match t.days_until_deadline {
        d if d < 0 => format!("overdue by {} days", -d),
        0 => "due today".to_string(),
        d => format!("{d} days left"),
    }
}

/// Pending-task table, nearest deadline first.
pub fn render_task_table(registry: &TaskRegistry) -> String {
    let width = registry
        .tasks()
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = String::new();
    out.push_str(&format!(
        "{:width$}  {:10}  {:>5}  {:12}  deadline\n",
        "task", "due", "hours", "priority"
    ));
    for t in registry.by_deadline() {
        out.push_str(&format!(
            "{:width$}  {:10}  {:>4}h  P{:<2} {:8}  {}\n",
            t.name,
            t.deadline.to_string(),
            t.duration,
            t.priority,
            priority_label(t.priority),
            deadline_note(t),
        ));
    }
    out
}

/// Per-task waiting/turnaround in deadline order, plus the one-decimal
/// averages.
pub fn render_stats(registry: &TaskRegistry, schedule: &Schedule) -> String {
    let mut out = String::new();
    for t in registry.by_deadline() {
        out.push_str(&format!(
            "{}: waited {}h, finished at hour {}\n",
            t.name, t.waiting, t.turnaround
        ));
    }
    out.push_str(&format!(
        "\naverage waiting:    {:.1}h\naverage turnaround: {:.1}h\n",
        schedule.avg_waiting, schedule.avg_turnaround
    ));
    out
}
