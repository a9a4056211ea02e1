//! tempo-core: deterministic priority round-robin task scheduling.
//!
//! Tasks carry a duration in abstract hours, a priority class (1 = highest)
//! and a calendar deadline. The engine runs the highest-priority tasks
//! round-robin, one quantum at a time, nearest deadline first, and reports
//! an execution timeline plus per-task waiting and turnaround hours.

pub mod engine;
pub mod registry;
pub mod report;
pub mod task;
pub mod time;

pub use engine::{Schedule, Scheduler, TaskStats, TimelineSlice};
pub use registry::TaskRegistry;
pub use report::{render_gantt, render_stats, render_task_table};
pub use task::{Task, priority_label};
pub use time::{days_until, parse_deadline};
