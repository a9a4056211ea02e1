//! Scheduler Engine — priority round-robin with deadline tie-break.
//!
//! One call to [`Scheduler::run`] simulates the whole schedule on an
//! abstract hour clock: repeatedly pick every not-yet-finished task of the
//! currently highest priority class (lowest number), give each at most one
//! quantum in ascending deadline order, and re-evaluate. The run is fully
//! deterministic for a given registry and quantum.
//!
//! Waiting-time accounting: every slice adds its length to *every* other
//! task that still has work left, including tasks later in the same batch
//! pass and tasks of lower priority classes. Batch members therefore accrue
//! waiting from slices within their own pass. That accounting is part of
//! the engine's contract; changing it changes every reported statistic.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::registry::TaskRegistry;

/// One contiguous stretch of a task on the simulated clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSlice {
    pub task_name: String,
    pub start_hour: i32,
    pub end_hour: i32,
}

/// Final per-task accounting for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub name: String,
    pub waiting_hours: i32,
    pub turnaround_hours: i32,
}

/// Result of a scheduling run.
///
/// `stats` follows registry insertion order. The averages are unrounded;
/// display layers round to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub timeline: Vec<TimelineSlice>,
    pub stats: Vec<TaskStats>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl Schedule {
    /// Total simulated hours, i.e. the end of the last slice.
    pub fn makespan(&self) -> i32 {
        self.timeline.last().map(|s| s.end_hour).unwrap_or(0)
    }
}

/// Round-robin engine with a fixed time quantum (max contiguous hours a
/// task may run before yielding to the rest of its priority batch).
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    quantum: i32,
}

impl Scheduler {
    pub fn new(quantum: i32) -> Result<Self> {
        if quantum <= 0 {
            bail!("quantum must be a positive number of hours, got {quantum}");
        }
        Ok(Self { quantum })
    }

    pub fn quantum(&self) -> i32 {
        self.quantum
    }

    /// Schedule every task in the registry to completion.
    ///
    /// Resets the registry's per-run state first, so calling this twice on
    /// the same registry yields identical results. Fails on an empty
    /// registry before touching any state.
    pub fn run(&self, registry: &mut TaskRegistry) -> Result<Schedule> {
        if registry.is_empty() {
            bail!("nothing to schedule: add at least one task first");
        }

        registry.reset_for_run();

        let tasks = registry.tasks_mut();
        let total = tasks.len();
        let mut time: i32 = 0;
        let mut completed: usize = 0;
        let mut timeline: Vec<TimelineSlice> = Vec::new();

        while completed < total {
            // Highest priority among tasks with work left. None means the
            // ready set is empty; with the completion counter intact that
            // cannot happen, but guard rather than spin.
            let Some(highest) = tasks
                .iter()
                .filter(|t| t.remaining > 0)
                .map(|t| t.priority)
                .min()
            else {
                break;
            };

            // The batch: all ready tasks of that class, earliest deadline
            // first. The sort is stable, so equal deadline distances fall
            // back to insertion order.
            let mut batch: Vec<usize> = (0..total)
                .filter(|&i| tasks[i].remaining > 0 && tasks[i].priority == highest)
                .collect();
            batch.sort_by_key(|&i| tasks[i].days_until_deadline);

            // One quantum slice per batch member, then re-evaluate.
            for &i in &batch {
                let exec = self.quantum.min(tasks[i].remaining);
                timeline.push(TimelineSlice {
                    task_name: tasks[i].name.clone(),
                    start_hour: time,
                    end_hour: time + exec,
                });
                time += exec;
                tasks[i].remaining -= exec;

                for j in 0..total {
                    if j != i && tasks[j].remaining > 0 {
                        tasks[j].waiting += exec;
                    }
                }

                if tasks[i].remaining == 0 {
                    completed += 1;
                    tasks[i].turnaround = time;
                }
            }
        }

        let stats: Vec<TaskStats> = tasks
            .iter()
            .map(|t| TaskStats {
                name: t.name.clone(),
                waiting_hours: t.waiting,
                turnaround_hours: t.turnaround,
            })
            .collect();

        let n = total as f64;
        let avg_waiting = stats.iter().map(|s| s.waiting_hours as f64).sum::<f64>() / n;
        let avg_turnaround = stats.iter().map(|s| s.turnaround_hours as f64).sum::<f64>() / n;

        Ok(Schedule {
            timeline,
            stats,
            avg_waiting,
            avg_turnaround,
        })
    }
}
