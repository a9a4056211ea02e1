//! Task intake: inline `--task` specs and JSON task files.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tempo_core::{TaskRegistry, parse_deadline};

/// On-disk / flag-level task definition, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,
    /// Calendar date, YYYY-MM-DD.
    pub deadline: String,
    /// Hours of work.
    pub duration: i32,
    /// 1 = highest.
    pub priority: i32,
}

impl TaskSpec {
    /// Parse an inline spec of the form `NAME:YYYY-MM-DD:HOURS:PRIORITY`.
    pub fn parse(spec: &str) -> Result<Self> {
        let parts: Vec<&str> = spec.split(':').collect();
        let [name, deadline, duration, priority] = parts.as_slice() else {
            bail!("bad task spec '{spec}' (expected NAME:YYYY-MM-DD:HOURS:PRIORITY)");
        };
        Ok(Self {
            name: name.to_string(),
            deadline: deadline.to_string(),
            duration: duration
                .parse()
                .with_context(|| format!("task '{name}': bad duration '{duration}'"))?,
            priority: priority
                .parse()
                .with_context(|| format!("task '{name}': bad priority '{priority}'"))?,
        })
    }
}

/// Read a JSON array of task specs.
pub fn load_task_file(path: &Path) -> Result<Vec<TaskSpec>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading task file {}", path.display()))?;
    let specs: Vec<TaskSpec> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing task file {}", path.display()))?;
    Ok(specs)
}

/// Build the registry from a task file (first) and inline specs, validating
/// each entry against `today`.
pub fn build_registry(
    file: Option<&PathBuf>,
    inline: &[String],
    today: NaiveDate,
) -> Result<TaskRegistry> {
    let mut specs = Vec::new();
    if let Some(path) = file {
        specs.extend(load_task_file(path)?);
    }
    for s in inline {
        specs.push(TaskSpec::parse(s)?);
    }

    let mut registry = TaskRegistry::new();
    for spec in specs {
        let deadline = parse_deadline(&spec.deadline)
            .with_context(|| format!("task '{}'", spec.name))?;
        registry.add_task(spec.name, deadline, spec.duration, spec.priority, today)?;
    }
    Ok(registry)
}
