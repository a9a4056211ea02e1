use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tempo_core::{Scheduler, render_gantt, render_stats, render_task_table};

mod input;

#[derive(Parser, Debug)]
#[command(name = "tempo", version, about = "Priority round-robin task scheduler")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the execution timeline and waiting/turnaround statistics
    Schedule {
        /// Inline task spec NAME:YYYY-MM-DD:HOURS:PRIORITY (repeatable)
        #[arg(long = "task")]
        tasks: Vec<String>,

        /// JSON file with an array of {name, deadline, duration, priority}
        #[arg(long = "tasks")]
        task_file: Option<PathBuf>,

        /// Hours a task may run before yielding to its priority peers
        #[arg(long)]
        quantum: i32,

        /// Override the creation date used for deadline distances
        /// (default: today)
        #[arg(long)]
        today: Option<String>,

        /// Emit the schedule as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the pending-task table without scheduling
    Tasks {
        /// Inline task spec NAME:YYYY-MM-DD:HOURS:PRIORITY (repeatable)
        #[arg(long = "task")]
        tasks: Vec<String>,

        /// JSON file with an array of {name, deadline, duration, priority}
        #[arg(long = "tasks")]
        task_file: Option<PathBuf>,

        /// Override the creation date used for deadline distances
        #[arg(long)]
        today: Option<String>,
    },
}

fn resolve_today(flag: Option<&str>) -> Result<NaiveDate> {
    match flag {
        Some(s) => tempo_core::parse_deadline(s).context("--today"),
        None => Ok(Local::now().date_naive()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Schedule {
            tasks,
            task_file,
            quantum,
            today,
            json,
        } => {
            let today = resolve_today(today.as_deref())?;
            let mut registry = input::build_registry(task_file.as_ref(), &tasks, today)?;

            let engine = Scheduler::new(quantum)?;
            let schedule = engine.run(&mut registry)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                println!("{}", render_task_table(&registry));
                println!("{}\n", render_gantt(&schedule));
                println!("{}", render_stats(&registry, &schedule));
            }
        }

        Command::Tasks {
            tasks,
            task_file,
            today,
        } => {
            let today = resolve_today(today.as_deref())?;
            let registry = input::build_registry(task_file.as_ref(), &tasks, today)?;
            if registry.is_empty() {
                println!("no tasks yet: pass --task or --tasks <file>");
            } else {
                println!("{}", render_task_table(&registry));
            }
        }
    }

    Ok(())
}
