//! Command-line front end for Task Tracker
//!
//! Every command loads the task file, acts on the collection and writes
//! the file back when something changed.

mod input;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracker_core::config::TrackerConfig;
use tracker_core::task::{SortKey, Task, TaskCollection, TaskRecord};

use crate::input::parse_new_task;

#[derive(Parser)]
#[command(name = "task-tracker", version, about = "Track tasks by subject and priority")]
struct Cli {
    /// Task file (CSV, or JSON when it ends in .json)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List tasks in sorted order
    List {
        /// Completed, Name, Priority or Subject
        #[arg(long)]
        sort: Option<String>,
        /// Print the tasks as JSON records
        #[arg(long)]
        json: bool,
    },
    /// Add a new task
    Add {
        name: String,
        subject: String,
        priority: String,
    },
    /// Mark a task completed, or uncompleted if it already is
    Toggle {
        /// 1-based position in the listing sorted by --sort
        index: usize,
        #[arg(long)]
        sort: Option<String>,
    },
    /// Remove every completed task
    ClearCompleted,
    /// Print the available sort labels
    Sorts,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_tracker=info,tracker_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = TrackerConfig::from_env();
    if let Some(file) = cli.file {
        config.tasks_file = file;
    }
    tracing::debug!("Using task file: {:?}", config.tasks_file);

    match cli.command.unwrap_or(Command::List {
        sort: None,
        json: false,
    }) {
        Command::List { sort, json } => list(&config, sort.as_deref(), json),
        Command::Add {
            name,
            subject,
            priority,
        } => add(&config, &name, &subject, &priority),
        Command::Toggle { index, sort } => toggle(&config, index, sort.as_deref()),
        Command::ClearCompleted => clear_completed(&config),
        Command::Sorts => {
            for label in SortKey::labels() {
                println!("{}", label);
            }
            Ok(())
        }
    }
}

fn list(config: &TrackerConfig, sort: Option<&str>, json: bool) -> Result<()> {
    let mut collection = open_collection(&config.tasks_file)?;
    collection.sort(resolve_sort(config, sort)?);

    if json {
        let records: Vec<TaskRecord> = collection.iter().map(TaskRecord::from).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("{}", collection.summary_line());
    for (number, task) in collection.iter().enumerate() {
        println!("{:>3}. {}", number + 1, task);
    }
    Ok(())
}

fn add(config: &TrackerConfig, name: &str, subject: &str, priority: &str) -> Result<()> {
    let fields = parse_new_task(name, subject, priority)?;
    let task = Task::new(fields.name, fields.subject, fields.priority)?;

    let mut collection = open_collection(&config.tasks_file)?;
    let confirmation = collection.add(task);
    save_collection(&collection, &config.tasks_file)?;

    println!("{}", confirmation);
    println!("{}", collection.summary_line());
    Ok(())
}

fn toggle(config: &TrackerConfig, index: usize, sort: Option<&str>) -> Result<()> {
    let mut collection = open_collection(&config.tasks_file)?;
    collection.sort(resolve_sort(config, sort)?);

    let Some(id) = index
        .checked_sub(1)
        .and_then(|i| collection.tasks().get(i))
        .map(Task::id)
    else {
        bail!(
            "No task at position {} (there are {} tasks)",
            index,
            collection.len()
        );
    };
    let message = collection.toggle_completion(id, &config.importance)?;
    save_collection(&collection, &config.tasks_file)?;

    println!("{}", message);
    println!("{}", collection.summary_line());
    Ok(())
}

fn clear_completed(config: &TrackerConfig) -> Result<()> {
    let mut collection = open_collection(&config.tasks_file)?;
    let removed = collection.remove_completed();

    if removed.is_empty() {
        println!("No completed tasks to remove.");
        return Ok(());
    }

    save_collection(&collection, &config.tasks_file)?;
    println!("All completed tasks removed.");
    println!("{}", collection.summary_line());
    Ok(())
}

fn resolve_sort(config: &TrackerConfig, label: Option<&str>) -> Result<SortKey> {
    match label {
        Some(label) => Ok(label.parse()?),
        None => Ok(config.sort),
    }
}

/// Load the task file; a missing file means no tasks yet
fn open_collection(path: &Path) -> Result<TaskCollection> {
    let mut collection = TaskCollection::new();
    if !path.exists() {
        tracing::info!("No task file at {:?}, starting empty", path);
        return Ok(collection);
    }
    collection
        .load(path)
        .with_context(|| format!("Failed to load tasks from {}", path.display()))?;
    Ok(collection)
}

fn save_collection(collection: &TaskCollection, path: &Path) -> Result<()> {
    collection
        .save(path)
        .with_context(|| format!("Failed to save tasks to {}", path.display()))
}
