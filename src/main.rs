//! daily-todo - Command-line entry point
//!
//! Thin UI surface over the `daily_todo` library: each subcommand maps 1:1
//! to one task store operation.

use anyhow::Result;
use clap::{Parser, Subcommand};
use daily_todo::TodoApp;
use daily_todo::todo::SystemClock;
use std::path::PathBuf;

/// Daily to-do list - tasks grouped by due date
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the task data file
    #[arg(short, long, default_value = "todo.toml")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task
    Add {
        /// Task text
        text: String,
        /// Priority: low, medium, high (default: medium)
        #[arg(short, long)]
        priority: Option<String>,
        /// Due date in YYYY-MM-DD format (default: today)
        #[arg(short, long)]
        due: Option<String>,
    },
    /// Toggle a task's completion state
    Toggle {
        /// Task id (e.g., t-1)
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task id (e.g., t-1)
        id: String,
    },
    /// Show tasks grouped by day
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("daily_todo=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let mut app = TodoApp::new(&cli.file, Box::new(SystemClock));

    let output = match cli.command {
        Command::Add {
            text,
            priority,
            due,
        } => app.handle_add(&text, priority.as_deref(), due.as_deref())?,
        Command::Toggle { id } => app.handle_toggle(&id),
        Command::Delete { id } => app.handle_delete(&id),
        Command::List => app.handle_list(),
    };

    println!("{output}");
    Ok(())
}
