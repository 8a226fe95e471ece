/// Main entry point for the daily streak command-line tracker
///
/// This file sets up logging, parses command line arguments, opens the habit
/// store and dispatches the requested command.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use daily_streak::{
    parse_date, parse_month, render_analytics, render_daily, HabitId, HabitStore,
    SqliteStorage, SystemClock, View,
};

type Store = HabitStore<SqliteStorage, SystemClock>;

/// Get the default database path with robust fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        dirs::home_dir().map(|p| p.join(".daily_streak")),
        dirs::data_dir().map(|p| p.join("daily_streak")),
        dirs::config_dir().map(|p| p.join("daily_streak")),
        std::env::current_dir().ok().map(|p| p.join(".daily_streak")),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            // Make sure the directory is actually writable
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.join("habits.db"));
            }
        }
    }

    let temp_path = std::env::temp_dir().join("daily_streak");
    std::fs::create_dir_all(&temp_path)?;

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path.join("habits.db"))
}

/// Command line arguments for the daily streak tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show today's habits (default)
    Today,
    /// Add a habit to the end of the list
    Add {
        /// Display name
        name: String,
    },
    /// Delete a habit by list position or id
    Delete {
        habit: String,
    },
    /// Move a habit from one list position to another (1-based)
    Move {
        from: usize,
        to: usize,
    },
    /// Mark a habit done, or undo it, for today or a given day
    Toggle {
        /// List position or id
        habit: String,
        /// Day to toggle (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show completion stats and the monthly heat-map
    Analytics {
        /// Month to chart (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
}

/// Find a habit by 1-based list position, falling back to its id
fn resolve_habit(store: &Store, reference: &str) -> Result<HabitId, Box<dyn std::error::Error>> {
    if let Ok(position) = reference.trim().parse::<usize>() {
        if let Some(habit) = position.checked_sub(1).and_then(|i| store.habit_at(i)) {
            return Ok(habit.id.clone());
        }
    }

    let id = HabitId::parse(reference)?;
    match store.habit(&id) {
        Some(habit) => Ok(habit.id.clone()),
        None => Err(format!("No habit at position or with id '{}'", reference).into()),
    }
}

fn to_index(position: usize) -> Result<usize, Box<dyn std::error::Error>> {
    position
        .checked_sub(1)
        .ok_or_else(|| "List positions start at 1".into())
}

fn run(store: &mut Store, command: Command) -> Result<View, Box<dyn std::error::Error>> {
    match command {
        Command::Today => {}
        Command::Add { name } => {
            let habit = store.add_habit(&name)?;
            println!("Added '{}' ({})", habit.name, habit.id);
        }
        Command::Delete { habit } => {
            let id = resolve_habit(store, &habit)?;
            store.delete_habit(&id)?;
            println!("Deleted {}", id);
        }
        Command::Move { from, to } => {
            store.reorder_habit(to_index(from)?, to_index(to)?)?;
        }
        Command::Toggle { habit, date } => {
            let id = resolve_habit(store, &habit)?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => store.today(),
            };
            let done = store.toggle_completion(&id, date)?;
            println!("{} on {}", if done { "Done" } else { "Not done" }, date);
        }
        Command::Analytics { month } => {
            let month = month.as_deref().map(parse_month).transpose()?;
            print!("{}", render_analytics(store, month)?);
            return Ok(View::Analytics);
        }
    }

    print!("{}", render_daily(store));
    Ok(View::Daily)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("daily_streak={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let storage = SqliteStorage::new(&db_path)?;
    let mut store = HabitStore::open_with_system_clock(storage)?;

    let view = run(&mut store, args.command.unwrap_or(Command::Today))?;
    info!("Rendered {:?} view", view);

    Ok(())
}
