mod config;
mod learn_cmds;
mod note_cmds;
mod plan_cmds;
mod read_cmd;
mod status_cmd;
mod today_cmd;

#[cfg(test)]
mod test_util;

use clap::{Parser, Subcommand};

use lectio_core::insight::GeminiClient;
use lectio_core::scripture::ScriptureClient;
use lectio_db::pool;
use lectio_db::queries::progress;

use config::LectioConfig;

#[derive(Parser)]
#[command(name = "lectio", about = "Personal Bible-reading companion")]
struct Cli {
    /// Database URL (overrides LECTIO_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a lectio config file (no database required)
    Init {
        /// PostgreSQL connection URL
        #[arg(long, default_value = "postgresql://localhost:5432/lectio")]
        db_url: String,
        /// API key for the insight and ask commands
        #[arg(long)]
        gemini_api_key: Option<String>,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Initialize the lectio database (creates it and runs migrations)
    DbInit,
    /// Show the current day's reading
    Today,
    /// Reading-plan management
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show or set the plan start date
    StartDate {
        /// New start date as YYYY-MM-DD (omit to show the current one)
        date: Option<String>,
    },
    /// Mark a plan day as read
    Complete {
        /// Day number (1-365)
        day: u32,
    },
    /// Show annual progress
    Status,
    /// Fetch and print a chapter, e.g. `lectio read "John 3"`
    Read {
        /// Passage reference: "<book> <chapter>"
        reference: String,
    },
    /// Note management
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// AI commentary on a passage
    Insight {
        /// Passage reference: "<book> <chapter>"
        reference: String,
        /// Extra context to steer the commentary
        #[arg(long)]
        context: Option<String>,
    },
    /// Ask a freeform theological question
    Ask {
        /// The question to ask
        question: String,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List plan days (a window around the current day by default)
    List {
        /// Print all 365 days
        #[arg(long)]
        all: bool,
    },
    /// Show one plan day in detail
    Show {
        /// Day number (1-365)
        day: u32,
    },
}

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Add a note for a passage
    Add {
        /// Passage reference, e.g. "John 3"
        reference: String,
        /// Note text
        content: String,
    },
    /// List all notes, newest first
    List,
    /// Delete a note by id
    Delete {
        /// Note id (shown by `note list`)
        id: i32,
    },
}

/// Execute the `lectio init` command: write config file.
fn cmd_init(db_url: &str, gemini_api_key: Option<String>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let has_key = gemini_api_key.is_some();
    let cfg = config::ConfigFile {
        database: config::DatabaseSection {
            url: db_url.to_string(),
        },
        gemini: config::GeminiSection {
            api_key: gemini_api_key,
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  database.url = {db_url}");
    if has_key {
        println!("  gemini.api_key = (set)");
    } else {
        println!("  gemini.api_key = (unset; insight and ask will be unavailable)");
    }
    println!();
    println!("Next: run `lectio db-init` to create and migrate the database.");

    Ok(())
}

/// Execute the `lectio db-init` command: create database and run migrations.
async fn cmd_db_init(cli_db_url: Option<&str>) -> anyhow::Result<()> {
    let resolved = LectioConfig::resolve(cli_db_url)?;

    println!("Initializing lectio database...");

    // 1. Create the database if it does not exist.
    pool::ensure_database_exists(&resolved.db_config).await?;

    // 2. Connect to the target database and run migrations.
    let db_pool = pool::create_pool(&resolved.db_config).await?;
    pool::run_migrations(&db_pool).await?;

    // 3. Print success with table counts.
    let counts = pool::table_counts(&db_pool).await?;
    println!("Database ready. Tables:");
    for (table, count) in &counts {
        println!("  {table}: {count} rows");
    }

    db_pool.close().await;

    println!("lectio db-init complete.");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            db_url,
            gemini_api_key,
            force,
        } => {
            cmd_init(&db_url, gemini_api_key, force)?;
        }
        Commands::DbInit => {
            cmd_db_init(cli.database_url.as_deref()).await?;
        }
        Commands::Today => {
            let resolved = LectioConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = today_cmd::run_today(&db_pool).await;
            db_pool.close().await;
            result?;
        }
        Commands::Plan { command } => {
            let resolved = LectioConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = plan_cmds::run_plan_command(command, &db_pool).await;
            db_pool.close().await;
            result?;
        }
        Commands::StartDate { date } => {
            let resolved = LectioConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = plan_cmds::run_start_date(&db_pool, date.as_deref()).await;
            db_pool.close().await;
            result?;
        }
        Commands::Complete { day } => {
            let day = plan_cmds::validate_day(day)?;
            let resolved = LectioConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = progress::mark_day_complete(&db_pool, day as i32).await;
            db_pool.close().await;
            result?;
            println!("Day {day} marked as read.");
        }
        Commands::Status => {
            let resolved = LectioConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = status_cmd::run_status(&db_pool).await;
            db_pool.close().await;
            result?;
        }
        Commands::Read { reference } => {
            // Scripture text comes straight from the API; no database needed.
            let client = ScriptureClient::new();
            read_cmd::run_read(&client, &reference).await?;
        }
        Commands::Note { command } => {
            let resolved = LectioConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = note_cmds::run_note_command(command, &db_pool).await;
            db_pool.close().await;
            result?;
        }
        Commands::Insight { reference, context } => {
            let resolved = LectioConfig::resolve(cli.database_url.as_deref())?;
            let provider = GeminiClient::new(resolved.require_gemini_key()?);
            learn_cmds::run_insight(&provider, &reference, context.as_deref()).await?;
        }
        Commands::Ask { question } => {
            let resolved = LectioConfig::resolve(cli.database_url.as_deref())?;
            let provider = GeminiClient::new(resolved.require_gemini_key()?);
            learn_cmds::run_ask(&provider, &question).await?;
        }
    }

    Ok(())
}
