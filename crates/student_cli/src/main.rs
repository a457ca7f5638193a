//! Student registry server entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Initialize logging and migrate the database before serving.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use student_api::{start_server, ServerConfig};
use student_core::db::open_db;
use student_core::{core_version, default_log_level, init_logging};

const DEFAULT_DB_FILE_NAME: &str = "students.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "student-registry-logs";

#[derive(Parser, Debug)]
#[command(name = "student-registry", version, about = "Student registry HTTP server")]
struct Args {
    /// Interface to bind
    #[arg(long, env = "STUDENT_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(short = 'p', long, env = "STUDENT_PORT", default_value = "8080")]
    port: u16,

    /// SQLite database file (defaults to the system temp dir)
    #[arg(long, env = "STUDENT_DB_PATH")]
    db_path: Option<PathBuf>,

    /// trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, env = "STUDENT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, env = "STUDENT_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

impl Args {
    fn db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
    }

    fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME))
    }

    fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or_else(|| default_log_level())
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = args.log_dir();
    init_logging(args.log_level(), &log_dir.to_string_lossy())
        .context("failed to initialize logging")?;
    info!("event=cli_start module=cli status=ok version={}", core_version());

    let db_path = args.db_path();
    // Migrate once up front so a bad or too-new database fails at startup.
    open_db(&db_path)
        .with_context(|| format!("failed to open database `{}`", db_path.display()))?;

    start_server(ServerConfig {
        host: args.host.clone(),
        port: args.port,
        db_path,
    })
    .await
    .context("HTTP server failed")?;

    Ok(())
}
