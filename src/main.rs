use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use docstore::bootstrap::{self, BOOTSTRAP_OPTIONS};
use docstore::config::AppConfig;
use docstore::database::{establish_connection, get_database_url, setup_database};
use docstore::keyring::Keyring;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// Path to a yaml config file; defaults apply when omitted
    #[clap(short, long, global = true)]
    config: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available bootstrap profiles
    List,
    /// Run migrations, then apply a bootstrap profile
    Apply {
        /// Profile name, e.g. "simple" or "permits"
        profile: String,
    },
    /// Delete nearly all application data and purge the keyring
    Nuke {
        /// Required; nuking is irreversible
        #[clap(long)]
        force: bool,
    },
    /// Bring the database schema up to date
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    let config = AppConfig::load(args.config.as_deref())?;

    match args.command {
        Commands::List => {
            for profile in BOOTSTRAP_OPTIONS.values() {
                println!("{:<10} {:<10} {}", profile.name(), profile.label(), profile.description());
            }
        }
        Commands::Apply { profile } => {
            let db = connect(&config).await?;
            let profile = bootstrap::get_profile(&profile)?;
            profile.execute(&db).await?;
            info!("Applied bootstrap profile '{}'", profile.name());
        }
        Commands::Nuke { force } => {
            if !force {
                anyhow::bail!("Refusing to nuke the database without --force");
            }
            let db = connect(&config).await?;
            let keyring = Keyring::new(&config.keyring_root);
            bootstrap::nuke_database(&db, &config.storage_root, &keyring).await?;
        }
        Commands::Migrate => {
            connect(&config).await?;
            info!("Database migrations completed");
        }
    }

    Ok(())
}

async fn connect(config: &AppConfig) -> Result<sea_orm::DatabaseConnection> {
    let database_url = get_database_url(Some(&config.database_path));
    let db = establish_connection(&database_url).await?;
    setup_database(&db).await?;
    Ok(db)
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .without_time()
        .init();
}
