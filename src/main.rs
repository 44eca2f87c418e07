use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// akkor - hotel booking
#[derive(Parser)]
#[command(name = "akkor")]
#[command(about = "Hotel listings and bookings", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Insert demo users, hotels and bookings
    Seed,
    /// Change the role of an existing account
    SetRole {
        #[arg(long)]
        email: String,

        #[arg(long, value_enum)]
        role: cli::user::Role,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = akkor::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    akkor::observability::init_observability(&config.observability)?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::db::migrate(&config).await,
        Commands::Reset => cli::db::reset(&config).await,
        Commands::Seed => cli::seed::seed(&config).await,
        Commands::SetRole { email, role } => cli::user::set_role(&config, email, role).await,
    }
}
