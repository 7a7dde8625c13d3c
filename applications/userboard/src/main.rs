/// Userboard - terminal front-end for the users service
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userboard_client::{ClientConfig, UserboardClient, ViewSyncController};
use userboard_core::AppConfig;

mod render;

#[derive(Parser)]
#[command(name = "userboard")]
#[command(about = "Browse and add users on a Userboard service", long_about = None)]
struct Cli {
    /// Override the service base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load users and backend status, then render the board
    Show,
    /// Add a new user, then render the board
    Add {
        /// User name
        #[arg(short, long, default_value = "")]
        name: String,
        /// User email
        #[arg(short, long, default_value = "")]
        email: String,
    },
    /// Check backend health
    Health,
    /// Print the service's welcome message
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userboard=info,userboard_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
        config.validate()?;
    }

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => show(config).await?,
        Commands::Add { name, email } => add(config, name, email).await?,
        Commands::Health => health(config).await?,
        Commands::Info => info(config).await?,
    }

    Ok(())
}

async fn show(config: AppConfig) -> anyhow::Result<()> {
    let controller = ViewSyncController::new(config)?;
    controller.activate().await;

    print!("{}", render::board(&controller.snapshot(), controller.config()));
    Ok(())
}

async fn add(config: AppConfig, name: String, email: String) -> anyhow::Result<()> {
    let controller = ViewSyncController::new(config)?;
    controller.activate().await;

    controller.set_draft_name(name);
    controller.set_draft_email(email);
    controller.submit_draft().await;

    print!("{}", render::board(&controller.snapshot(), controller.config()));
    Ok(())
}

async fn health(config: AppConfig) -> anyhow::Result<()> {
    let controller = ViewSyncController::new(config)?;
    controller.check_health().await;

    println!("{}", controller.snapshot().backend_status);
    Ok(())
}

async fn info(config: AppConfig) -> anyhow::Result<()> {
    let client = UserboardClient::new(ClientConfig::from(&config))?;

    match client.welcome().await {
        Ok(text) => println!("{}", text),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch welcome message");
            println!("Backend connection failed: {}", e);
        }
    }
    Ok(())
}
