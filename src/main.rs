use clap::Parser;
use tracing::warn;

use agent_portal::config::Config;
use agent_portal::logging;
use agent_portal::server;
use agent_portal::state::AppState;

#[derive(Parser)]
#[command(name = "agent-portal")]
#[command(about = "Backend API for the agentic AI code portal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Port to run the server on
    #[arg(short, long, default_value = "8000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    logging::init_logging();

    let config = Config::from_env();
    if config.api_key.is_none() {
        warn!("GROQ_API_KEY not set; completion endpoints will return errors until it is provided");
    }

    println!("🚀 Starting agent portal backend on port {}...", cli.port);
    println!("📡 Server endpoints:");
    println!("   Generate code: http://localhost:{}/generate_code", cli.port);
    println!("   Explain code:  http://localhost:{}/explain", cli.port);
    println!("   Health check:  http://localhost:{}/health", cli.port);

    let state = AppState::new(config);
    server::start_server(state, cli.port).await?;

    Ok(())
}
