use dotenvy::dotenv;

use portfolio_server::config::Config;
use portfolio_server::{init_logging, run};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let config = Config::from_env();
    if let Err(e) = run(config).await {
        tracing::error!(error = ?e, "Server exited with an error");
        std::process::exit(1);
    }
}
