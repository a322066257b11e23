use portfolio_contact_agent::{
    api::{start_server, ApiState},
    delivery::PacingConfig,
    state::SessionStore,
    submit::HttpSubmissionSink,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let submit_url = std::env::var("CONTACT_SUBMIT_URL").unwrap_or_else(|_| {
        eprintln!("CONTACT_SUBMIT_URL not set; completed contacts will be logged, not stored");
        String::new()
    });

    let page_origin =
        std::env::var("PAGE_ORIGIN").unwrap_or_else(|_| "http://localhost".to_string());

    let api_port: u16 = std::env::var("PORT")
        .or_else(|_| std::env::var("API_PORT"))
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;

    info!("Portfolio Contact Agent - API Server");
    info!("Port: {}", api_port);

    let state = ApiState {
        store: Arc::new(SessionStore::new()),
        sink: Arc::new(HttpSubmissionSink::new(submit_url)),
        page_origin,
        pacing: PacingConfig::default(),
    };

    start_server(state, api_port).await?;

    Ok(())
}
