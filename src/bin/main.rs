use portfolio_contact_agent::{
    agent::ChatAgent,
    delivery::PacedDelivery,
    submit::HttpSubmissionSink,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let submit_url = std::env::var("CONTACT_SUBMIT_URL").unwrap_or_default();
    let page_origin =
        std::env::var("PAGE_ORIGIN").unwrap_or_else(|_| "http://localhost".to_string());

    info!("Portfolio contact agent (terminal demo)");

    let mut agent = ChatAgent::new(
        Arc::new(PacedDelivery::new()),
        Arc::new(HttpSubmissionSink::new(submit_url)),
        page_origin,
    );

    agent.open().await?;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        stdout.write_all(b"\nyou: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let reply = agent.handle_turn(&line).await?;

        if agent.state().step.is_terminal() && reply.completed.is_some() {
            break;
        }
    }

    Ok(())
}
