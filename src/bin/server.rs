//! AskMyDoc server binary
//!
//! Run with: cargo run --bin askmydoc-server

use askmydoc::{config::AppConfig, server::AskMyDocServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "askmydoc=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════╗
║                   AskMyDoc                    ║
║        Chat with your PDF (prototype)         ║
╚═══════════════════════════════════════════════╝
"#
    );

    // Load configuration (ASKMYDOC_CONFIG file, or defaults + env)
    let config = AppConfig::load()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Max upload size: {} bytes", config.server.max_upload_size);
    tracing::info!("  - Parse timeout: {}s", config.extraction.parse_timeout_secs);
    tracing::info!("  - Assistant name: {}", config.chat.assistant_name);

    let server = AskMyDocServer::new(config);

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/parse     - Upload a PDF/DOCX/TXT");
    println!("  POST /api/chat      - Chat about a page (templated replies)");
    println!("  POST /api/query     - Echo endpoint");
    println!("  GET  /api/documents - List uploaded documents");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
