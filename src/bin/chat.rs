//! AskMyDoc CLI chat client
//!
//! Uploads a document to the backend, then runs a read-eval loop that
//! sends chat messages and prints the templated replies.
//!
//! Run with: cargo run --features cli --bin askmydoc -- report.pdf

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use console::style;

use askmydoc::client::{BackendClient, ChatSession};

#[derive(Debug, Parser)]
#[command(name = "askmydoc", about = "Chat with a document (prototype client)")]
struct Args {
    /// Document to upload (PDF, DOCX or TXT)
    file: PathBuf,

    /// Backend base URL
    #[arg(long, default_value = "http://localhost:8000")]
    backend: String,

    /// Page to start asking about
    #[arg(long, default_value_t = 1)]
    page: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let client = BackendClient::new(&args.backend);

    // Make sure the backend is up before uploading
    let health = client.health().await?;
    println!("{} {}", style("Backend:").dim(), health.status);

    let filename = args
        .file
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document.pdf")
        .to_string();
    let bytes = std::fs::read(&args.file)?;

    println!("{} {} ({} bytes)...", style("Uploading").cyan(), filename, bytes.len());
    let parsed = client.parse_document(&filename, bytes).await?;
    println!(
        "{} {} - {} pages, {} characters extracted",
        style("Parsed").green(),
        parsed.filename,
        parsed.total_pages,
        parsed.text.len()
    );

    let mut session = ChatSession::new();
    session.attach_document(&parsed);
    session.select_page(args.page)?;

    println!(
        "\nAsk about {} (page {}). Commands: /page N, /clear, /quit\n",
        session.document_name().unwrap_or("the document"),
        session.current_page()
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        write!(stdout, "{} ", style(">").bold())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("/page ") {
            match rest.trim().parse::<u32>() {
                Ok(page) => match session.select_page(page) {
                    Ok(()) => println!("{} page {}", style("Now on").dim(), page),
                    Err(e) => println!("{} {}", style("Error:").red(), e),
                },
                Err(_) => println!("{} usage: /page N", style("Error:").red()),
            }
            continue;
        }

        match line {
            "/quit" | "/exit" => break,
            "/clear" => {
                session.clear_history();
                println!("{}", style("History cleared").dim());
            }
            message => match session.send(&client, message).await {
                Ok(reply) => println!("{} {}\n", style("Assistant:").green().bold(), reply),
                Err(e) => println!("{} {}\n", style("Error:").red(), e),
            },
        }
    }

    Ok(())
}
