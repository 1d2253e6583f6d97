//! Vidsum CLI - YouTube video summarisation client
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{Parser, Subcommand};
use colored::Colorize;
use vidsum::{Config, RequestState, Submission, SummarizeClient};

#[derive(Parser)]
#[command(name = "vidsum")]
#[command(author, version, about = "CLI for YouTube video summarisation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a YouTube video by URL
    Summarise {
        /// Video URL (watch, youtu.be, or embed form)
        url: String,
    },
    /// Check whether a URL would be accepted, without contacting the backend
    Check {
        /// Video URL to validate
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarise { url } => {
            let config = Config::load()?;
            let client = SummarizeClient::new(&config.backend)?;
            let mut submission = Submission::new(client);

            println!("Summarising: {}", url);

            if let Err(e) = submission.submit(&url).await {
                anyhow::bail!("{}", e);
            }

            match submission.state() {
                RequestState::Success(result) => {
                    if result.is_empty() {
                        log::warn!("backend returned an empty summary for {}", result.video_url);
                    }
                    println!("\n=== {} ===", result.video_title.bold());
                    println!("{}", result.video_url.dimmed());
                    println!(
                        "{}\n",
                        result
                            .generated_at
                            .format("generated %Y-%m-%d %H:%M UTC")
                            .to_string()
                            .dimmed()
                    );
                    println!("{}", result.summary_text);
                }
                RequestState::Failed(message) => {
                    anyhow::bail!("{}", message);
                }
                // submit() always settles in Success or Failed
                state => anyhow::bail!("unexpected state after submission: {:?}", state),
            }
        }
        Commands::Check { url } => match vidsum::validate::validate_youtube_url(&url) {
            Ok(valid) => println!("{} {}", "✓".green(), valid),
            Err(e) => anyhow::bail!("{}", e),
        },
    }

    Ok(())
}
