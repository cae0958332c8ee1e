use clap::Parser;

use yt_scraper::channel;

const DEFAULT_CHANNEL_URL: &str = "https://www.youtube.com/@nuleong/videos";

#[derive(Parser)]
#[command(name = "yt_scraper", about = "YouTube channel video link scraper")]
struct Cli {
    /// Channel videos page to scrape
    #[arg(default_value = DEFAULT_CHANNEL_URL)]
    url: String,

    /// Print the links as a JSON array
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match channel::video_links(&client, &cli.url).await {
        Some(links) if cli.json => println!("{}", serde_json::to_string_pretty(&links)?),
        Some(links) if !links.is_empty() => {
            println!("YouTube video links:");
            for link in &links {
                println!("{}", link);
            }
        }
        _ => println!("Could not fetch video links."),
    }

    Ok(())
}
