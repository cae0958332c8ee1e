use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

/// GET a page and return its body text.
///
/// Non-2xx statuses are errors, so transport failures and bad statuses
/// surface through the same `Result` path.
pub async fn page(client: &Client, url: &str) -> Result<String> {
    debug!("Fetching {}", url);

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    Ok(body)
}
