use reqwest::Client;
use tracing::{info, warn};

use crate::{extract, fetch};

/// Fetch a channel videos page and extract its video links.
///
/// Returns `None` when the request fails (the error is reported); a page
/// that loads but contains no matching anchors yields `Some` of an empty
/// list.
pub async fn video_links(client: &Client, channel_url: &str) -> Option<Vec<String>> {
    match fetch::page(client, channel_url).await {
        Ok(body) => {
            let links = extract::video_links(&body);
            info!("Extracted {} video links from {}", links.len(), channel_url);
            Some(links)
        }
        Err(e) => {
            warn!("Request failed for {}: {}", channel_url, e);
            None
        }
    }
}
