use scraper::{Html, Selector};

const BASE_URL: &str = "https://www.youtube.com";

// Video anchors on a channel page carry id="thumbnail". Subject to change
// whenever YouTube reworks its markup.
const VIDEO_ANCHOR: &str = "a#thumbnail";

/// Extract video links from a channel videos page.
///
/// Every matching anchor's href is prefixed with the base domain. Links come
/// back in document order, duplicates included; a page with no matching
/// anchors yields an empty Vec.
pub fn video_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse(VIDEO_ANCHOR).unwrap();

    document
        .select(&anchors)
        .filter_map(|el| el.value().attr("href"))
        .map(|href| format!("{}{}", BASE_URL, href))
        .collect()
}

// ── Tests ──
