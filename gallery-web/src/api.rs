use gallery_common::wire::decode_items;
use gallery_common::Item;
use tracing::debug;

/// Fetch the full item catalog from the configured endpoint
pub async fn fetch_items(url: String) -> Result<Vec<Item>, String> {
    debug!("Fetching items from {url}");
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    let body = resp.text().await.map_err(|e| format!("Read error: {e}"))?;
    decode_items(&body).map_err(|e| format!("Parse error: {e}"))
}
