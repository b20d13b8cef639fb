// Text fetcher trait — the seam between document acquisition and the network.
//
// The CLI and web server fetch URLs through this trait so tests can swap in
// a canned fetcher without touching the network.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for turning a URL into the visible text of the page behind it.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// Fetch `url` and return its extracted text.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Fetcher used where URL input is not allowed.
/// Always fails, so a URL can never silently resolve to fake text.
pub struct NoopFetcher;

#[async_trait]
impl TextFetcher for NoopFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        anyhow::bail!("URL fetching is disabled, cannot fetch {url}")
    }
}
