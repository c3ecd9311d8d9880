//! HTTP fetch layer for the feed CSVs.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Request, Response};

/// Minimal HTTP execution seam. The pipeline only needs something that can
/// answer a GET, so it takes this trait rather than a concrete client.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

/// Plain reqwest-backed client. The feeds are public static files, so no
/// authentication, timeout, or retry layers are stacked on top.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        self.0.execute(req).await
    }
}

/// Fetches `url` and returns the response body as text.
///
/// # Errors
///
/// Any non-success status is an error carrying the status line, so a
/// missing feed (e.g. 404) fails the caller's whole pipeline instead of
/// producing partial data. Body decode failures propagate the same way.
pub async fn fetch_text<C: HttpClient>(client: &C, url: &str) -> Result<String> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        anyhow::bail!("GET {url} returned {status}");
    }

    Ok(resp.text().await?)
}
