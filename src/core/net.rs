// src/core/net.rs
// Blocking HTTP GET. Redirects are followed; the caller inspects where we ended up.

use reqwest::blocking::Client;
use url::Url;

use crate::config::HeraldConfig;

/// What came back from one GET.
#[derive(Clone, Debug)]
pub struct Page {
    pub status: u16,
    /// URL after redirects.
    pub url: Url,
    pub body: String,
}

impl Page {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The one outbound call a query makes. Swappable so the pipeline can run offline.
pub trait Fetch: Send + Sync {
    fn get(&self, url: &Url) -> Result<Page, reqwest::Error>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HeraldConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &Url) -> Result<Page, reqwest::Error> {
        logd!(%url, "GET");
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status().as_u16();
        let resolved = resp.url().clone();
        let body = resp.text()?;
        logd!(status, resolved = %resolved, bytes = body.len(), "response");
        Ok(Page { status, url: resolved, body })
    }
}
