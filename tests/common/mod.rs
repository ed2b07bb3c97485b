// tests/common/mod.rs
//
// Offline herald: canned pages keyed by URL, no network.
//
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use herald_scrape::core::{Fetch, Page};
use herald_scrape::{Herald, HeraldConfig};
use url::Url;

pub const BASE: &str = "https://herald.test";
pub const HOME: &str = "https://herald.test/";

pub const CHARACTER: &str = include_str!("../fixtures/character.html");
pub const GUILD: &str = include_str!("../fixtures/guild.html");
pub const MALFORMED: &str = include_str!("../fixtures/malformed.html");
pub const HOME_PAGE: &str = include_str!("../fixtures/home.html");

struct Route {
    status: u16,
    resolved: String,
    body: String,
}

/// Unknown URLs behave like the real herald: 200 on the home page.
#[derive(Default)]
pub struct FixtureFetcher {
    routes: HashMap<String, Route>,
    hits: AtomicUsize,
}

impl FixtureFetcher {
    pub fn new() -> Self { Self::default() }

    pub fn page(self, url: &str, body: &str) -> Self {
        self.route(url, 200, url, body)
    }

    pub fn status(self, url: &str, status: u16, body: &str) -> Self {
        self.route(url, status, url, body)
    }

    pub fn route(mut self, url: &str, status: u16, resolved: &str, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            Route { status, resolved: resolved.to_string(), body: body.to_string() },
        );
        self
    }

    pub fn hits(&self) -> usize { self.hits.load(Ordering::SeqCst) }
}

impl Fetch for FixtureFetcher {
    fn get(&self, url: &Url) -> Result<Page, reqwest::Error> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        let page = match self.routes.get(url.as_str()) {
            Some(r) => Page {
                status: r.status,
                url: Url::parse(&r.resolved).unwrap(),
                body: r.body.clone(),
            },
            None => Page {
                status: 200,
                url: Url::parse(HOME).unwrap(),
                body: HOME_PAGE.to_string(),
            },
        };
        Ok(page)
    }
}

pub fn config() -> HeraldConfig {
    HeraldConfig {
        base_url: BASE.to_string(),
        not_found_url: HOME.to_string(),
        ..HeraldConfig::default()
    }
}

pub fn herald(fetcher: FixtureFetcher) -> Herald<FixtureFetcher> {
    Herald::with_fetcher(fetcher, config())
}

pub fn character_url(name: &str) -> String { format!("{BASE}/c/{name}/") }
pub fn guild_url(name: &str) -> String { format!("{BASE}/g/{name}/") }
