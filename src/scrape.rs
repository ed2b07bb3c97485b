// src/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
};

use serde::Serialize;

use crate::{
    config::{ HeraldConfig, Query, consts::{ WORKERS, REQUEST_PAUSE_MS, JITTER_MS }},
    core::{ html, Fetch, HttpFetcher },
    endpoint::Endpoint,
    error::{ QueryError, RequestFailure },
    record::{ Projection, StatsRecord },
    specs::{ self, PageLayout },
};

/// What a query hands back: the assembled record, or its projection when a
/// transform was requested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Record(StatsRecord),
    Projection(Projection),
}

impl QueryOutput {
    pub fn into_record(self) -> Option<StatsRecord> {
        match self { QueryOutput::Record(r) => Some(r), QueryOutput::Projection(_) => None }
    }
    pub fn into_projection(self) -> Option<Projection> {
        match self { QueryOutput::Projection(p) => Some(p), QueryOutput::Record(_) => None }
    }
}

/// Query front door. Holds no per-query state; share it freely across threads.
pub struct Herald<F: Fetch = HttpFetcher> {
    fetcher: F,
    config: HeraldConfig,
    layout: PageLayout,
}

impl Herald<HttpFetcher> {
    pub fn connect(config: HeraldConfig) -> Result<Self, QueryError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(fetcher, config))
    }
}

impl<F: Fetch> Herald<F> {
    pub fn with_fetcher(fetcher: F, config: HeraldConfig) -> Self {
        Self { fetcher, config, layout: PageLayout::default() }
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn config(&self) -> &HeraldConfig { &self.config }
    pub fn fetcher(&self) -> &F { &self.fetcher }

    pub fn character(&self, name: &str) -> Result<Endpoint, QueryError> {
        Endpoint::character(&self.config.base_url, name)
    }

    pub fn guild(&self, name: &str) -> Result<Endpoint, QueryError> {
        Endpoint::guild(&self.config.base_url, name)
    }

    /// One GET, then assemble, then the optional transform. No retries.
    ///
    /// A redirect to the not-found page wins over the status code.
    pub fn query(&self, endpoint: &Endpoint, query: Query) -> Result<QueryOutput, QueryError> {
        logf!(url = %endpoint, kind = ?query.kind(), "query");
        let page = self.fetcher.get(endpoint.url())?;

        if self.config.is_not_found_redirect(page.url.as_str()) {
            logf!(url = %endpoint, "redirected home; no such subject");
            return Err(RequestFailure::NotFound.into());
        }
        if !page.is_success() {
            loge!(url = %endpoint, status = page.status, "herald error status");
            return Err(RequestFailure::UpstreamError(page.status).into());
        }

        let doc = html::parse(&page.body);
        let record = specs::assemble(
            &doc,
            &self.layout,
            query.kind(),
            endpoint.subject(),
            endpoint.url().as_str(),
        )?;

        match query.transform() {
            Some(t) => Ok(QueryOutput::Projection(t.apply(&record)?)),
            None => Ok(QueryOutput::Record(record)),
        }
    }

    /// Run independent queries on a small worker pool. Results come back in input order.
    pub fn query_batch(&self, jobs: &[(Endpoint, Query)]) -> Vec<Result<QueryOutput, QueryError>> {
        let workers = WORKERS.min(jobs.len()).max(1);
        let counter = AtomicUsize::new(0);
        let (res_tx, res_rx) = mpsc::channel::<(usize, Result<QueryOutput, QueryError>)>();

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = res_tx.clone();
                let counter = &counter;
                scope.spawn(move || {
                    loop {
                        let i = counter.fetch_add(1, Ordering::Relaxed);
                        if i >= jobs.len() {
                            break;
                        }
                        let (endpoint, query) = &jobs[i];
                        let result = self.query(endpoint, *query);
                        if let Err(e) = &result {
                            loge!(url = %endpoint, error = %e, "batch query failed");
                        }
                        if tx.send((i, result)).is_err() {
                            break;
                        }
                        if i + workers < jobs.len() {
                            let jitter = (i as u64) % JITTER_MS;
                            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
                        }
                    }
                });
            }
        });
        drop(res_tx);

        let mut indexed: Vec<_> = res_rx.into_iter().collect();
        indexed.sort_by_key(|(i, _)| *i);
        indexed.into_iter().map(|(_, r)| r).collect()
    }
}
