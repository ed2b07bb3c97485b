// src/error.rs
//! Failure taxonomy for a herald query.
//!
//! Nothing here is retried or defaulted: every variant aborts the whole query,
//! so a caller either gets a complete record or one of these.

use thiserror::Error;

use crate::record::TimePeriod;

/// The herald could not hand us a usable page.
#[derive(Debug, Error)]
pub enum RequestFailure {
    /// Unknown subjects are redirected to the herald home page instead of a 404.
    #[error("no such subject (redirected to the herald home page)")]
    NotFound,
    #[error("herald returned HTTP {0}")]
    UpstreamError(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Why a cell could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellFault {
    #[error("element not found")]
    Missing,
    #[error("not a number: {0:?}")]
    NotNumeric(String),
    #[error("invalid selector: {0}")]
    BadSelector(String),
    /// Two columns of one table share a header label.
    #[error("duplicate column header {0:?}")]
    DuplicateHeader(String),
}

/// An expected cell was absent or non-numeric: the page layout no longer
/// matches the locator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed cell at `{address}`: {fault}")]
pub struct MalformedCellError {
    pub address: String,
    pub fault: CellFault,
}

impl MalformedCellError {
    pub fn new(address: impl Into<String>, fault: CellFault) -> Self {
        Self { address: address.into(), fault }
    }
}

/// A transform asked for a key the assembled record does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{transform}: no `{key}` value in {period}")]
pub struct TransformMismatchError {
    pub transform: String,
    pub period: TimePeriod,
    pub key: String,
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Request(#[from] RequestFailure),
    #[error(transparent)]
    MalformedCell(#[from] MalformedCellError),
    #[error(transparent)]
    TransformMismatch(#[from] TransformMismatchError),
    #[error("not a herald character or guild URL: {0}")]
    InvalidEndpoint(String),
}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        QueryError::Request(RequestFailure::Transport(e))
    }
}

impl QueryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::Request(RequestFailure::NotFound))
    }
}
