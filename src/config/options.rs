// src/config/options.rs
use std::time::Duration;

use super::consts::*;
use crate::record::RecordKind;
use crate::transform::Transform;

/// Where the herald lives and how to talk to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeraldConfig {
    pub base_url: String,
    /// Resolved URL that means "no such subject".
    pub not_found_url: String,
    pub user_agent: String,
    /// None: wait as long as the server does. Callers impose their own limit.
    pub timeout: Option<Duration>,
}

impl Default for HeraldConfig {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            not_found_url: s!(NOT_FOUND_REDIRECT),
            user_agent: s!(USER_AGENT),
            timeout: None,
        }
    }
}

impl HeraldConfig {
    /// Trailing slashes are not significant when matching the redirect target.
    pub fn is_not_found_redirect(&self, resolved: &str) -> bool {
        resolved.trim_end_matches('/') == self.not_found_url.trim_end_matches('/')
    }
}

/// What to assemble from a page, and how to reshape it afterwards.
///
/// A transform fixes the record kind it reads, so the pair can't disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
    kind: RecordKind,
    transform: Option<Transform>,
}

impl Query {
    pub fn raw(kind: RecordKind) -> Self {
        Self { kind, transform: None }
    }

    pub fn transformed(transform: Transform) -> Self {
        Self { kind: transform.record_kind(), transform: Some(transform) }
    }

    pub fn kind(&self) -> RecordKind { self.kind }
    pub fn transform(&self) -> Option<Transform> { self.transform }
}
