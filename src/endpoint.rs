// src/endpoint.rs
use std::fmt;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::QueryError;
use crate::record::SubjectKind;

/// A herald subject page: `{base}/c/{name}/` or `{base}/g/{name}/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
    subject: SubjectKind,
    name: String,
}

impl Endpoint {
    pub fn character(base: &str, name: &str) -> Result<Self, QueryError> {
        Self::build(base, SubjectKind::Character, name)
    }

    pub fn guild(base: &str, name: &str) -> Result<Self, QueryError> {
        Self::build(base, SubjectKind::Guild, name)
    }

    pub fn build(base: &str, subject: SubjectKind, name: &str) -> Result<Self, QueryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(QueryError::InvalidEndpoint(format!("empty subject name for {base}")));
        }
        let mut url = Url::parse(base).map_err(|e| QueryError::InvalidEndpoint(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| QueryError::InvalidEndpoint(s!(base)))?
            .pop_if_empty()
            .push(subject.path_segment())
            .push(name)
            .push("");
        Ok(Self { url, subject, name: s!(name) })
    }

    /// Accept an absolute URL under `base`; the first segment after the base
    /// path decides the subject kind. Other hosts are rejected.
    pub fn parse(base: &str, raw: &str) -> Result<Self, QueryError> {
        let invalid = || QueryError::InvalidEndpoint(s!(raw));
        let base = Url::parse(base).map_err(|e| QueryError::InvalidEndpoint(format!("{base}: {e}")))?;
        let url = Url::parse(raw).map_err(|_| invalid())?;
        if url.origin() != base.origin() {
            return Err(invalid());
        }

        let prefix: Vec<&str> = base.path_segments().ok_or_else(invalid)?.filter(|s| !s.is_empty()).collect();
        let mut segs = url.path_segments().ok_or_else(invalid)?.filter(|s| !s.is_empty());
        for expected in &prefix {
            if segs.next() != Some(*expected) {
                return Err(invalid());
            }
        }
        let subject = segs.next().and_then(SubjectKind::from_path_segment).ok_or_else(invalid)?;
        let encoded = segs.next().ok_or_else(invalid)?;
        if segs.next().is_some() {
            return Err(invalid());
        }
        let name = percent_decode_str(encoded).decode_utf8().map_err(|_| invalid())?;
        if name.trim().is_empty() {
            return Err(invalid());
        }
        Ok(Self { subject, name: name.into_owned(), url })
    }

    pub fn url(&self) -> &Url { &self.url }
    pub fn subject(&self) -> SubjectKind { self.subject }
    pub fn name(&self) -> &str { &self.name }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
