// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod endpoint;
pub mod error;
pub mod record;
pub mod scrape;
pub mod specs;
pub mod transform;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{HeraldConfig, Query};
pub use endpoint::Endpoint;
pub use error::{MalformedCellError, QueryError, RequestFailure, TransformMismatchError};
pub use record::{Grouping, Metric, Projection, Realm, RecordKind, StatsRecord, SubjectKind, TimePeriod};
pub use scrape::{Herald, QueryOutput};
pub use transform::Transform;
