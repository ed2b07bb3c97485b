// src/transform.rs
//! Post-assembly reshaping.
//!
//! A [`Transform`] reduces a complete [`StatsRecord`] to a [`Projection`]: one
//! integer per period plus a presentation label. Metadata is copied as-is.
//! A value the transform needs but the record lacks is a
//! [`TransformMismatchError`], never a default.
//!
//! Transforms take a record and return a projection:
//!
//! ```
//! use herald_scrape::record::{Metric, Projection, StatsRecord};
//! use herald_scrape::transform::Transform;
//!
//! fn once(record: &StatsRecord) -> Option<Projection> {
//!     Transform::Amount(Metric::Kills).apply(record).ok()
//! }
//! ```
//!
//! so they cannot be stacked:
//!
//! ```compile_fail
//! use herald_scrape::record::{Metric, StatsRecord};
//! use herald_scrape::transform::Transform;
//!
//! fn twice(record: &StatsRecord) {
//!     let t = Transform::Amount(Metric::Kills);
//!     let once = t.apply(record).unwrap();
//!     let _ = t.apply(&once);
//! }
//! ```

use std::fmt;

use crate::error::TransformMismatchError;
use crate::record::{Grouping, Metric, PeriodStats, Projection, Realm, RecordKind, StatValue, StatsRecord, TimePeriod};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Subject's own amount for one metric.
    Amount(Metric),
    /// Subject's rank for one metric within a grouping.
    Rank(Metric, Grouping),
    /// Kills against one realm.
    RealmKills(Realm),
    /// Realm points divided by deaths (deaths floored at 1).
    RealmPointsPerDeath,
}

impl Transform {
    /// The record shape this transform reads.
    pub fn record_kind(self) -> RecordKind {
        match self {
            Transform::Amount(_) | Transform::RealmPointsPerDeath => RecordKind::Amounts,
            Transform::Rank(..) => RecordKind::Ranks,
            Transform::RealmKills(_) => RecordKind::RealmKills,
        }
    }

    /// Presentation label ("Embed Description").
    pub fn label(self) -> String {
        match self {
            Transform::Amount(metric) => s!(metric.label()),
            Transform::Rank(metric, grouping) => format!("{} Rank ({})", metric, grouping.label()),
            Transform::RealmKills(realm) => s!(realm.label()),
            Transform::RealmPointsPerDeath => s!("Realm Points per Death"),
        }
    }

    pub fn apply(self, record: &StatsRecord) -> Result<Projection, TransformMismatchError> {
        let periods = record.periods.try_map(|period, stats| self.project(period, stats))?;
        Ok(Projection {
            periods,
            label: self.label(),
            meta: record.meta.clone(),
        })
    }

    fn project(self, period: TimePeriod, stats: &PeriodStats) -> Result<u64, TransformMismatchError> {
        match self {
            Transform::Amount(metric) => self.amount(period, stats, metric),
            Transform::Rank(metric, grouping) => self.keyed(period, stats, metric, grouping.column_label()),
            Transform::RealmKills(realm) => self.keyed(period, stats, Metric::RealmKills, realm.column_label()),
            Transform::RealmPointsPerDeath => {
                let rps = self.amount(period, stats, Metric::RealmPoints)?;
                let deaths = self.amount(period, stats, Metric::Deaths)?;
                Ok(rps / deaths.max(1))
            }
        }
    }

    fn amount(self, period: TimePeriod, stats: &PeriodStats, metric: Metric) -> Result<u64, TransformMismatchError> {
        match stats.get(&metric) {
            Some(StatValue::Amount(v)) => Ok(*v),
            _ => Err(self.mismatch(period, metric.label())),
        }
    }

    fn keyed(
        self,
        period: TimePeriod,
        stats: &PeriodStats,
        metric: Metric,
        key: &str,
    ) -> Result<u64, TransformMismatchError> {
        match stats.get(&metric) {
            Some(StatValue::Breakdown(map)) => map
                .get(key)
                .copied()
                .ok_or_else(|| self.mismatch(period, &format!("{metric} / {key}"))),
            _ => Err(self.mismatch(period, metric.label())),
        }
    }

    fn mismatch(self, period: TimePeriod, key: &str) -> TransformMismatchError {
        TransformMismatchError { transform: self.to_string(), period, key: s!(key) }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
