// src/record.rs
//
// Canonical shapes handed back to callers.
//
// - StatsRecord: what the assembler builds from one herald page. Amounts,
//                realm-kill breakdowns and rank tables all share this shape;
//                only the per-metric value differs (flat vs nested).
// - Projection:  what a transform reduces a record to, one integer per period.
//
// Both serialize to the herald's own key layout ("All Time", ..., "URL").

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Rolling window of a herald table row. Order is the row order on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TimePeriod {
    #[serde(rename = "All Time")]
    AllTime,
    #[serde(rename = "This Week")]
    ThisWeek,
    #[serde(rename = "Last Week")]
    LastWeek,
    #[serde(rename = "Last 48 Hours")]
    Last48Hours,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::AllTime,
        TimePeriod::ThisWeek,
        TimePeriod::LastWeek,
        TimePeriod::Last48Hours,
    ];

    /// 1-based `<tr>` index inside a table body.
    pub fn row(self) -> usize {
        match self {
            TimePeriod::AllTime => 1,
            TimePeriod::ThisWeek => 2,
            TimePeriod::LastWeek => 3,
            TimePeriod::Last48Hours => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::AllTime => "All Time",
            TimePeriod::ThisWeek => "This Week",
            TimePeriod::LastWeek => "Last Week",
            TimePeriod::Last48Hours => "Last 48 Hours",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Metric {
    #[serde(rename = "Realm Points")]
    RealmPoints,
    #[serde(rename = "Deathblows")]
    Deathblows,
    #[serde(rename = "Deaths")]
    Deaths,
    #[serde(rename = "Kills")]
    Kills,
    #[serde(rename = "Solo Kills")]
    SoloKills,
    #[serde(rename = "Realm Kills")]
    RealmKills,
}

impl Metric {
    /// Metrics with a single amount column (everything but the realm-kill table).
    pub const AMOUNTS: [Metric; 5] = [
        Metric::RealmPoints,
        Metric::Deathblows,
        Metric::Deaths,
        Metric::Kills,
        Metric::SoloKills,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::RealmPoints => "Realm Points",
            Metric::Deathblows => "Deathblows",
            Metric::Deaths => "Deaths",
            Metric::Kills => "Kills",
            Metric::SoloKills => "Solo Kills",
            Metric::RealmKills => "Realm Kills",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Realm {
    Albion,
    Midgard,
    Hibernia,
}

impl Realm {
    pub const ALL: [Realm; 3] = [Realm::Albion, Realm::Midgard, Realm::Hibernia];

    /// Column header used by the realm-kill table.
    pub fn column_label(self) -> &'static str {
        match self {
            Realm::Albion => "Alb Kills",
            Realm::Midgard => "Mid Kills",
            Realm::Hibernia => "Hib Kills",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Realm::Albion => "Albion Kills",
            Realm::Midgard => "Midgard Kills",
            Realm::Hibernia => "Hibernia Kills",
        }
    }
}

/// Population a rank is computed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Grouping {
    Server,
    Realm,
}

impl Grouping {
    /// Rank column header on the herald page.
    pub fn column_label(self) -> &'static str {
        match self {
            Grouping::Server => "# Server",
            Grouping::Realm => "# Realm",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grouping::Server => "All Server",
            Grouping::Realm => "Realm",
        }
    }
}

/// Character pages carry one more column per breakdown than guild pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubjectKind {
    Character,
    Guild,
}

impl SubjectKind {
    /// Path segment used by the herald (`/c/{name}/`, `/g/{name}/`).
    pub fn path_segment(self) -> &'static str {
        match self {
            SubjectKind::Character => "c",
            SubjectKind::Guild => "g",
        }
    }

    pub fn from_path_segment(seg: &str) -> Option<Self> {
        match seg {
            "c" => Some(SubjectKind::Character),
            "g" => Some(SubjectKind::Guild),
            _ => None,
        }
    }
}

/// One value per time period. Only buildable with all four present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Periods<T> {
    #[serde(rename = "All Time")]
    pub all_time: T,
    #[serde(rename = "This Week")]
    pub this_week: T,
    #[serde(rename = "Last Week")]
    pub last_week: T,
    #[serde(rename = "Last 48 Hours")]
    pub last_48_hours: T,
}

impl<T> Periods<T> {
    /// Build every slot in row order; the first error wins and nothing partial escapes.
    pub fn try_build<E>(mut f: impl FnMut(TimePeriod) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            all_time: f(TimePeriod::AllTime)?,
            this_week: f(TimePeriod::ThisWeek)?,
            last_week: f(TimePeriod::LastWeek)?,
            last_48_hours: f(TimePeriod::Last48Hours)?,
        })
    }

    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(TimePeriod, &T) -> Result<U, E>,
    ) -> Result<Periods<U>, E> {
        Periods::try_build(|period| f(period, self.get(period)))
    }

    pub fn get(&self, period: TimePeriod) -> &T {
        match period {
            TimePeriod::AllTime => &self.all_time,
            TimePeriod::ThisWeek => &self.this_week,
            TimePeriod::LastWeek => &self.last_week,
            TimePeriod::Last48Hours => &self.last_48_hours,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimePeriod, &T)> {
        TimePeriod::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// A metric cell: a plain amount, or a labelled breakdown (realm kills, ranks).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Amount(u64),
    Breakdown(BTreeMap<String, u64>),
}

pub type PeriodStats = BTreeMap<Metric, StatValue>;

/// Which assembly strategy produced a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Amounts,
    RealmKills,
    Ranks,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Metadata {
    #[serde(rename = "Last Updated")]
    pub last_updated: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "URL")]
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatsRecord {
    #[serde(skip)]
    pub kind: RecordKind,
    #[serde(flatten)]
    pub periods: Periods<PeriodStats>,
    #[serde(flatten)]
    pub meta: Metadata,
}

impl StatsRecord {
    pub fn value(&self, period: TimePeriod, metric: Metric) -> Option<&StatValue> {
        self.periods.get(period).get(&metric)
    }

    pub fn amount(&self, period: TimePeriod, metric: Metric) -> Option<u64> {
        match self.value(period, metric)? {
            StatValue::Amount(v) => Some(*v),
            StatValue::Breakdown(_) => None,
        }
    }

    pub fn breakdown(&self, period: TimePeriod, metric: Metric) -> Option<&BTreeMap<String, u64>> {
        match self.value(period, metric)? {
            StatValue::Breakdown(map) => Some(map),
            StatValue::Amount(_) => None,
        }
    }
}

/// A record reduced by a transform to one integer per period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Projection {
    #[serde(flatten)]
    pub periods: Periods<u64>,
    #[serde(rename = "Embed Description")]
    pub label: String,
    #[serde(flatten)]
    pub meta: Metadata,
}
