// src/specs/layout.rs
//! Page locator for herald subject pages.
//!
//! Purpose:
//! - Name **where** every statistic lives: which table group/table holds a metric,
//!   which body row holds a time period, which columns hold amounts, realm kills
//!   and ranks, and where the footer and subject banner sit.
//!
//! Page skeleton (as served today):
//! ```text
//! body
//! ├─ main
//! │  ├─ div[1] > div            subject banner ("Name > Guild < Realm ...")
//! │  └─ div[2]
//! │     ├─ div[1] > table[1..3] Realm Points, Deathblows, Deaths
//! │     └─ div[2] > table[1..3] Kills, Solo Kills, Realm Kills
//! └─ aside                      "Last updated ..." footer text
//! ```
//! Each stats table: `thead > tr > th` labels, `tbody > tr[1..4]` one row per period,
//! `td[1]` the period name, `td[2]` the amount, `td[3..]` rank columns.
//! The realm-kill table uses `td[2..]` for one column per enemy realm.
//!
//! Guild pages drop one column from every breakdown (one realm for realm kills,
//! one ranking dimension for ranks). That is layout, not damage.
//!
//! Everything here is pure data; `extract` turns it into lookups.

use crate::record::{Metric, SubjectKind, TimePeriod};

/// `div[group] > table[index]` under the stats container, both 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableCoord {
    pub group: usize,
    pub index: usize,
}

/// A run of columns whose length depends on the subject kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpan {
    /// First column, 1-based.
    pub first: usize,
    pub character: usize,
    pub guild: usize,
}

impl ColumnSpan {
    pub fn len(&self, subject: SubjectKind) -> usize {
        match subject {
            SubjectKind::Character => self.character,
            SubjectKind::Guild => self.guild,
        }
    }

    pub fn columns(&self, subject: SubjectKind) -> std::ops::Range<usize> {
        self.first..self.first + self.len(subject)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLayout {
    /// Container holding the two table groups.
    pub stats_root: &'static str,
    pub tables: [(Metric, TableCoord); 6],
    pub amount_column: usize,
    pub realm_kill_columns: ColumnSpan,
    pub rank_columns: ColumnSpan,
    pub last_updated: &'static str,
    pub description: &'static str,
}

pub const HERALD_LAYOUT: PageLayout = PageLayout {
    stats_root: "body > main > div:nth-of-type(2)",
    tables: [
        (Metric::RealmPoints, TableCoord { group: 1, index: 1 }),
        (Metric::Deathblows, TableCoord { group: 1, index: 2 }),
        (Metric::Deaths, TableCoord { group: 1, index: 3 }),
        (Metric::Kills, TableCoord { group: 2, index: 1 }),
        (Metric::SoloKills, TableCoord { group: 2, index: 2 }),
        (Metric::RealmKills, TableCoord { group: 2, index: 3 }),
    ],
    amount_column: 2,
    realm_kill_columns: ColumnSpan { first: 2, character: 3, guild: 2 },
    rank_columns: ColumnSpan { first: 3, character: 3, guild: 2 },
    last_updated: "body > aside",
    description: "body > main > div:nth-of-type(1) > div",
};

impl Default for PageLayout {
    fn default() -> Self {
        HERALD_LAYOUT
    }
}

impl PageLayout {
    pub fn coord(&self, metric: Metric) -> Option<TableCoord> {
        self.tables.iter().find(|(m, _)| *m == metric).map(|(_, c)| *c)
    }

    pub fn table_address(&self, coord: TableCoord) -> String {
        format!(
            "{} > div:nth-of-type({}) > table:nth-of-type({})",
            self.stats_root, coord.group, coord.index
        )
    }

    pub fn cell_address(&self, coord: TableCoord, period: TimePeriod, column: usize) -> String {
        format!(
            "{} > tbody > tr:nth-of-type({}) > td:nth-of-type({})",
            self.table_address(coord),
            period.row(),
            column
        )
    }

    pub fn header_address(&self, coord: TableCoord, column: usize) -> String {
        format!(
            "{} > thead > tr > th:nth-of-type({})",
            self.table_address(coord),
            column
        )
    }
}
