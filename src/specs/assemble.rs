// src/specs/assemble.rs
//! Record assembler: turns one parsed page into a complete `StatsRecord`.
//!
//! Three strategies, one per `RecordKind`:
//! - **Amounts**: the amount column of the five single-value tables.
//! - **RealmKills**: every realm column of the realm-kill table, keyed by header.
//! - **Ranks**: every rank column of the five single-value tables, keyed by header.
//!
//! Breakdown widths come from the subject kind (guild pages are one column
//! narrower). All strategies stamp the same metadata. Any cell failure aborts
//! the whole record.

use std::collections::BTreeMap;

use scraper::Html;

use crate::error::{CellFault, MalformedCellError};
use crate::record::{
    Metadata, Metric, PeriodStats, Periods, RecordKind, StatValue, StatsRecord, SubjectKind, TimePeriod,
};
use super::extract::Extractor;
use super::layout::{ColumnSpan, PageLayout};

pub fn assemble(
    doc: &Html,
    layout: &PageLayout,
    kind: RecordKind,
    subject: SubjectKind,
    url: &str,
) -> Result<StatsRecord, MalformedCellError> {
    let ex = Extractor::new(doc, layout);
    let periods = match kind {
        RecordKind::Amounts => amounts(&ex)?,
        RecordKind::RealmKills => realm_kills(&ex, subject)?,
        RecordKind::Ranks => ranks(&ex, subject)?,
    };
    let meta = Metadata {
        last_updated: ex.last_updated(),
        description: ex.description()?,
        url: s!(url),
    };
    logd!(?kind, ?subject, description = %meta.description, "assembled record");
    Ok(StatsRecord { kind, periods, meta })
}

fn amounts(ex: &Extractor<'_>) -> Result<Periods<PeriodStats>, MalformedCellError> {
    let column = ex.layout().amount_column;
    Periods::try_build(|period| {
        let mut stats = PeriodStats::new();
        for metric in Metric::AMOUNTS {
            stats.insert(metric, StatValue::Amount(ex.cell(metric, period, column)?));
        }
        Ok(stats)
    })
}

fn realm_kills(ex: &Extractor<'_>, subject: SubjectKind) -> Result<Periods<PeriodStats>, MalformedCellError> {
    let labels = headers(ex, Metric::RealmKills, ex.layout().realm_kill_columns, subject)?;
    Periods::try_build(|period| {
        let mut stats = PeriodStats::new();
        stats.insert(Metric::RealmKills, breakdown(ex, Metric::RealmKills, &labels, period)?);
        Ok(stats)
    })
}

fn ranks(ex: &Extractor<'_>, subject: SubjectKind) -> Result<Periods<PeriodStats>, MalformedCellError> {
    let span = ex.layout().rank_columns;
    let mut labels = Vec::with_capacity(Metric::AMOUNTS.len());
    for metric in Metric::AMOUNTS {
        labels.push((metric, headers(ex, metric, span, subject)?));
    }
    Periods::try_build(|period| {
        let mut stats = PeriodStats::new();
        for (metric, cols) in &labels {
            stats.insert(*metric, breakdown(ex, *metric, cols, period)?);
        }
        Ok(stats)
    })
}

/// (column, header label) for each column of the span on this subject's page.
/// Labels key the breakdown, so a repeated one is an error rather than a lost column.
fn headers(
    ex: &Extractor<'_>,
    metric: Metric,
    span: ColumnSpan,
    subject: SubjectKind,
) -> Result<Vec<(usize, String)>, MalformedCellError> {
    let mut labels: Vec<(usize, String)> = Vec::with_capacity(span.len(subject));
    for col in span.columns(subject) {
        let label = ex.header(metric, col)?;
        if labels.iter().any(|(_, seen)| *seen == label) {
            let address = ex.header_address(metric, col)?;
            loge!(%address, %label, "duplicate column header");
            return Err(MalformedCellError::new(address, CellFault::DuplicateHeader(label)));
        }
        labels.push((col, label));
    }
    Ok(labels)
}

fn breakdown(
    ex: &Extractor<'_>,
    metric: Metric,
    cols: &[(usize, String)],
    period: TimePeriod,
) -> Result<StatValue, MalformedCellError> {
    let mut map = BTreeMap::new();
    for (col, label) in cols {
        map.insert(label.clone(), ex.cell(metric, period, *col)?);
    }
    Ok(StatValue::Breakdown(map))
}
