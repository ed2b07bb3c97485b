// src/specs/extract.rs
//! Table extractor: reads single values out of a parsed herald page using the
//! coordinates from `layout`. Read-only; every miss is a `MalformedCellError`
//! carrying the selector that failed, never a zero.

use scraper::{ElementRef, Html};

use crate::core::html;
use crate::core::sanitize::{normalize_description, normalize_last_updated, normalize_ws, parse_count};
use crate::error::{CellFault, MalformedCellError};
use crate::record::{Metric, TimePeriod};
use super::layout::{PageLayout, TableCoord};

fn select_one<'a>(doc: &'a Html, address: &str) -> Result<ElementRef<'a>, MalformedCellError> {
    let (sel, address) = css!("{}", address).map_err(|fault| MalformedCellError::new(address, fault))?;
    html::first(doc, &sel).ok_or_else(|| MalformedCellError::new(address, CellFault::Missing))
}

/// Integer in `tbody > tr[period] > td[column]` of the table at `coord`.
/// Thousands separators are dropped; anything else non-numeric fails.
pub fn extract_cell(
    doc: &Html,
    layout: &PageLayout,
    coord: TableCoord,
    period: TimePeriod,
    column: usize,
) -> Result<u64, MalformedCellError> {
    let address = layout.cell_address(coord, period, column);
    let cell = select_one(doc, &address)?;
    let text = html::text_content(cell);
    parse_count(&text).ok_or_else(|| {
        loge!(%address, text = %text.trim(), "cell is not a number");
        MalformedCellError::new(address, CellFault::NotNumeric(normalize_ws(&text)))
    })
}

/// Borrowed view of one parsed page through a layout.
pub struct Extractor<'a> {
    doc: &'a Html,
    layout: &'a PageLayout,
}

impl<'a> Extractor<'a> {
    pub fn new(doc: &'a Html, layout: &'a PageLayout) -> Self {
        Self { doc, layout }
    }

    pub fn layout(&self) -> &PageLayout { self.layout }

    fn coord(&self, metric: Metric) -> Result<TableCoord, MalformedCellError> {
        self.layout
            .coord(metric)
            .ok_or_else(|| MalformedCellError::new(format!("<no table for {metric}>"), CellFault::Missing))
    }

    pub fn cell(&self, metric: Metric, period: TimePeriod, column: usize) -> Result<u64, MalformedCellError> {
        extract_cell(self.doc, self.layout, self.coord(metric)?, period, column)
    }

    pub fn header_address(&self, metric: Metric, column: usize) -> Result<String, MalformedCellError> {
        Ok(self.layout.header_address(self.coord(metric)?, column))
    }

    /// Column header text, whitespace-collapsed. Blank headers count as missing.
    pub fn header(&self, metric: Metric, column: usize) -> Result<String, MalformedCellError> {
        let address = self.header_address(metric, column)?;
        let label = normalize_ws(&html::text_content(select_one(self.doc, &address)?));
        if label.is_empty() {
            return Err(MalformedCellError::new(address, CellFault::Missing));
        }
        Ok(label)
    }

    /// Footer timestamp. An absent footer is tolerated: the stats are still good.
    pub fn last_updated(&self) -> String {
        match select_one(self.doc, self.layout.last_updated) {
            Ok(aside) => normalize_last_updated(html::own_text(aside)),
            Err(e) => {
                logd!(error = %e, "no last-updated footer");
                normalize_last_updated(std::iter::empty())
            }
        }
    }

    pub fn description(&self) -> Result<String, MalformedCellError> {
        let banner = select_one(self.doc, self.layout.description)?;
        Ok(normalize_description(&html::text_content(banner)))
    }
}
