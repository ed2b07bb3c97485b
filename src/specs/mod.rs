// src/specs/mod.rs
//! # Herald page "specs"
//!
//! Everything that knows **how to read a herald subject page** lives here.
//!
//! ## What lives here
//! - `layout` – the coordinate grid: metric → table, period → row, which columns
//!   are amounts / realm kills / ranks, where footer and banner sit. Pure data.
//! - `extract` – single-value lookups against a parsed document through a layout
//!   (cells, headers, footer, banner). Strict: a miss is an error.
//! - `assemble` – builds a full `StatsRecord` for one `RecordKind`.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and the not-found / status policy (`scrape`).
//! - **Reshaping** records for presentation (`transform`).
//!
//! ## Typical call chain
//! ```text
//! scrape::Herald::query → core::net::Fetch::get
//!                       → specs::assemble::assemble(doc, layout, kind, subject)
//!                       → transform::Transform::apply (optional)
//! ```
//!
//! ## Testing notes
//! - Specs are tested **offline** against saved pages in `tests/fixtures/`.
pub mod assemble;
pub mod extract;
pub mod layout;

pub use assemble::assemble;
pub use extract::{Extractor, extract_cell};
pub use layout::{ColumnSpan, HERALD_LAYOUT, PageLayout, TableCoord};
