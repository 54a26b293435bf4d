//! Back-Office Reporting Library
//!
//! This crate provides the reporting and KPI-aggregation core for a retail
//! back-office system: resolving reporting periods from a reference date,
//! filtering task and stock records by independent criteria, deriving task
//! lifecycle status, computing performance indicators, and assembling the
//! results into a renderer-agnostic [`Document`](reports::document::Document)
//! handed off to an external rendering sink.
//!
//! Persistence and rendering are collaborator concerns: the engine consumes
//! already-materialized record collections and produces document values.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod errors;
pub mod models;
pub mod reports;
pub mod services;

pub use config::ReportParameters;
pub use errors::{NoDataError, ReportError};
pub use models::product::ProductStockRecord;
pub use models::task::{Priority, TaskRecord, TaskStatus};
pub use reports::criteria::CriteriaSelection;
pub use reports::document::{Document, RenderSink, Table};
pub use reports::kpi::KpiSummary;
pub use reports::period::{DateRange, PeriodKind};
pub use services::reports::ReportService;
