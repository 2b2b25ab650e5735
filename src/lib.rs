//! Productivity Impact Engine
//!
//! This crate estimates what interface friction costs an organisation. The
//! throughput engine turns page latency and click counts into tasks achieved
//! against an expectation; the error impact engine turns error volume into
//! lost hours and labour cost.
//!
//! Results can be kept in a caller-owned [`workbook::Workbook`], exported as
//! CSV or a printable report, and served over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod workbook;
