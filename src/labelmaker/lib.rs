//! # Labelmaker Architecture
//!
//! Labelmaker turns a range of inventory item numbers into printable
//! label sheets: one QR PNG per item plus a paginated PDF laid out on
//! a fixed Avery grid. The CLI is a thin client over the library.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  CLI (main.rs + args.rs)                                  │
//! │  - Parses flags, validates required parameters,           │
//! │    prints messages, owns exit codes                       │
//! └───────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                 │
//! │  - One module per generation mode (box/building/rooms)    │
//! │  - QR images first, then the sheet; returns CmdResult     │
//! └───────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Core (model, strategy, sheet, qr, catalog)               │
//! │  - Pure placement arithmetic and record construction      │
//! │  - printpdf/qrcode only at the edges (sheet::render, qr)  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Item numbers are caller-chained
//!
//! Nothing here persists a "last used item number". Every run consumes
//! an explicit [`model::ItemRange`] and hands back the range it
//! covered; chaining runs without gaps or overlaps is the operator's
//! job, via `range.next()`.
//!
//! ## Module overview
//!
//! - [`model`]: `ItemRange`, ID formatting, the tagged `LabelRecord`
//! - [`strategy`]: per-mode grouping (IDs, records, output names)
//! - [`sheet`]: grid specs, page engine, drawing, PDF rendering
//! - [`qr`]: per-item QR payloads and PNG files
//! - [`catalog`]: the building -> room-list file
//! - [`commands`]: one entry point per CLI mode
//! - [`config`]: paths and strings the modes share
//! - [`error`]: error types

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod qr;
pub mod sheet;
pub mod strategy;
