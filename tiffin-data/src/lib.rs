//! Data access and generation for the Tiffin engine.
//!
//! Responsibilities:
//! - Load restaurant catalogues from CSV files with row-level validation.
//! - Export catalogues back to the canonical CSV layout.
//! - Generate deterministic synthetic catalogues for demos and benchmarks.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `tiffin-core` and `tiffin-scorer`).
//! - Address files by UTF-8 paths through capability-based IO.
//!
//! Invariants:
//! - Every restaurant handed out has passed record validation.
//! - No global mutable state.
#![forbid(unsafe_code)]

pub mod fs;

mod ingest;
mod synthetic;

pub use ingest::{
    CsvIngestError, CsvIngestReport, CsvWriteError, ingest_csv, ingest_csv_report, write_csv,
};
pub use synthetic::{SyntheticConfig, generate};
