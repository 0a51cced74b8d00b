//! Core library for tallying style/size quantities in order exports.
//!
//! This crate provides:
//! - Document sources (PDF and plain text to lines)
//! - Label detection and proximity-based quantity resolution
//! - Key normalization and aggregation
//! - Rule-ordered product categorization, size ranking and sorting
//! - Category summary counters and export sheets

pub mod error;
pub mod extract;
pub mod models;
pub mod report;
pub mod source;

pub use error::{Result, SourceError, TallyError};
pub use extract::rules::{categorize, normalize_key, size_rank, Vocabulary};
pub use extract::{ExtractionResult, LabelExtractor, LabelParser};
pub use models::{AggregateMap, Category, LabelEntry, Quantity, RawLine, ReportRow, TallyConfig};
pub use report::{aggregate, merge_into, CategorySummary, Report, ReportMetadata, Sheet};
pub use source::{read_document, Document, PdfSource, PlainTextSource, SourceKind, TextSource};
