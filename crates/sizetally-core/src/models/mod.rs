//! Data models shared by the engine and its front ends.

pub mod category;
pub mod config;
pub mod order;

pub use category::Category;
pub use config::{ExtractionConfig, OutputConfig, OutputFormat, TallyConfig};
pub use order::{split_lines, AggregateMap, LabelEntry, LabelMatch, Quantity, RawLine, ReportRow};
