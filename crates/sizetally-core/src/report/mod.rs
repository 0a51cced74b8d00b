//! Ordered, categorized reports built from an aggregate.

mod aggregation;
mod summary;

pub use aggregation::{aggregate, merge_into};
pub use summary::CategorySummary;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::rules::{categorize, is_hoodie, is_sweatshirt_nonhoodie, size_rank, Vocabulary};
use crate::models::{AggregateMap, ReportRow};
use crate::source::SourceKind;

/// Named row subsets used for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sheet {
    /// Every row.
    All,
    /// Sweatshirts that are not hoodies.
    Sweatshirts,
    /// Hoodies and hooded sweatshirts.
    Hoodies,
}

impl Sheet {
    pub const ALL: [Sheet; 3] = [Sheet::All, Sheet::Sweatshirts, Sheet::Hoodies];

    /// File stem used when a sheet is written as its own file.
    pub fn file_stem(self) -> &'static str {
        match self {
            Sheet::All => "all",
            Sheet::Sweatshirts => "sweatshirts",
            Sheet::Hoodies => "hoodies",
        }
    }

    fn includes(self, vocabulary: &Vocabulary, label: &str) -> bool {
        match self {
            Sheet::All => true,
            Sheet::Sweatshirts => is_sweatshirt_nonhoodie(label),
            Sheet::Hoodies => is_hoodie(vocabulary, label),
        }
    }
}

/// Where a report came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Source file paths, in processing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    /// Kind of the first source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_kind: Option<SourceKind>,

    /// When the report was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,

    /// Processing time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,

    /// Warnings or issues encountered during extraction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// A sorted, categorized production summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Rows ordered by category rank, size rank, then lowercased label.
    pub rows: Vec<ReportRow>,
    /// Category counters.
    pub summary: CategorySummary,
    pub metadata: ReportMetadata,
}

impl Report {
    /// Categorize, rank and sort an aggregate.
    pub fn build(vocabulary: &Vocabulary, aggregate: &AggregateMap) -> Self {
        let mut rows: Vec<ReportRow> = aggregate
            .iter()
            .map(|(label, &quantity)| ReportRow {
                label: label.clone(),
                quantity,
                category: categorize(vocabulary, label),
                size_rank: size_rank(vocabulary, label),
            })
            .collect();
        sort_rows(&mut rows);

        Self {
            rows,
            summary: CategorySummary::from_aggregate(vocabulary, aggregate),
            metadata: ReportMetadata::default(),
        }
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, metadata: ReportMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Rows belonging to `sheet`, in report order.
    pub fn sheet<'a>(
        &'a self,
        vocabulary: &'a Vocabulary,
        sheet: Sheet,
    ) -> impl Iterator<Item = &'a ReportRow> + 'a {
        self.rows
            .iter()
            .filter(move |row| sheet.includes(vocabulary, &row.label))
    }
}

/// Total row order: category rank, size rank, lowercased label.
pub fn compare_rows(a: &ReportRow, b: &ReportRow) -> Ordering {
    a.category
        .cmp(&b.category)
        .then(a.size_rank.cmp(&b.size_rank))
        .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
}

/// Sort rows into report order.
pub fn sort_rows(rows: &mut [ReportRow]) {
    rows.sort_by(compare_rows);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use pretty_assertions::assert_eq;

    fn build(items: &[(&str, u64)]) -> Report {
        let aggregate: AggregateMap = items.iter().map(|(k, q)| (k.to_string(), *q)).collect();
        Report::build(&Vocabulary::standard(), &aggregate)
    }

    fn labels<'a>(rows: impl Iterator<Item = &'a ReportRow>) -> Vec<&'a str> {
        rows.map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn test_sort_by_category_then_size() {
        let report = build(&[
            ("Hooded Sweatshirt - XL", 1),
            ("Hooded Sweatshirt - S", 2),
            ("Sweatshirt - M", 1),
        ]);

        assert_eq!(
            labels(report.rows.iter()),
            vec!["Sweatshirt - M", "Hooded Sweatshirt - S", "Hooded Sweatshirt - XL"]
        );
        assert_eq!(report.rows[0].category, Category::Sweatshirt);
        assert_eq!(report.rows[2].size_rank, 4);
    }

    #[test]
    fn test_unsized_after_sized_then_by_name() {
        let report = build(&[
            ("Tee", 1),
            ("Tee - 2XL", 1),
            ("Tee - XS", 1),
            ("apron tee", 1),
        ]);

        assert_eq!(
            labels(report.rows.iter()),
            vec!["Tee - XS", "Tee - 2XL", "apron tee", "Tee"]
        );
    }

    #[test]
    fn test_vneck_sorts_after_onesie() {
        let report = build(&[("Unisex V-Neck - M", 1), ("Onesie", 1), ("Mug", 1)]);
        assert_eq!(labels(report.rows.iter()), vec!["Onesie", "Unisex V-Neck - M", "Mug"]);
    }

    #[test]
    fn test_sheets() {
        let vocabulary = Vocabulary::standard();
        let report = build(&[
            ("Sweatshirt - M", 1),
            ("Hooded Sweatshirt - S", 2),
            ("Unisex Hoodie - L", 3),
            ("Tee - M", 4),
        ]);

        assert_eq!(report.sheet(&vocabulary, Sheet::All).count(), 4);
        assert_eq!(
            labels(report.sheet(&vocabulary, Sheet::Sweatshirts)),
            vec!["Sweatshirt - M"]
        );
        assert_eq!(
            labels(report.sheet(&vocabulary, Sheet::Hoodies)),
            vec!["Hooded Sweatshirt - S", "Unisex Hoodie - L"]
        );
    }

    #[test]
    fn test_empty_report() {
        let report = build(&[]);
        assert!(report.rows.is_empty());
        assert_eq!(report.summary, CategorySummary::default());
    }

    #[test]
    fn test_serializes_to_json() {
        let report = build(&[("Tee - M", 2)]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["rows"][0]["label"], "Tee - M");
        assert_eq!(json["rows"][0]["category"], "adult_tee");
        assert_eq!(json["summary"]["adult_tees"], 2);
    }
}
