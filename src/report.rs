use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::data::filter::FilterOutcome;
use crate::data::model::Dataset;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Summary of a cleaning run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub rows: usize,
}

/// Row counts per stage plus a description of what ended up in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub input_rows: usize,
    pub after_temporal: usize,
    pub after_categorical: usize,
    pub final_rows: usize,
    /// Distinct `GEO` values in first-appearance order.
    pub geographies: Vec<String>,
    /// Only reported when `All-items` rows were excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_counts: Option<Vec<CategoryCount>>,
}

impl Summary {
    pub fn new(outcome: &FilterOutcome, include_aggregate: bool) -> Self {
        let dataset = &outcome.dataset;
        Summary {
            input_rows: outcome.input_rows,
            after_temporal: outcome.after_temporal,
            after_categorical: outcome.after_categorical,
            final_rows: dataset.len(),
            geographies: distinct_geographies(dataset),
            category_counts: (!include_aggregate).then(|| category_counts(dataset)),
        }
    }

    /// Human-readable diagnostics, one fact per line.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Original dataset rows: {}", self.input_rows)?;
        writeln!(out, "Rows after year filtering: {}", self.after_temporal)?;
        writeln!(out, "Rows after category filtering: {}", self.after_categorical)?;
        writeln!(out, "Rows written: {}", self.final_rows)?;
        writeln!(out, "Available provinces/regions: {}", self.geographies.join(", "))?;

        if let Some(counts) = &self.category_counts {
            writeln!(out)?;
            writeln!(out, "Number of data points per food category:")?;
            let width = counts.iter().map(|c| c.category.len()).max().unwrap_or(0);
            for c in counts {
                writeln!(out, "  {:<width$}  {}", c.category, c.rows)?;
            }
        }
        Ok(())
    }

    /// Print to stdout.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_to(&mut lock)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn distinct_geographies(dataset: &Dataset) -> Vec<String> {
    let mut seen = Vec::<&str>::new();
    for obs in dataset {
        if !seen.contains(&obs.geo.as_str()) {
            seen.push(&obs.geo);
        }
    }
    seen.into_iter().map(str::to_string).collect()
}

/// Rows per category, most frequent first. Ties keep first-appearance order.
fn category_counts(dataset: &Dataset) -> Vec<CategoryCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for obs in dataset {
        let n = counts.entry(&obs.category).or_insert(0);
        if *n == 0 {
            order.push(&obs.category);
        }
        *n += 1;
    }

    let mut result: Vec<CategoryCount> = order
        .into_iter()
        .map(|category| CategoryCount {
            category: category.to_string(),
            rows: counts[category],
        })
        .collect();
    // Stable sort keeps first-appearance order among equal counts.
    result.sort_by(|a, b| b.rows.cmp(&a.rows));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn outcome(rows: &[(&str, &str)]) -> FilterOutcome {
        let rows: Vec<Observation> = rows
            .iter()
            .map(|(geo, cat)| Observation {
                ref_date: "1990-01".parse().unwrap(),
                geo: geo.to_string(),
                category: cat.to_string(),
                value: Some(1.0),
            })
            .collect();
        FilterOutcome {
            input_rows: rows.len() + 3,
            after_temporal: rows.len() + 1,
            after_categorical: rows.len(),
            dataset: Dataset::from_rows(rows),
        }
    }

    #[test]
    fn counts_categories_descending_with_stable_ties() {
        let out = outcome(&[
            ("Canada", "Meat"),
            ("Canada", "Eggs"),
            ("Ontario", "Eggs"),
            ("Ontario", "Butter"),
        ]);
        let summary = Summary::new(&out, false);
        let counts = summary.category_counts.unwrap();
        let got: Vec<(&str, usize)> = counts.iter().map(|c| (c.category.as_str(), c.rows)).collect();
        assert_eq!(got, vec![("Eggs", 2), ("Meat", 1), ("Butter", 1)]);
        assert_eq!(summary.geographies, vec!["Canada", "Ontario"]);
        assert_eq!(summary.final_rows, 4);
        assert_eq!(summary.input_rows, 7);
    }

    #[test]
    fn aggregate_mode_skips_category_counts() {
        let summary = Summary::new(&outcome(&[("Canada", "All-items")]), true);
        assert!(summary.category_counts.is_none());

        let mut buf = Vec::new();
        summary.print_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("per food category"));
    }

    #[test]
    fn empty_output_still_prints_every_count() {
        let summary = Summary::new(&outcome(&[]), false);
        let mut buf = Vec::new();
        summary.print_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Original dataset rows: 3"));
        assert!(text.contains("Rows after year filtering: 1"));
        assert!(text.contains("Rows after category filtering: 0"));
        assert!(text.contains("Rows written: 0"));
        assert!(text.contains("Number of data points per food category:"));
    }
}
