//! Cleans a Statistics Canada CPI table down to food categories.
//!
//! The whole run is [`filter_dataset`]: one read, the filter stages over the
//! in-memory rows, one write.

pub mod data;
pub mod error;
pub mod report;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;

use data::filter::{self, FilterOptions};
use data::model::Dataset;
use data::{loader, writer};
use report::Summary;

pub use error::{CleanError, Result};

/// What a run produced: the written rows and their diagnostics.
#[derive(Debug, Clone)]
pub struct CleanRun {
    pub output: PathBuf,
    pub dataset: Dataset,
    pub summary: Summary,
}

impl CleanRun {
    /// Where the rows went, followed by the run summary.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Cleaned data saved to {}", self.output.display())?;
        self.summary.print_to(out)
    }

    /// Print to stdout.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_to(&mut lock)
    }
}

/// Load `input`, keep the food rows allowed by `options` and write them to
/// `output`.
///
/// Any load error (missing column, bad date) aborts before `output` is
/// created. An empty result still produces a header-only file.
pub fn filter_dataset(input: &Path, output: &Path, options: &FilterOptions) -> Result<CleanRun> {
    info!("loading {}", input.display());
    let source = loader::load_csv(input)?;

    let outcome = filter::apply(&source, options);
    writer::write_csv(output, &outcome.dataset)?;
    info!(
        "cleaned data saved to {} ({} rows)",
        output.display(),
        outcome.dataset.len()
    );

    let summary = Summary::new(&outcome, options.include_aggregate);
    Ok(CleanRun {
        output: output.to_path_buf(),
        dataset: outcome.dataset,
        summary,
    })
}

/// [`filter_dataset`] with the default year bound, printing the diagnostics
/// to stdout.
pub fn clean_cpi_data(input: &Path, output: &Path, include_aggregate: bool) -> Result<Dataset> {
    let run = filter_dataset(input, output, &FilterOptions::with_aggregate(include_aggregate))?;
    run.print()?;
    Ok(run.dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::FilterOutcome;
    use crate::data::model::Observation;

    #[test]
    fn run_output_starts_with_saved_path() {
        let dataset = Dataset::from_rows(vec![Observation {
            ref_date: "1980-01".parse().unwrap(),
            geo: "Canada".into(),
            category: "Food".into(),
            value: Some(40.1),
        }]);
        let outcome = FilterOutcome {
            input_rows: 3,
            after_temporal: 2,
            after_categorical: 1,
            dataset: dataset.clone(),
        };
        let run = CleanRun {
            output: PathBuf::from("data/food_cpi_data.csv"),
            dataset,
            summary: Summary::new(&outcome, false),
        };

        let mut buf = Vec::new();
        run.print_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Cleaned data saved to data/food_cpi_data.csv"));
        assert_eq!(lines.next(), Some("Original dataset rows: 3"));
        assert!(text.contains("Available provinces/regions: Canada"));
    }
}
