use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use food_cpi::data::filter::{FilterOptions, DEFAULT_MIN_YEAR};
use food_cpi::filter_dataset;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Keep only food-related CPI series from 1970 onwards"
)]
struct Args {
    /// StatCan CPI table (CSV with REF_DATE, GEO, Products and product groups, VALUE)
    #[arg(default_value = "data/data.csv")]
    input: PathBuf,
    /// Where to write the cleaned four-column CSV
    #[arg(default_value = "data/food_cpi_data.csv")]
    output: PathBuf,
    /// Also keep the aggregate "All-items" series
    #[arg(long)]
    include_all_items: bool,
    /// Drop rows dated before this year
    #[arg(long, default_value_t = DEFAULT_MIN_YEAR)]
    min_year: i32,
    /// Write the run summary as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Args {
    fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            min_year: self.min_year,
            include_aggregate: self.include_all_items,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = args.filter_options();
    info!("options: {options:?}");

    let run = filter_dataset(&args.input, &args.output, &options).with_context(|| {
        format!(
            "cleaning {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    run.print().context("printing summary")?;

    if let Some(path) = &args.report {
        run.summary
            .write_json(path)
            .with_context(|| format!("writing report {}", path.display()))?;
        info!("report written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_data_directory_layout() {
        let args = Args::try_parse_from(["food-cpi"]).unwrap();
        assert_eq!(args.input, PathBuf::from("data/data.csv"));
        assert_eq!(args.output, PathBuf::from("data/food_cpi_data.csv"));
        assert!(args.report.is_none());
        assert_eq!(args.filter_options(), FilterOptions::default());
    }

    #[test]
    fn flags_map_onto_filter_options() {
        let args = Args::try_parse_from([
            "food-cpi",
            "in.csv",
            "out.csv",
            "--include-all-items",
            "--min-year",
            "1985",
            "--report",
            "summary.json",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("in.csv"));
        assert_eq!(args.output, PathBuf::from("out.csv"));
        assert_eq!(args.report, Some(PathBuf::from("summary.json")));
        assert_eq!(
            args.filter_options(),
            FilterOptions {
                min_year: 1985,
                include_aggregate: true,
            }
        );
    }

    #[test]
    fn min_year_must_be_a_number() {
        assert!(Args::try_parse_from(["food-cpi", "--min-year", "seventies"]).is_err());
    }
}
