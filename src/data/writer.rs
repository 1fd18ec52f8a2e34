use std::io::Write;
use std::path::Path;

use log::debug;

use super::columns::OUTPUT_COLUMNS;
use super::model::Dataset;
use crate::error::Result;

/// Write `dataset` as a four-column CSV with a header row.
///
/// The header is written even when there are no rows.
pub fn write_csv(path: &Path, dataset: &Dataset) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_rows(file, dataset)?;
    debug!("wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

/// Same as [`write_csv`] but into any byte sink.
pub fn write_rows<W: Write>(sink: W, dataset: &Dataset) -> Result<()> {
    // Serialising a struct only emits its header alongside the first row.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(OUTPUT_COLUMNS)?;
    for obs in dataset {
        writer.serialize(obs)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn render(dataset: &Dataset) -> String {
        let mut buf = Vec::new();
        write_rows(&mut buf, dataset).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_dataset_writes_header_only() {
        assert_eq!(
            render(&Dataset::default()),
            "REF_DATE,GEO,Products and product groups,VALUE\n"
        );
    }

    #[test]
    fn quotes_labels_with_commas_and_blanks_missing_values() {
        let ds = Dataset::from_rows(vec![
            Observation {
                ref_date: "1975-03".parse().unwrap(),
                geo: "Canada".into(),
                category: "Fish, seafood and other marine products".into(),
                value: Some(27.5),
            },
            Observation {
                ref_date: "1975-04".parse().unwrap(),
                geo: "Yukon".into(),
                category: "Eggs".into(),
                value: None,
            },
        ]);
        let text = render(&ds);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "1975-03,Canada,\"Fish, seafood and other marine products\",27.5");
        assert_eq!(lines[2], "1975-04,Yukon,Eggs,");
    }
}
