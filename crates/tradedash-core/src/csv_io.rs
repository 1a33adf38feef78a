//! CSV decode/encode for datasets.
//!
//! The first record is always treated as the header naming the columns.
//! Cell typing is inferred per field (integer, then decimal, else text;
//! blank is empty).

use std::io;

use crate::dataset::{Cell, Dataset};
use crate::error::{CoreResult, DatasetError};

/// Reads a dataset from any CSV reader.
///
/// Record length mismatches are reported as malformed CSV rather than
/// padded or truncated, preserving the column-homogeneity invariant.
pub fn read_csv<R: io::Read>(reader: R) -> CoreResult<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| DatasetError::malformed(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut dataset = Dataset::new(headers);
    for result in csv_reader.records() {
        let record = result.map_err(|e| DatasetError::malformed(e.to_string()))?;
        let row = record.iter().map(Cell::parse).collect();
        dataset.push_row(row)?;
    }
    Ok(dataset)
}

/// Reads a dataset from raw CSV bytes (e.g. an uploaded file or an HTTP body).
pub fn read_csv_bytes(bytes: &[u8]) -> CoreResult<Dataset> {
    read_csv(bytes)
}

/// Encodes a dataset as CSV bytes, header first.
///
/// Empty cells are written as blank fields, so open positions keep their
/// exit columns blank in generated files.
pub fn write_csv(dataset: &Dataset) -> CoreResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(dataset.columns())
        .map_err(|e| DatasetError::encode_failed(e.to_string()))?;

    for row in dataset.rows() {
        let fields: Vec<String> = row.iter().map(Cell::to_field).collect();
        writer
            .write_record(&fields)
            .map_err(|e| DatasetError::encode_failed(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| DatasetError::encode_failed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = "\
STRATEGY,ENTRY DATE,SCRIP,QTY,ENTRY PRICE
Momentum,2024-01-15,RELIANCE.NS,100,2500.50
Value,2024-01-16,TCS.NS,50,3800.75
";

    #[test]
    fn test_read_csv() {
        let ds = read_csv_bytes(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            ds.columns(),
            &["STRATEGY", "ENTRY DATE", "SCRIP", "QTY", "ENTRY PRICE"]
        );
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.cell(0, "QTY"), Some(&Cell::Integer(100)));
        assert_eq!(ds.cell(1, "ENTRY PRICE"), Some(&Cell::Number(dec!(3800.75))));
        assert_eq!(
            ds.cell(0, "SCRIP"),
            Some(&Cell::Text("RELIANCE.NS".into()))
        );
    }

    #[test]
    fn test_read_header_only_is_empty() {
        let ds = read_csv_bytes(b"STRATEGY,QTY,ENTRY PRICE\n").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.column_count(), 3);
    }

    #[test]
    fn test_read_ragged_record_is_malformed() {
        let err = read_csv_bytes(b"A,B\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, DatasetError::MalformedCsv { .. }));
    }

    #[test]
    fn test_write_csv_blank_empty_cells() {
        let ds = Dataset::from_rows(
            vec!["SCRIP".into(), "EXIT DATE".into(), "EXIT PRICE".into()],
            vec![
                vec![
                    Cell::Text("RELIANCE.NS".into()),
                    Cell::Empty,
                    Cell::Empty,
                ],
                vec![
                    Cell::Text("TCS.NS".into()),
                    Cell::Text("2024-01-20".into()),
                    Cell::Number(dec!(3850.25)),
                ],
            ],
        )
        .unwrap();

        let bytes = write_csv(&ds).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("SCRIP,EXIT DATE,EXIT PRICE"));
        assert_eq!(lines.next(), Some("RELIANCE.NS,,"));
        assert_eq!(lines.next(), Some("TCS.NS,2024-01-20,3850.25"));
    }

    #[test]
    fn test_round_trip_preserves_column_order() {
        let ds = read_csv_bytes(SAMPLE.as_bytes()).unwrap();
        let encoded = write_csv(&ds).unwrap();
        let reread = read_csv_bytes(&encoded).unwrap();
        assert_eq!(ds, reread);
    }
}
