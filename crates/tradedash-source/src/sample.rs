//! Built-in sample and fallback datasets, plus sample-file generation.
//!
//! Every dataset here is fixed and deterministic; construction performs no
//! I/O and cannot fail. The row literals are fixed-width arrays built via
//! [`Dataset::from_literal`], which holds the width invariant at the type
//! level.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tradedash_core::{schema, write_csv, Cell, CoreResult, Dataset};

use crate::RemoteFile;

fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

fn base_row(
    strategy: &str,
    entry_date: &str,
    scrip: &str,
    qty: i64,
    price: Decimal,
) -> [Cell; 5] {
    [
        text(strategy),
        text(entry_date),
        text(scrip),
        Cell::Integer(qty),
        Cell::Number(price),
    ]
}

#[allow(clippy::too_many_arguments)]
fn extended_row(
    strategy: &str,
    entry_date: &str,
    exit_date: Option<&str>,
    scrip: &str,
    qty: i64,
    entry_price: Decimal,
    exit_price: Option<Decimal>,
) -> [Cell; 7] {
    [
        text(strategy),
        text(entry_date),
        exit_date.map_or(Cell::Empty, text),
        text(scrip),
        Cell::Integer(qty),
        Cell::Number(entry_price),
        exit_price.map_or(Cell::Empty, Cell::Number),
    ]
}

/// The fixed three-row sample portfolio shown for the sample origin.
#[must_use]
pub fn sample_portfolio() -> Dataset {
    let rows = vec![
        base_row("Momentum", "2024-01-15", "RELIANCE.NS", 100, dec!(2500.50)),
        base_row("Value", "2024-01-16", "TCS.NS", 50, dec!(3800.75)),
        base_row("Growth", "2024-01-17", "HDFCBANK.NS", 75, dec!(1650.00)),
    ];
    Dataset::from_literal(schema::BASE_COLUMNS, rows)
}

/// The single illustrative row substituted when a remote fetch fails.
#[must_use]
pub fn fallback_row() -> Dataset {
    let rows = vec![base_row(
        "Sample",
        "2024-01-15",
        "RELIANCE.NS",
        100,
        dec!(2500.50),
    )];
    Dataset::from_literal(schema::BASE_COLUMNS, rows)
}

/// Deterministic content for one downloadable sample file.
///
/// Uses the extended schema; open positions leave both exit fields blank.
#[must_use]
pub fn sample_file_dataset(file: RemoteFile) -> Dataset {
    let rows = match file {
        RemoteFile::ShortTermStrategy => vec![
            extended_row(
                "Momentum",
                "2024-01-15",
                None,
                "RELIANCE.NS",
                100,
                dec!(2500.50),
                None,
            ),
            extended_row(
                "Swing",
                "2024-01-16",
                Some("2024-01-20"),
                "TCS.NS",
                50,
                dec!(3800.75),
                Some(dec!(3850.25)),
            ),
        ],
        RemoteFile::LongTermStrategy => vec![
            extended_row(
                "Value",
                "2024-01-16",
                None,
                "TCS.NS",
                50,
                dec!(3800.75),
                None,
            ),
            extended_row(
                "Growth",
                "2024-01-17",
                Some("2024-02-15"),
                "HDFCBANK.NS",
                75,
                dec!(1650.00),
                Some(dec!(1702.40)),
            ),
        ],
        RemoteFile::SamplePortfolio => vec![
            extended_row(
                "Momentum",
                "2024-01-15",
                None,
                "RELIANCE.NS",
                100,
                dec!(2500.50),
                None,
            ),
            extended_row(
                "Value",
                "2024-01-16",
                None,
                "TCS.NS",
                50,
                dec!(3800.75),
                None,
            ),
            extended_row(
                "Growth",
                "2024-01-17",
                None,
                "HDFCBANK.NS",
                75,
                dec!(1650.00),
                None,
            ),
        ],
    };
    Dataset::from_literal(schema::EXTENDED_COLUMNS, rows)
}

/// Encodes one downloadable sample file as CSV bytes.
pub fn generate_sample_csv(file: RemoteFile) -> CoreResult<Vec<u8>> {
    write_csv(&sample_file_dataset(file))
}
