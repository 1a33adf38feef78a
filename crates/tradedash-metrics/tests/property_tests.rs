//! Property tests for the metrics summarizer.
//!
//! Verify the aggregate identities over generated numeric datasets:
//! trade count equals row count, and the sums are exact.

use proptest::prelude::*;
use rust_decimal::Decimal;

use tradedash_core::{schema, Cell, Dataset};
use tradedash_metrics::{summarize, MetricsError};

fn dataset_from_positions(positions: &[(i64, i64)]) -> Dataset {
    // Prices are generated in paise (hundredths) to keep them exact.
    let columns = schema::BASE_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    let rows = positions
        .iter()
        .enumerate()
        .map(|(i, (qty, price_paise))| {
            vec![
                Cell::Text(format!("Strategy{}", i)),
                Cell::Text("2024-01-15".to_string()),
                Cell::Text(format!("SCRIP{}.NS", i)),
                Cell::Integer(*qty),
                Cell::Number(Decimal::new(*price_paise, 2)),
            ]
        })
        .collect();
    Dataset::from_rows(columns, rows).unwrap()
}

proptest! {
    #[test]
    fn trade_count_equals_row_count(
        positions in prop::collection::vec((1i64..10_000, 1i64..100_000_000), 1..50)
    ) {
        let dataset = dataset_from_positions(&positions);
        let summary = summarize(&dataset).unwrap();
        prop_assert_eq!(summary.trade_count, positions.len());
    }

    #[test]
    fn sums_are_exact(
        positions in prop::collection::vec((1i64..10_000, 1i64..100_000_000), 1..50)
    ) {
        let dataset = dataset_from_positions(&positions);
        let summary = summarize(&dataset).unwrap();

        let expected_qty: Decimal = positions.iter().map(|(q, _)| Decimal::from(*q)).sum();
        let expected_investment: Decimal = positions
            .iter()
            .map(|(q, p)| Decimal::from(*q) * Decimal::new(*p, 2))
            .sum();

        prop_assert_eq!(summary.total_quantity, expected_qty);
        prop_assert_eq!(summary.total_investment, expected_investment);
    }

    #[test]
    fn investment_display_has_two_decimals(
        positions in prop::collection::vec((1i64..10_000, 1i64..100_000_000), 1..50)
    ) {
        let dataset = dataset_from_positions(&positions);
        let summary = summarize(&dataset).unwrap();
        let display = summary.total_investment_display();

        let (_, decimals) = display.split_once('.').expect("always two decimal places");
        prop_assert_eq!(decimals.len(), 2);
        // Grouping: no run of more than three digits between separators.
        prop_assert!(display
            .split('.')
            .next()
            .unwrap()
            .split(',')
            .all(|group| !group.is_empty() && group.len() <= 3));
    }
}

#[test]
fn zero_rows_always_rejected() {
    let dataset = dataset_from_positions(&[]);
    assert_eq!(summarize(&dataset).unwrap_err(), MetricsError::EmptyDataset);
}
