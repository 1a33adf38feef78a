//! Portfolio CSV schema constants.
//!
//! Column names are exact, including the embedded spaces; lookups never
//! normalize case or whitespace.

/// Strategy name column.
pub const STRATEGY: &str = "STRATEGY";

/// Position entry date column.
pub const ENTRY_DATE: &str = "ENTRY DATE";

/// Position exit date column (extended files only; blank for open positions).
pub const EXIT_DATE: &str = "EXIT DATE";

/// Ticker symbol column.
pub const SCRIP: &str = "SCRIP";

/// Quantity column. Required for metrics; must be numeric and non-blank.
pub const QTY: &str = "QTY";

/// Entry price column. Required for metrics; must be numeric and non-blank.
pub const ENTRY_PRICE: &str = "ENTRY PRICE";

/// Exit price column (extended files only; blank for open positions).
pub const EXIT_PRICE: &str = "EXIT PRICE";

/// Base header of a portfolio file.
pub const BASE_COLUMNS: [&str; 5] = [STRATEGY, ENTRY_DATE, SCRIP, QTY, ENTRY_PRICE];

/// Extended header used by generated sample files, with exit fields.
pub const EXTENDED_COLUMNS: [&str; 7] = [
    STRATEGY,
    ENTRY_DATE,
    EXIT_DATE,
    SCRIP,
    QTY,
    ENTRY_PRICE,
    EXIT_PRICE,
];

/// Columns the metrics summarizer requires in every aggregated row.
pub const REQUIRED_METRIC_COLUMNS: [&str; 2] = [QTY, ENTRY_PRICE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_header_contains_base_columns() {
        for col in BASE_COLUMNS {
            assert!(EXTENDED_COLUMNS.contains(&col));
        }
    }

    #[test]
    fn test_required_columns_are_in_base_header() {
        for col in REQUIRED_METRIC_COLUMNS {
            assert!(BASE_COLUMNS.contains(&col));
        }
    }
}
