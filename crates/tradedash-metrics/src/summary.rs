//! Portfolio summary metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tradedash_core::{format_currency, format_quantity, schema, Dataset};

use crate::error::{MetricsError, MetricsResult};

/// The three dashboard summary metrics.
///
/// Quantities and amounts are exact decimals; formatting to display strings
/// is a separate concern handled by the `*_display` helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of rows in the dataset.
    pub trade_count: usize,

    /// Exact sum of `QTY` across all rows.
    pub total_quantity: Decimal,

    /// Exact sum of `QTY x ENTRY PRICE` across all rows.
    pub total_investment: Decimal,
}

impl PortfolioSummary {
    /// Computes the summary for a non-empty dataset.
    ///
    /// Validates the schema first: the dataset must have at least one row,
    /// both required columns must exist, and every aggregated cell must be
    /// numeric and non-blank. Violations come back as typed
    /// [`MetricsError`]s instead of an unchecked failure.
    pub fn calculate(dataset: &Dataset) -> MetricsResult<Self> {
        validate_schema(dataset)?;

        let qty_idx = dataset
            .column_index(schema::QTY)
            .ok_or_else(|| MetricsError::missing_column(schema::QTY))?;
        let price_idx = dataset
            .column_index(schema::ENTRY_PRICE)
            .ok_or_else(|| MetricsError::missing_column(schema::ENTRY_PRICE))?;

        let mut total_quantity = Decimal::ZERO;
        let mut total_investment = Decimal::ZERO;
        for (row_idx, row) in dataset.rows().iter().enumerate() {
            let qty = row[qty_idx]
                .as_decimal()
                .ok_or_else(|| MetricsError::non_numeric(schema::QTY, row_idx))?;
            let price = row[price_idx]
                .as_decimal()
                .ok_or_else(|| MetricsError::non_numeric(schema::ENTRY_PRICE, row_idx))?;
            total_quantity += qty;
            total_investment += qty * price;
        }

        Ok(Self {
            trade_count: dataset.row_count(),
            total_quantity,
            total_investment,
        })
    }

    /// Total quantity as a display string, without trailing zeros.
    #[must_use]
    pub fn total_quantity_display(&self) -> String {
        format_quantity(self.total_quantity)
    }

    /// Total investment as a currency string with thousands separators and
    /// two decimal places (no symbol).
    #[must_use]
    pub fn total_investment_display(&self) -> String {
        format_currency(self.total_investment)
    }
}

/// Checks the metrics preconditions without aggregating.
pub fn validate_schema(dataset: &Dataset) -> MetricsResult<()> {
    if dataset.is_empty() {
        return Err(MetricsError::EmptyDataset);
    }
    for column in schema::REQUIRED_METRIC_COLUMNS {
        if !dataset.has_column(column) {
            return Err(MetricsError::missing_column(column));
        }
    }
    Ok(())
}

/// Convenience function to compute the summary.
pub fn summarize(dataset: &Dataset) -> MetricsResult<PortfolioSummary> {
    PortfolioSummary::calculate(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tradedash_core::read_csv_bytes;

    fn dataset(csv: &str) -> Dataset {
        read_csv_bytes(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_single_row_summary() {
        // One row: QTY=100 at ENTRY PRICE=2500.50.
        let ds = dataset(
            "STRATEGY,ENTRY DATE,SCRIP,QTY,ENTRY PRICE\n\
             Sample,2024-01-15,RELIANCE.NS,100,2500.50\n",
        );
        let summary = summarize(&ds).unwrap();
        assert_eq!(summary.trade_count, 1);
        assert_eq!(summary.total_quantity, dec!(100));
        assert_eq!(summary.total_investment, dec!(250050.00));
        assert_eq!(summary.total_quantity_display(), "100");
        assert_eq!(summary.total_investment_display(), "250,050.00");
    }

    #[test]
    fn test_multi_row_summary() {
        // Three rows summing to 225 units and 563,837.50 invested.
        let ds = dataset(
            "STRATEGY,ENTRY DATE,SCRIP,QTY,ENTRY PRICE\n\
             Momentum,2024-01-15,RELIANCE.NS,100,2500.50\n\
             Value,2024-01-16,TCS.NS,50,3800.75\n\
             Growth,2024-01-17,HDFCBANK.NS,75,1650.00\n",
        );
        let summary = summarize(&ds).unwrap();
        assert_eq!(summary.trade_count, 3);
        assert_eq!(summary.total_quantity, dec!(225));
        assert_eq!(summary.total_investment, dec!(563837.50));
        assert_eq!(summary.total_investment_display(), "563,837.50");
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let ds = dataset("STRATEGY,ENTRY DATE,SCRIP,QTY,ENTRY PRICE\n");
        assert_eq!(summarize(&ds).unwrap_err(), MetricsError::EmptyDataset);
    }

    #[test]
    fn test_missing_column_rejected() {
        let ds = dataset("STRATEGY,ENTRY DATE,SCRIP,QTY\nSample,2024-01-15,RELIANCE.NS,100\n");
        assert_eq!(
            summarize(&ds).unwrap_err(),
            MetricsError::missing_column("ENTRY PRICE")
        );
    }

    #[test]
    fn test_non_numeric_cell_rejected() {
        let ds = dataset(
            "STRATEGY,ENTRY DATE,SCRIP,QTY,ENTRY PRICE\n\
             Momentum,2024-01-15,RELIANCE.NS,100,2500.50\n\
             Value,2024-01-16,TCS.NS,fifty,3800.75\n",
        );
        assert_eq!(
            summarize(&ds).unwrap_err(),
            MetricsError::non_numeric("QTY", 1)
        );
    }

    #[test]
    fn test_blank_cell_rejected() {
        let ds = dataset(
            "STRATEGY,ENTRY DATE,SCRIP,QTY,ENTRY PRICE\n\
             Momentum,2024-01-15,RELIANCE.NS,100,\n",
        );
        assert_eq!(
            summarize(&ds).unwrap_err(),
            MetricsError::non_numeric("ENTRY PRICE", 0)
        );
    }

    #[test]
    fn test_fractional_quantities() {
        let ds = dataset(
            "STRATEGY,ENTRY DATE,SCRIP,QTY,ENTRY PRICE\n\
             Momentum,2024-01-15,RELIANCE.NS,12.5,100.10\n",
        );
        let summary = summarize(&ds).unwrap();
        assert_eq!(summary.total_quantity_display(), "12.5");
        assert_eq!(summary.total_investment, dec!(1251.25));
        assert_eq!(summary.total_investment_display(), "1,251.25");
    }
}
