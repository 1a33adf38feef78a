//! Output formatting utilities.

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use tradedash_core::Dataset;
use tradedash_metrics::PortfolioSummary;

/// Currency symbol shown in front of the total investment metric.
const CURRENCY_SYMBOL: &str = "₹";

/// Prints a dataset as a formatted table, header first.
pub fn print_dataset(dataset: &Dataset) {
    if dataset.is_empty() {
        println!("No rows.");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(dataset.columns().iter().cloned());
    for row in dataset.rows() {
        builder.push_record(row.iter().map(ToString::to_string));
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// A labeled metric card.
#[derive(Debug, Clone, Tabled)]
pub struct MetricCard {
    #[tabled(rename = "Metric")]
    pub label: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl MetricCard {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Prints the three summary metrics as labeled cards.
pub fn print_summary(summary: &PortfolioSummary) {
    let cards = [
        MetricCard::new("Total Trades", summary.trade_count.to_string()),
        MetricCard::new("Total Quantity", summary.total_quantity_display()),
        MetricCard::new(
            "Total Investment",
            format!("{}{}", CURRENCY_SYMBOL, summary.total_investment_display()),
        ),
    ];

    let table = Table::new(cards).with(Style::rounded()).to_string();
    println!("{}", table);
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints the dashboard footer with the render timestamp.
pub fn print_footer() {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("{}", format!("Last updated: {}", now).dimmed());
}
