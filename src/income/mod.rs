use thiserror::Error;

pub mod aggregator;
pub mod amount;
pub mod classifier;
pub mod record;
pub mod report;


pub use aggregator::{aggregate, AggregationResult, ClassifiedDeposit};
pub use amount::{normalize, AmountError};
pub use classifier::{classify, IncomeSource, Registry};
pub use record::{parse_records, ColumnLayout, Records, Transaction};
pub use report::{build, ReportRow, ReportView, SourceTotal};

#[derive(Debug, Error)]
pub enum IncomeError {
    #[error("row {row}: expected {expected} fields, found {found}")]
    MalformedRow { row: usize, expected: usize, found: usize },
    #[error("row {row}: invalid amount '{raw}': {reason}")]
    InvalidAmount {
        row: usize,
        raw: String,
        #[source]
        reason: AmountError,
    },
    #[error("column layout is missing the '{0}' column")]
    MissingColumn(&'static str),
    #[error("column '{0}' appears more than once in the layout")]
    DuplicateColumn(String),
    #[error("invalid pattern for income source '{name}'")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
    #[error("income source '{0}' is registered more than once")]
    DuplicateSource(String),
    #[error("total for income source '{income_source}' overflowed at the deposit on {date}")]
    AmountOverflow { income_source: String, date: String },
    #[error("no deposits found")]
    NoDeposits,
    #[error("no matching transactions found among {deposits} deposits")]
    NoMatchingTransactions { deposits: usize },
}
