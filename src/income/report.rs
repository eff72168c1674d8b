use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregator::AggregationResult;

pub const DESCRIPTION_WIDTH: usize = 16;

/// Income above which the payer platform is expected to issue a 1099.
pub const FORM_1099_THRESHOLD: Decimal = dec!(600);

const PRECISION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub amount: Decimal,
    pub description: String,
    pub date: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTotal {
    pub name: String,
    pub total: Decimal,
}

/// Display-ready shape of an aggregation. Rendering it is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub rows: Vec<ReportRow>,
    pub per_source: Vec<SourceTotal>,
    pub grand_total: Decimal,
}

impl ReportView {
    pub fn exceeds_1099_threshold(&self) -> bool {
        self.grand_total > FORM_1099_THRESHOLD
    }
}

fn truncate(description: &str) -> String {
    description.chars().take(DESCRIPTION_WIDTH).collect()
}

pub fn build(result: &AggregationResult) -> ReportView {
    let rows = result
        .matched()
        .iter()
        .map(|deposit| ReportRow {
            amount: deposit.transaction.amount,
            description: truncate(&deposit.transaction.description),
            date: deposit.transaction.date.clone(),
            source: deposit.source.clone(),
        })
        .collect();

    let per_source = result
        .per_source()
        .iter()
        .map(|(name, total)| SourceTotal {
            name: name.clone(),
            total: total.round_dp(PRECISION),
        })
        .collect();

    ReportView {
        rows,
        per_source,
        grand_total: result.grand_total(),
    }
}
