use std::collections::BTreeMap;

use getset::{CopyGetters, Getters};
use log::{debug, trace};
use rust_decimal::Decimal;

use super::classifier::Registry;
use super::record::Transaction;
use super::IncomeError;

const PRECISION: u32 = 2;

/// A deposit together with the income source it was attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDeposit {
    pub transaction: Transaction,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct AggregationResult {
    /// Unrounded running sum per income source.
    #[getset(get = "pub")]
    per_source: BTreeMap<String, Decimal>,
    /// Sum of every matched deposit, rounded to cents.
    #[getset(get_copy = "pub")]
    grand_total: Decimal,
    /// Matched deposits in input order.
    #[getset(get = "pub")]
    matched: Vec<ClassifiedDeposit>,
    /// Deposits no source claimed, in input order. Never counted in any total.
    #[getset(get = "pub")]
    unmatched: Vec<Transaction>,
    /// Positive-amount transactions seen, before classification.
    #[getset(get_copy = "pub")]
    deposit_count: usize,
}

impl AggregationResult {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Turns the two empty outcomes into distinct errors so a caller cannot mistake
    /// them for a zero income.
    pub fn require_matches(self) -> Result<AggregationResult, IncomeError> {
        if self.deposit_count == 0 {
            Err(IncomeError::NoDeposits)
        } else if self.matched.is_empty() {
            Err(IncomeError::NoMatchingTransactions {
                deposits: self.deposit_count,
            })
        } else {
            Ok(self)
        }
    }
}

/// Classifies every deposit in `transactions` against `registry` and sums the matches.
/// Debits and zero amounts never reach the classifier. Fails if a sum leaves the
/// range of `Decimal`.
pub fn aggregate<I>(transactions: I, registry: &Registry) -> Result<AggregationResult, IncomeError>
where
    I: IntoIterator<Item = Transaction>,
{
    let mut per_source: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut total = Decimal::ZERO;
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    let mut deposit_count = 0;

    for transaction in transactions.into_iter().filter(Transaction::is_deposit) {
        deposit_count += 1;

        match registry.classify(&transaction.description) {
            Some(source) => {
                debug!("found matching transaction on {}, source={}", transaction.date, source);
                let overflow = || IncomeError::AmountOverflow {
                    income_source: source.to_owned(),
                    date: transaction.date.clone(),
                };

                let subtotal = per_source.entry(source.to_owned()).or_insert(Decimal::ZERO);
                *subtotal = subtotal.checked_add(transaction.amount).ok_or_else(overflow)?;
                total = total.checked_add(transaction.amount).ok_or_else(overflow)?;

                matched.push(ClassifiedDeposit {
                    source: source.to_owned(),
                    transaction,
                });
            },
            None => {
                trace!("unmatched deposit on {}: {}", transaction.date, transaction.description);
                unmatched.push(transaction);
            },
        }
    }

    Ok(AggregationResult {
        per_source,
        grand_total: total.round_dp(PRECISION),
        matched,
        unmatched,
        deposit_count,
    })
}
