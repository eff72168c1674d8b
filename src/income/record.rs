use rust_decimal::Decimal;

use super::amount::normalize;
use super::IncomeError;

pub const DATE: &str = "date";
pub const AMOUNT: &str = "amount";
pub const DESCRIPTION: &str = "description";

/// One ledger entry. Positive amounts are deposits, negative are debits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: String,
    pub amount: Decimal,
    pub description: String,
    /// Columns the layout declares but nothing interprets, in layout order.
    pub passthrough: Vec<String>,
}

impl Transaction {
    pub fn is_deposit(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// Column names of a headerless export, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: Vec<String>,
    date: usize,
    amount: usize,
    description: usize,
}

impl ColumnLayout {
    pub fn new<I, S>(columns: I) -> Result<ColumnLayout, IncomeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(IncomeError::DuplicateColumn(name.clone()));
            }
        }

        let position = |wanted: &'static str| {
            columns
                .iter()
                .position(|name| name == wanted)
                .ok_or(IncomeError::MissingColumn(wanted))
        };

        Ok(ColumnLayout {
            date: position(DATE)?,
            amount: position(AMOUNT)?,
            description: position(DESCRIPTION)?,
            columns,
        })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    fn parse<S: AsRef<str>>(&self, row: usize, fields: &[S]) -> Result<Transaction, IncomeError> {
        if fields.len() != self.columns.len() {
            return Err(IncomeError::MalformedRow {
                row,
                expected: self.columns.len(),
                found: fields.len(),
            });
        }

        let raw_amount = fields[self.amount].as_ref();
        let amount = normalize(raw_amount).map_err(|reason| IncomeError::InvalidAmount {
            row,
            raw: raw_amount.to_owned(),
            reason,
        })?;

        let passthrough = fields
            .iter()
            .enumerate()
            .filter(|(i, _)| ![self.date, self.amount, self.description].contains(i))
            .map(|(_, field)| field.as_ref().to_owned())
            .collect();

        Ok(Transaction {
            date: fields[self.date].as_ref().to_owned(),
            amount,
            description: fields[self.description].as_ref().to_owned(),
            passthrough,
        })
    }
}

impl Default for ColumnLayout {
    /// `date, amount, opaque_a, opaque_b, description`, the layout of the bank export.
    fn default() -> Self {
        ColumnLayout {
            columns: [DATE, AMOUNT, "opaque_a", "opaque_b", DESCRIPTION]
                .into_iter()
                .map(String::from)
                .collect(),
            date: 0,
            amount: 1,
            description: 4,
        }
    }
}

/// Lazily parses raw rows into transactions. Rows are numbered from 1.
pub struct Records<'a, I> {
    rows: I,
    layout: &'a ColumnLayout,
    row: usize,
}

impl<I> Iterator for Records<'_, I>
where
    I: Iterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: AsRef<str>,
{
    type Item = Result<Transaction, IncomeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let fields: Vec<_> = self.rows.next()?.into_iter().collect();
        self.row += 1;
        Some(self.layout.parse(self.row, &fields))
    }
}

/// Wraps raw rows, each a sequence of fields in `layout` order, into a lazy
/// stream of transactions. The caller decides whether to skip or abort on errors.
pub fn parse_records<I>(rows: I, layout: &ColumnLayout) -> Records<'_, I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: AsRef<str>,
{
    Records {
        rows: rows.into_iter(),
        layout,
        row: 0,
    }
}
