use comfy_table::{Cell, CellAlignment, Table};
use rust_decimal::Decimal;

use courier_income::income::{ClassifiedDeposit, ReportView, Transaction};

fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

pub fn found(matched: &[ClassifiedDeposit]) -> String {
    matched
        .iter()
        .map(|deposit| format!("Found matching transaction on {}", deposit.transaction.date))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn summary(view: &ReportView) -> String {
    let mut out = format!("you made {} from food couriering\n", money(view.grand_total));
    if view.exceeds_1099_threshold() {
        out.push_str("You got a 1099, right?");
    } else {
        out.push_str("Tabulate your results with --table and fill out those forms!");
    }
    out
}

fn amount_cell(amount: Decimal) -> Cell {
    Cell::new(format!("{:.2}", amount)).set_alignment(CellAlignment::Right)
}

pub fn table(view: &ReportView) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Amount", "Description", "Date", "Source"]);

    for row in &view.rows {
        table.add_row(vec![
            amount_cell(row.amount),
            Cell::new(&row.description),
            Cell::new(&row.date),
            Cell::new(&row.source),
        ]);
    }

    for source in &view.per_source {
        table.add_row(vec![
            amount_cell(source.total),
            Cell::new(format!("{} total", source.name)),
            Cell::new(""),
            Cell::new(""),
        ]);
    }

    table.add_row(vec![
        amount_cell(view.grand_total),
        Cell::new("TOTAL"),
        Cell::new(""),
        Cell::new(""),
    ]);

    table.to_string()
}

pub fn unmatched(transactions: &[Transaction]) -> String {
    let mut out = format!("{} deposit(s) matched no income source:", transactions.len());
    for transaction in transactions {
        out.push_str(&format!(
            "\n  {}  {:>10.2}  {}",
            transaction.date, transaction.amount, transaction.description
        ));
    }
    out
}
