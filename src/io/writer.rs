use std::io::Write;

use chrono::SecondsFormat;

use crate::{
    common::money::Money,
    domain::{ledger::Ledger, route::NavigationRecord},
};

#[derive(serde::Serialize)]
/// Internal CSV output row for one ledger entry.
///
/// Headers written (in this order): `id,date,title,amount,balance`.
struct TransactionRow<'a> {
    id: &'a str,
    date: String,
    title: &'a str,
    amount: String,
    balance: String,
}

#[derive(serde::Serialize)]
struct NavigationRow {
    time: i64,
    route: &'static str,
}

/// Writes the ledger in insertion order, with the running balance after each entry.
///
/// Dates are RFC 3339 in UTC; money is formatted with exactly 2 decimal places.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use wallet_core::common::money::Money;
/// use wallet_core::domain::{ledger::Ledger, transaction::Transaction};
/// use wallet_core::io::writer::write_transactions;
///
/// let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
/// let mut ledger = Ledger::new();
/// ledger.run_transaction(Transaction::new("a", Money::from_major(500), date, "Added Money"));
/// ledger.run_transaction(Transaction::new("b", Money::from_major(-200), date, "Added Money"));
///
/// let mut out = Vec::new();
/// write_transactions(&mut out, &ledger).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("id,date,title,amount,balance\n"));
/// assert!(s.ends_with("b,2024-05-01T12:00:00Z,Added Money,-200.00,300.00\n"));
/// ```
pub fn write_transactions<W: Write>(writer: W, ledger: &Ledger) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    if ledger.is_empty() {
        wtr.write_record(["id", "date", "title", "amount", "balance"])?;
    }

    let mut running = Money::zero();
    for tx in ledger.transactions() {
        running += tx.amount;
        wtr.serialize(TransactionRow {
            id: &tx.id,
            date: tx.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            title: &tx.title,
            amount: tx.amount.to_string_2dp(),
            balance: running.to_string_2dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes every stack replacement as `time,route`.
pub fn write_navigations<W: Write>(
    writer: W,
    navigations: &[NavigationRecord],
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    if navigations.is_empty() {
        wtr.write_record(["time", "route"])?;
    }

    for nav in navigations {
        wtr.serialize(NavigationRow {
            time: nav.at,
            route: nav.route.path(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
