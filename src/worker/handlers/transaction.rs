use crate::domain::{ledger::Ledger, transaction::Transaction};

pub fn handle(ledger: &mut Ledger, tx: Transaction) {
    log::debug!("appending transaction {} ({})", tx.id, tx.amount);
    ledger.run_transaction(tx);
}

pub fn clear(ledger: &mut Ledger) {
    log::debug!("clearing {} transactions", ledger.len());
    ledger.clear_transactions();
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;

    use super::{clear, handle};
    use crate::{
        common::money::Money,
        domain::{ledger::Ledger, transaction::Transaction},
    };

    #[test]
    fn handle_appends_to_the_end() {
        let mut ledger = Ledger::new();
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        handle(
            &mut ledger,
            Transaction::new("a", Money::from_str("500").unwrap(), date, "Added Money"),
        );
        handle(
            &mut ledger,
            Transaction::new("b", Money::from_str("-200").unwrap(), date, "Added Money"),
        );

        let ids: Vec<&str> = ledger.transactions().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(ledger.balance(), Money::from_major(300));

        clear(&mut ledger);
        assert!(ledger.is_empty());
        assert_eq!(ledger.balance(), Money::zero());
    }
}
