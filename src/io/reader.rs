use crate::{
    common::{event::AppEvent, money::Money},
    domain::{phase::LifecyclePhase, transaction::Transaction},
};
use chrono::{DateTime, Utc};
use std::{io::Read, str::FromStr};

const DEFAULT_TITLE: &str = "Added Money";

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the script headers. Columns that
/// do not apply to an event kind are left empty.
struct CsvRow {
    #[serde(default)]
    time: Option<i64>,
    event: String,
    #[serde(default)]
    phase: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// Reads app events from a replay script.
///
/// Supported headers: `time,event,phase,id,amount,date,title`.
/// Event kinds are case-insensitive: `phase`, `signin`, `signout`, `tx`, `clear`.
/// `phase`, `signin` and `signout` take an optional `time` (epoch ms); rows
/// without one are stamped with wall-clock time when processed. `tx` needs `id` and
/// `amount`; its `date` (RFC 3339) falls back to `time` and its `title` to
/// "Added Money".
///
/// # Examples
///
/// ```
/// use wallet_core::io::reader::read_events;
/// use wallet_core::common::event::AppEvent;
/// use wallet_core::domain::phase::LifecyclePhase;
/// use csv::ReaderBuilder;
///
/// let data = "time,event,phase,id,amount,date,title\n\
/// 1000,phase,background,,,,\n\
/// ,tx,,a,5.00,2024-05-01T12:00:00Z,Added Money\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_events(&mut rdr).collect();
///
/// assert!(matches!(events[0], Ok(AppEvent::Lifecycle { at: Some(1000), phase: LifecyclePhase::Background })));
/// assert!(matches!(&events[1], Ok(AppEvent::Transaction(tx)) if tx.id == "a"));
/// ```
pub fn read_events<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<AppEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.event.trim().to_ascii_lowercase();

        match kind.as_str() {
            "phase" => {
                let phase = row
                    .phase
                    .as_deref()
                    .ok_or_else(|| "phase event missing phase".to_string())?
                    .parse::<LifecyclePhase>()?;
                Ok(AppEvent::Lifecycle { at: row.time, phase })
            }
            "signin" => Ok(AppEvent::SignIn { at: row.time }),
            "signout" => Ok(AppEvent::SignOut { at: row.time }),
            "tx" => parse_transaction(row).map(AppEvent::Transaction),
            "clear" => Ok(AppEvent::Clear),
            other => Err(format!("unknown event type: {other}")),
        }
    })
}

fn parse_transaction(row: CsvRow) -> Result<Transaction, String> {
    let id = row
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| "tx missing id".to_string())?;
    let amt_str = row
        .amount
        .ok_or_else(|| format!("tx missing amount for id {id}"))?;
    let amount = Money::from_str(&amt_str).map_err(|e| format!("tx {id}: {e}"))?;

    let date = match (row.date, row.time) {
        (Some(date), _) => DateTime::parse_from_rfc3339(date.trim())
            .map_err(|e| format!("tx {id}: invalid date {date}: {e}"))?
            .with_timezone(&Utc),
        (None, Some(at)) => DateTime::<Utc>::from_timestamp_millis(at)
            .ok_or_else(|| format!("tx {id}: time {at} out of range"))?,
        (None, None) => return Err(format!("tx missing date for id {id}")),
    };

    let title = row
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    Ok(Transaction::new(id, amount, date, title))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const HEADER: &str = "time,event,phase,id,amount,date,title\n";

    fn collect_events(body: &str) -> Vec<Result<AppEvent, String>> {
        let input = format!("{HEADER}{body}");
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input.as_bytes());
        read_events(&mut reader).collect()
    }

    #[test]
    fn parses_all_supported_event_kinds() {
        let events = collect_events(
            "0,signin,,,,,\n\
             10,phase,inactive,,,,\n\
             20,PHASE,Background,,,,\n\
             ,tx,,a,500,2024-05-01T12:00:00Z,Salary\n\
             ,clear,,,,,\n\
             30,signout,,,,,\n",
        );

        assert_eq!(events.len(), 6);
        assert_eq!(events[0], Ok(AppEvent::SignIn { at: Some(0) }));
        assert_eq!(
            events[1],
            Ok(AppEvent::Lifecycle { at: Some(10), phase: LifecyclePhase::Inactive })
        );
        assert_eq!(
            events[2],
            Ok(AppEvent::Lifecycle { at: Some(20), phase: LifecyclePhase::Background })
        );
        assert_eq!(
            events[3],
            Ok(AppEvent::Transaction(Transaction::new(
                "a",
                Money::from_major(500),
                Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
                "Salary",
            )))
        );
        assert_eq!(events[4], Ok(AppEvent::Clear));
        assert_eq!(events[5], Ok(AppEvent::SignOut { at: Some(30) }));
    }

    #[test]
    fn tx_defaults_date_to_time_and_title() {
        let events = collect_events("1714564800000,tx,,b,-2.5,,\n");

        match &events[0] {
            Ok(AppEvent::Transaction(tx)) => {
                assert_eq!(tx.amount, Money::from_minor(-250));
                assert_eq!(tx.date, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
                assert_eq!(tx.title, "Added Money");
            }
            other => panic!("unexpected tx event: {other:?}"),
        }
    }

    #[test]
    fn reports_missing_amount_error() {
        let events = collect_events(",tx,,a,,2024-05-01T12:00:00Z,\n");
        assert_eq!(events[0], Err("tx missing amount for id a".to_string()));
    }

    #[test]
    fn time_is_optional_for_shell_events() {
        let events = collect_events(",phase,active,,,,\n,signin,,,,,\n,phase,,,,,\n");
        assert_eq!(
            events[0],
            Ok(AppEvent::Lifecycle { at: None, phase: LifecyclePhase::Active })
        );
        assert_eq!(events[1], Ok(AppEvent::SignIn { at: None }));
        assert_eq!(events[2], Err("phase event missing phase".to_string()));
    }

    #[test]
    fn reports_unknown_phase_and_event() {
        let events = collect_events("5,phase,asleep,,,,\n5,refund,,,,,\n");
        assert_eq!(events[0], Err("unknown lifecycle phase: asleep".to_string()));
        assert_eq!(events[1], Err("unknown event type: refund".to_string()));
    }
}
