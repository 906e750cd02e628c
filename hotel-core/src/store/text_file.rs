//! Comma-delimited reservation file
//!
//! One record per line: `guestName,roomNumber,category,amountPaid`.
//! No header and no escaping, so a guest name must never contain a comma.
//! Every save rewrites the whole file in place (no temp file + rename), so
//! a crash mid-write can leave it truncated.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::str;
use tracing::{debug, info, warn};

use super::{LoadError, MalformedLinePolicy, ReservationRecord, ReservationStore};
use crate::error::StoreError;
use crate::reservation::format_amount;

const FIELD_COUNT: usize = 4;

#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
    policy: MalformedLinePolicy,
}

impl TextFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            policy: MalformedLinePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MalformedLinePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl ReservationStore for TextFileStore {
    fn load(&self) -> Result<Vec<ReservationRecord>, LoadError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no reservation file at {:?}, starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(LoadError::new(Vec::new(), e.into())),
        };

        let records = parse_records(&content, self.policy)?;
        info!("loaded {} reservations from {:?}", records.len(), self.path);
        Ok(records)
    }

    fn save(&mut self, records: &[ReservationRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content: String = records.iter().map(format_record).collect();
        fs::write(&self.path, content)?;

        debug!("saved {} reservations to {:?}", records.len(), self.path);
        Ok(())
    }
}

fn format_record(record: &ReservationRecord) -> String {
    format!(
        "{},{},{},{}\n",
        record.guest_name,
        record.room_number,
        record.category,
        format_amount(record.amount_paid)
    )
}

/// Parse raw file bytes line by line. Lines are decoded one at a time so a
/// bad encoding only affects its own line.
fn parse_records(
    content: &[u8],
    policy: MalformedLinePolicy,
) -> Result<Vec<ReservationRecord>, LoadError> {
    let mut records = Vec::new();

    for (index, raw) in content.split(|&b| b == b'\n').enumerate() {
        let line_no = index + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        let parsed = str::from_utf8(raw)
            .map_err(|e| format!("not valid UTF-8: {}", e))
            .and_then(|line| {
                if line.trim().is_empty() {
                    Ok(None)
                } else {
                    parse_line(line).map(Some)
                }
            });

        match parsed {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(reason) => match policy {
                MalformedLinePolicy::Abort => {
                    return Err(LoadError::new(
                        records,
                        StoreError::Malformed { line: line_no, reason },
                    ));
                }
                MalformedLinePolicy::Skip => {
                    warn!("skipping malformed reservation on line {}: {}", line_no, reason);
                }
            },
        }
    }

    Ok(records)
}

fn parse_line(line: &str) -> Result<ReservationRecord, String> {
    let mut fields: Vec<&str> = line.split(',').collect();
    // trailing empty fields carry nothing
    while fields.len() > FIELD_COUNT && fields.last() == Some(&"") {
        fields.pop();
    }
    if fields.len() != FIELD_COUNT {
        return Err(format!("expected {} fields, found {}", FIELD_COUNT, fields.len()));
    }

    let room_number = fields[1]
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid room number {:?}: {}", fields[1], e))?;
    let amount_paid = fields[3]
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid amount {:?}: {}", fields[3], e))?;

    Ok(ReservationRecord {
        guest_name: fields[0].to_string(),
        room_number,
        category: fields[2].to_string(),
        amount_paid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(guest: &str, room: i64, category: &str, amount: f64) -> ReservationRecord {
        ReservationRecord {
            guest_name: guest.to_string(),
            room_number: room,
            category: category.to_string(),
            amount_paid: amount,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = TextFileStore::new(dir.path().join("reservations.txt"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_writes_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reservations.txt");
        let mut store = TextFileStore::new(&path);

        store
            .save(&[record("Alice", 101, "Standard", 100.0), record("Bob", 301, "Suite", 350.0)])
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Alice,101,Standard,100.0\nBob,301,Suite,350.0\n");
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reservations.txt");
        let mut store = TextFileStore::new(&path);

        store.save(&[record("Alice", 101, "Standard", 100.0)]).unwrap();
        store.save(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("reservations.txt");
        let mut store = TextFileStore::new(&path);

        store.save(&[record("Alice", 101, "Standard", 100.0)]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_parse_accepts_both_amount_formats() {
        let records = parse_records(b"Alice,101,Standard,100.0\nBob,201,Deluxe,200\n", MalformedLinePolicy::Abort)
            .unwrap();
        assert_eq!(
            records,
            vec![record("Alice", 101, "Standard", 100.0), record("Bob", 201, "Deluxe", 200.0)]
        );
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_crlf() {
        let records = parse_records(b"Alice,101,Standard,100.0\r\n\r\nBob,102,Standard,100.0\r\n", MalformedLinePolicy::Abort)
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].category, "Standard");
    }

    #[test]
    fn test_abort_keeps_records_before_bad_line() {
        let content = b"Alice,101,Standard,100.0\nBob,abc,Standard,100.0\nCarol,201,Deluxe,200.0\n";
        let err = parse_records(content, MalformedLinePolicy::Abort).unwrap_err();

        assert_eq!(err.recovered, vec![record("Alice", 101, "Standard", 100.0)]);
        assert!(matches!(err.source, StoreError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_skip_continues_past_bad_lines() {
        let content = b"Alice,101,Standard,100.0\nSmith, John,102,Standard,100.0\nBob,201\nCarol,201,Deluxe,lots\nDave,301,Suite,350.0\n";
        let records = parse_records(content, MalformedLinePolicy::Skip).unwrap();

        let guests: Vec<&str> = records.iter().map(|r| r.guest_name.as_str()).collect();
        assert_eq!(guests, vec!["Alice", "Dave"]);
    }

    #[test]
    fn test_comma_in_guest_name_is_malformed() {
        let err = parse_line("Smith, John,101,Standard,100.0").unwrap_err();
        assert!(err.contains("expected 4 fields, found 5"));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reservations.txt");
        let saved = vec![record("Alice", 101, "Standard", 100.0), record("Eve", 202, "Deluxe", 199.99)];

        TextFileStore::new(&path).save(&saved).unwrap();
        let loaded = TextFileStore::new(&path).load().unwrap();

        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_invalid_utf8_line_aborts_after_earlier_records() {
        let content = b"Alice,101,Standard,100.0\nJos\xe9,201,Deluxe,200.0\nCarol,301,Suite,350.0\n";
        let err = parse_records(content, MalformedLinePolicy::Abort).unwrap_err();

        assert_eq!(err.recovered, vec![record("Alice", 101, "Standard", 100.0)]);
        match err.source {
            StoreError::Malformed { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("UTF-8"));
            }
            other => panic!("expected a malformed line, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reservations.txt");
        fs::write(&path, b"Alice,101,Standard,100.0\nJos\xe9,201,Deluxe,200.0\nCarol,301,Suite,350.0\n")
            .unwrap();

        let records = TextFileStore::new(&path)
            .with_policy(MalformedLinePolicy::Skip)
            .load()
            .unwrap();

        assert_eq!(
            records,
            vec![record("Alice", 101, "Standard", 100.0), record("Carol", 301, "Suite", 350.0)]
        );
    }

    #[test]
    fn test_negative_room_number_is_parsed() {
        let records = parse_records(
            b"Alice,101,Standard,100.0\nGhost,-1,Standard,100.0\nCarol,301,Suite,350.0\n",
            MalformedLinePolicy::Abort,
        )
        .unwrap();

        let rooms: Vec<i64> = records.iter().map(|r| r.room_number).collect();
        assert_eq!(rooms, vec![101, -1, 301]);
    }

    #[test]
    fn test_trailing_empty_fields_are_ignored() {
        let record_line = parse_line("Alice,101,Standard,100.0,,").unwrap();
        assert_eq!(record_line, record("Alice", 101, "Standard", 100.0));

        let err = parse_line("Alice,101,Standard,100.0, ").unwrap_err();
        assert!(err.contains("expected 4 fields, found 5"));
    }
}
