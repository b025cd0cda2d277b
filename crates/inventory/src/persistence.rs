//! Whole-file JSON persistence for the ledger.
//!
//! The file is a single JSON object of `name -> number`; no envelope,
//! version field or checksum. Writes overwrite in place.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;

use stockledger_core::{LedgerError, LedgerResult, Quantity};

/// Insertion-ordered `name -> quantity` mapping.
pub type Quantities = IndexMap<String, Quantity>;

/// Read a ledger file.
///
/// Returns `Ok(None)` when the file does not exist. Key order follows the
/// document.
pub fn read_quantities(path: impl AsRef<Path>) -> LedgerResult<Option<Quantities>> {
    let path = path.as_ref();

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(LedgerError::persistence(path, e)),
    };

    let quantities: Quantities =
        serde_json::from_str(&raw).map_err(|e| LedgerError::persistence(path, e))?;

    if quantities.keys().any(String::is_empty) {
        return Err(LedgerError::persistence(path, "item name cannot be empty"));
    }

    Ok(Some(quantities))
}

/// Serialize `quantities` with 2-space indentation and overwrite `path`.
pub fn write_quantities(path: impl AsRef<Path>, quantities: &Quantities) -> LedgerResult<()> {
    let path = path.as_ref();
    let body =
        serde_json::to_string_pretty(quantities).map_err(|e| LedgerError::persistence(path, e))?;
    fs::write(path, body).map_err(|e| LedgerError::persistence(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        assert_eq!(read_quantities(dir.path().join("absent.json")).unwrap(), None);
    }

    #[test]
    fn document_order_is_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"zucchini": 1, "apple": 2.5, "mango": -3}"#).unwrap();

        let q = read_quantities(&path).unwrap().unwrap();
        let keys: Vec<_> = q.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zucchini", "apple", "mango"]);
        assert_eq!(q["apple"], Quantity::Float(2.5));
        assert_eq!(q["mango"], Quantity::Int(-3));
    }

    #[test]
    fn writes_pretty_json_with_two_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut q = Quantities::new();
        q.insert("apple".to_string(), Quantity::Int(7));
        q.insert("pear".to_string(), Quantity::Float(1.5));

        write_quantities(&path, &q).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"apple\": 7,\n  \"pear\": 1.5\n}"
        );
    }

    #[test]
    fn fractional_quantities_read_back_bit_for_bit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut q = Quantities::new();
        q.insert("flour".to_string(), Quantity::Float(0.3971022151356808 + 1.0));
        q.insert("sugar".to_string(), Quantity::Float(1.3971022151356807));

        write_quantities(&path, &q).unwrap();
        let loaded = read_quantities(&path).unwrap().unwrap();

        for (name, saved) in &q {
            let (Quantity::Float(saved), Quantity::Float(read)) = (*saved, loaded[name]) else {
                panic!("expected fractional quantity for {name}");
            };
            assert_eq!(saved.to_bits(), read.to_bits(), "{name}: {saved} vs {read}");
        }
    }

    #[test]
    fn rejects_malformed_or_mistyped_documents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        for body in ["{not json", "[1, 2]", r#"{"apple": "ten"}"#, r#"{"": 3}"#] {
            fs::write(&path, body).unwrap();
            let err = read_quantities(&path).unwrap_err();
            assert!(
                matches!(err, LedgerError::Persistence { .. }),
                "expected persistence error for {body:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("inventory.json");
        let err = write_quantities(&path, &Quantities::new()).unwrap_err();
        assert!(matches!(err, LedgerError::Persistence { .. }));
    }
}
