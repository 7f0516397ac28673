//! Read-only boundary to a structure database (PDB entries).
//!
//! A [`StructureSource`] turns a validated 4-character [`StructureId`] into a
//! [`StructureRecord`]. Sources are collaborators: any failure they report is
//! degraded to "unavailable" by [`fetch_or_unavailable`], while a malformed
//! identifier is rejected before a source is ever asked.
//!
//! [`DirectorySource`] serves entry JSON documents saved as `<id>.json`.
//!
//! ```
//! use motifscan::structure::{StructureId, StructureRecord};
//! let id: StructureId = "1BNA".parse().unwrap();
//! assert_eq!(id.as_str(), "1bna");
//! let rec = StructureRecord::from_entry_json(&id, r#"{
//!     "struct": { "title": "B-DNA dodecamer" },
//!     "refine": [{ "ls_d_res_high": 1.9, "ls_R_factor_R_work": 0.178 }]
//! }"#).unwrap();
//! assert_eq!(rec.resolution, Some(1.9));
//! assert!(rec.method.is_none());
//! ```
use core::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A PDB identifier: a digit `1-9` followed by three alphanumerics,
/// stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StructureId(String);

impl StructureId {
    pub fn parse(raw: &str) -> Result<Self> {
        let id = raw.trim();
        let bytes = id.as_bytes();
        let well_formed = bytes.len() == 4
            && matches!(bytes[0], b'1'..=b'9')
            && bytes[1..].iter().all(u8::is_ascii_alphanumeric);
        if !well_formed {
            return Err(Error::InvalidStructureId(format!(
                "{id:?} is not a 4-character PDB identifier (e.g. 1bna)"
            )));
        }
        Ok(StructureId(id.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StructureId {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        StructureId::parse(s)
    }
}

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Summary of one entry. Fields absent from the payload are `None`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StructureRecord {
    pub id: StructureId,
    pub title: Option<String>,
    pub method: Option<String>,
    /// High-resolution limit, in Ångström.
    pub resolution: Option<f64>,
    /// Working R-factor.
    pub r_value: Option<f64>,
    pub deposition_date: Option<String>,
    pub release_date: Option<String>,
}

impl StructureRecord {
    /// Build a record from an entry document.
    ///
    /// Accepts both the flat layout (`experiment.method`, `deposit_date`,
    /// `release_date`) and the RCSB entry layout (`exptl[0].method`,
    /// `rcsb_accession_info.*`). Arrays along a path contribute their first
    /// element. A payload that is not a JSON object is an
    /// [`Error::ExternalService`].
    pub fn from_entry_json(id: &StructureId, payload: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(payload)
            .map_err(|e| Error::ExternalService(format!("malformed entry payload for {id}: {e}")))?;
        if !doc.is_object() {
            return Err(Error::ExternalService(format!(
                "malformed entry payload for {id}: expected a JSON object"
            )));
        }

        let text = |paths: &[&[&str]]| paths.iter().find_map(|p| lookup(&doc, p)).and_then(as_text);
        let number = |path: &[&str]| lookup(&doc, path).and_then(as_number);

        Ok(StructureRecord {
            id: id.clone(),
            title: text(&[&["struct", "title"]]),
            method: text(&[&["exptl", "method"], &["experiment", "method"]]),
            resolution: number(&["refine", "ls_d_res_high"]),
            r_value: number(&["refine", "ls_R_factor_R_work"]),
            deposition_date: text(&[&["rcsb_accession_info", "deposit_date"], &["deposit_date"]]),
            release_date: text(&[&["rcsb_accession_info", "initial_release_date"], &["release_date"]]),
        })
    }
}

fn lookup<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let first = |v: &'a Value| match v {
        Value::Array(items) => items.first(),
        other => Some(other),
    };
    path.iter()
        .try_fold(doc, |v, key| first(v)?.get(key))
        .and_then(first)
        .filter(|v| !v.is_null())
}

fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl fmt::Display for StructureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_na<T: fmt::Display>(v: &Option<T>) -> String {
            v.as_ref().map_or_else(|| "N/A".to_string(), ToString::to_string)
        }
        writeln!(f, "PDB ID: {}", self.id)?;
        writeln!(f, "Title: {}", or_na(&self.title))?;
        writeln!(f, "Experimental method: {}", or_na(&self.method))?;
        match self.resolution {
            Some(r) => writeln!(f, "Resolution: {r} Å")?,
            None => writeln!(f, "Resolution: N/A")?,
        }
        writeln!(f, "R-value: {}", or_na(&self.r_value))?;
        writeln!(f, "Deposited: {}", or_na(&self.deposition_date))?;
        write!(f, "Released: {}", or_na(&self.release_date))
    }
}

/// Anything that can look up structure entries.
pub trait StructureSource {
    fn fetch(&self, id: &StructureId) -> Result<StructureRecord>;
}

/// Validate `raw_id`, then ask `source`. Source failures are logged and
/// yield `Ok(None)`; a malformed identifier is returned as an error.
pub fn fetch_or_unavailable<S>(source: &S, raw_id: &str) -> Result<Option<StructureRecord>>
where
    S: StructureSource + ?Sized,
{
    let id = StructureId::parse(raw_id)?;
    match source.fetch(&id) {
        Ok(rec) => Ok(Some(rec)),
        Err(e) => {
            warn!(id = %id, error = %e, "structure entry unavailable");
            Ok(None)
        }
    }
}

/// Entry documents stored as `<dir>/<id>.json`.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        DirectorySource { dir: dir.into() }
    }
}

impl StructureSource for DirectorySource {
    fn fetch(&self, id: &StructureId) -> Result<StructureRecord> {
        let path = self.dir.join(format!("{id}.json"));
        if !path.is_file() {
            return Err(Error::NotFound {
                what: "Structure entry",
                key: id.to_string(),
                available: format!("entries saved under {}", self.dir.display()),
            });
        }
        let payload = std::fs::read_to_string(&path)
            .map_err(|e| Error::ExternalService(format!("reading {}: {e}", path.display())))?;
        debug!(path = %path.display(), "structure entry read");
        StructureRecord::from_entry_json(id, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Canned {
        payload: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl Canned {
        fn new(payload: Option<&'static str>) -> Self {
            Canned { payload, calls: Cell::new(0) }
        }
    }

    impl StructureSource for Canned {
        fn fetch(&self, id: &StructureId) -> Result<StructureRecord> {
            self.calls.set(self.calls.get() + 1);
            match self.payload {
                Some(p) => StructureRecord::from_entry_json(id, p),
                None => Err(Error::ExternalService("connection refused".into())),
            }
        }
    }

    const FLAT: &str = r#"{
        "struct": { "title": "Structure of a B-DNA dodecamer" },
        "experiment": { "method": "X-RAY DIFFRACTION" },
        "refine": { "ls_d_res_high": "1.9", "ls_R_factor_R_work": 0.178 },
        "deposit_date": "1981-01-26",
        "release_date": "1981-04-23"
    }"#;

    #[test]
    fn ids_are_validated_and_lowercased() {
        assert_eq!(StructureId::parse(" 1BNA ").unwrap().as_str(), "1bna");
        for bad in ["", "1bn", "1bna5", "abcd", "0abc", "1b-a"] {
            assert!(
                matches!(StructureId::parse(bad), Err(Error::InvalidStructureId(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn flat_payload_fills_every_field() {
        let id = StructureId::parse("1bna").unwrap();
        let rec = StructureRecord::from_entry_json(&id, FLAT).unwrap();
        assert_eq!(rec.title.as_deref(), Some("Structure of a B-DNA dodecamer"));
        assert_eq!(rec.method.as_deref(), Some("X-RAY DIFFRACTION"));
        assert_eq!(rec.resolution, Some(1.9));
        assert_eq!(rec.r_value, Some(0.178));
        assert_eq!(rec.deposition_date.as_deref(), Some("1981-01-26"));
        assert_eq!(rec.release_date.as_deref(), Some("1981-04-23"));
        assert!(rec.to_string().contains("Resolution: 1.9 Å"));
    }

    #[test]
    fn rcsb_layout_and_missing_fields() {
        let id = StructureId::parse("4hhb").unwrap();
        let rec = StructureRecord::from_entry_json(
            &id,
            r#"{ "exptl": [{ "method": "X-RAY DIFFRACTION" }],
                 "rcsb_accession_info": { "deposit_date": "1984-03-07T00:00:00+0000" },
                 "struct": { "title": null } }"#,
        )
        .unwrap();
        assert_eq!(rec.method.as_deref(), Some("X-RAY DIFFRACTION"));
        assert_eq!(rec.deposition_date.as_deref(), Some("1984-03-07T00:00:00+0000"));
        assert!(rec.title.is_none() && rec.resolution.is_none() && rec.release_date.is_none());
        assert!(rec.to_string().contains("Title: N/A"));
    }

    #[test]
    fn non_object_payload_is_an_external_failure() {
        let id = StructureId::parse("1bna").unwrap();
        for bad in ["[1, 2]", "<html>503</html>"] {
            assert!(matches!(
                StructureRecord::from_entry_json(&id, bad),
                Err(Error::ExternalService(_))
            ));
        }
    }

    #[test]
    fn fetch_success_failure_and_malformed_id() {
        let ok = Canned::new(Some(FLAT));
        let rec = fetch_or_unavailable(&ok, "1BNA").unwrap().unwrap();
        assert_eq!(rec.id.as_str(), "1bna");

        let down = Canned::new(None);
        assert!(fetch_or_unavailable(&down, "1bna").unwrap().is_none());
        assert_eq!(down.calls.get(), 1);

        let garbled = Canned::new(Some("not json"));
        assert!(fetch_or_unavailable(&garbled, "1bna").unwrap().is_none());

        let never = Canned::new(Some(FLAT));
        assert!(matches!(fetch_or_unavailable(&never, "bna"), Err(Error::InvalidStructureId(_))));
        assert_eq!(never.calls.get(), 0);
    }

    #[test]
    fn directory_source_reads_saved_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("1bna.json"), FLAT).unwrap();
        std::fs::write(dir.path().join("2xyz.json"), "{").unwrap();
        let src = DirectorySource::new(dir.path());

        let rec = src.fetch(&"1BNA".parse().unwrap()).unwrap();
        assert_eq!(rec.method.as_deref(), Some("X-RAY DIFFRACTION"));
        assert!(matches!(src.fetch(&"3abc".parse().unwrap()), Err(Error::NotFound { .. })));
        assert!(matches!(src.fetch(&"2xyz".parse().unwrap()), Err(Error::ExternalService(_))));
        assert!(fetch_or_unavailable(&src, "3abc").unwrap().is_none());
    }
}
