//! Local knowledge store: a JSON mapping from category name to an ordered
//! list of `{ "name", "description" }` entries.
//!
//! The store is loaded once and never mutated. A missing or malformed file
//! can be degraded to an empty store with [`KnowledgeBase::load_or_empty`].
//!
//! ```
//! use motifscan::knowledge::KnowledgeBase;
//! let kb = KnowledgeBase::from_json_str(r#"{
//!     "delivery_systems": [{ "name": "Liposome", "description": "Lipid bilayer vesicle." }]
//! }"#).unwrap();
//! assert_eq!(kb.search("lipid").unwrap().name, "Liposome");
//! ```
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    categories: BTreeMap<String, Vec<KnowledgeEntry>>,
}

impl KnowledgeBase {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let kb = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        info!(path = %path.display(), categories = kb.categories.len(), "knowledge base loaded");
        Ok(kb)
    }

    /// Like [`KnowledgeBase::load`], but any failure yields an empty store.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "knowledge base unavailable; using an empty one");
            Self::default()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn category(&self, name: &str) -> Result<&[KnowledgeEntry]> {
        self.categories.get(name).map(Vec::as_slice).ok_or_else(|| Error::NotFound {
            what: "Knowledge category",
            key: name.to_string(),
            available: self.categories().collect::<Vec<_>>().join(", "),
        })
    }

    /// First entry (categories in name order, entries in file order) whose
    /// name or description contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Option<&KnowledgeEntry> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return None;
        }
        self.categories
            .values()
            .flatten()
            .find(|e| e.name.to_lowercase().contains(&q) || e.description.to_lowercase().contains(&q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KB: &str = r#"{
        "targeting_mechanisms": [
            { "name": "EPR effect", "description": "Passive accumulation in leaky tumor vasculature." }
        ],
        "anticancer_drugs": [
            { "name": "Doxorubicin", "description": "Anthracycline; often delivered in liposomes." },
            { "name": "Cisplatin", "description": "Platinum compound that crosslinks DNA." }
        ]
    }"#;

    #[test]
    fn search_matches_name_or_description() {
        let kb = KnowledgeBase::from_json_str(KB).unwrap();
        assert_eq!(kb.search("CISPLATIN").unwrap().name, "Cisplatin");
        assert_eq!(kb.search("vasculature").unwrap().name, "EPR effect");
        // "anticancer_drugs" sorts first, so its liposome mention wins.
        assert_eq!(kb.search("liposome").unwrap().name, "Doxorubicin");
        assert!(kb.search("hypoxia").is_none());
        assert!(kb.search("  ").is_none());
    }

    #[test]
    fn categories_and_misses() {
        let kb = KnowledgeBase::from_json_str(KB).unwrap();
        assert_eq!(kb.categories().collect::<Vec<_>>(), vec!["anticancer_drugs", "targeting_mechanisms"]);
        assert_eq!(kb.category("anticancer_drugs").unwrap().len(), 2);
        assert!(matches!(kb.category("tumor_microenvironment"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let kb = KnowledgeBase::load_or_empty("/definitely/not/here.json");
        assert!(kb.is_empty());
        assert!(KnowledgeBase::load("/definitely/not/here.json").is_err());
    }
}
