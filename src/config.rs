//! Scan configuration.
//!
//! Defaults reproduce the classic behaviour (±30 nt context window, inputs
//! above 10 000 nt cut to their first 1 000). A JSON file may override any
//! subset of the fields:
//!
//! ```json
//! { "context_radius": 40, "kinds": ["cpg", "stop_codon"] }
//! ```
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::guide::{DEFAULT_CONTEXT_RADIUS, GUIDE_LEN};
use crate::motif::MotifKind;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Half-width of the window searched for PAMs around each site.
    pub context_radius: usize,
    /// Inputs longer than this are truncated before analysis.
    pub max_input_len: usize,
    /// Length kept when truncating.
    pub truncate_to: usize,
    /// Motif kinds to scan for, by name (`cpg`, `stop_codon`, ...).
    pub kinds: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            context_radius: DEFAULT_CONTEXT_RADIUS,
            max_input_len: 10_000,
            truncate_to: 1_000,
            kinds: MotifKind::DEFAULT.iter().map(|k| k.as_str().to_string()).collect(),
        }
    }
}

impl ScanConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Guide length; fixed at [`GUIDE_LEN`] and not read from JSON.
    pub const fn guide_len(&self) -> usize {
        GUIDE_LEN
    }

    /// Parse [`ScanConfig::kinds`]; unknown names are a `NotFound` error.
    pub fn motif_kinds(&self) -> Result<Vec<MotifKind>> {
        self.kinds.iter().map(|k| k.parse()).collect()
    }
}
