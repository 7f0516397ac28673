//! Core record types: **motif kinds**, **sites**, **guide candidates**.
//!
//! All of these are plain owned values produced fresh by each scan; nothing
//! here holds references back into the scanned sequence.
use core::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Category of motif recognised by the scanner.
///
/// The declaration order is the secondary sort key when several kinds start
/// at the same position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotifKind {
    /// CpG dinucleotide (`CG`), a frequent methylation/mutation site.
    CpG,
    /// Run of three or more identical bases.
    TandemRepeat,
    /// Run of five or more identical bases.
    Microsatellite,
    /// Block of four or more bases that recurs later in the sequence.
    Palindromic,
    /// `TAA`, `TAG` or `TGA`.
    StopCodon,
    /// Canonical splice donor/acceptor dinucleotides `GT` / `AG`.
    SpliceSite,
    /// `CGG` / `TGG` codons, used for tumor gene hotspot annotation.
    MutationHotspot,
}

impl MotifKind {
    /// Every kind, in enumeration order.
    pub const ALL: [MotifKind; 7] = [
        MotifKind::CpG,
        MotifKind::TandemRepeat,
        MotifKind::Microsatellite,
        MotifKind::Palindromic,
        MotifKind::StopCodon,
        MotifKind::SpliceSite,
        MotifKind::MutationHotspot,
    ];

    /// Kinds scanned by default; `MutationHotspot` is opt-in.
    pub const DEFAULT: [MotifKind; 6] = [
        MotifKind::CpG,
        MotifKind::TandemRepeat,
        MotifKind::Microsatellite,
        MotifKind::Palindromic,
        MotifKind::StopCodon,
        MotifKind::SpliceSite,
    ];

    /// Stable machine-readable name (`cpg`, `tandem_repeat`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            MotifKind::CpG => "cpg",
            MotifKind::TandemRepeat => "tandem_repeat",
            MotifKind::Microsatellite => "microsatellite",
            MotifKind::Palindromic => "palindromic",
            MotifKind::StopCodon => "stop_codon",
            MotifKind::SpliceSite => "splice_site",
            MotifKind::MutationHotspot => "mutation_hotspot",
        }
    }

    /// Human-readable label for reports.
    pub fn label(self) -> &'static str {
        match self {
            MotifKind::CpG => "CpG",
            MotifKind::TandemRepeat => "Tandem repeat",
            MotifKind::Microsatellite => "Microsatellite",
            MotifKind::Palindromic => "Palindromic",
            MotifKind::StopCodon => "Stop codon",
            MotifKind::SpliceSite => "Splice site",
            MotifKind::MutationHotspot => "Mutation hotspot",
        }
    }
}

impl fmt::Display for MotifKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MotifKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        MotifKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str().replace('_', "") == key)
            .ok_or_else(|| Error::NotFound {
                what: "Motif kind",
                key: s.to_string(),
                available: MotifKind::ALL.map(MotifKind::as_str).join(", "),
            })
    }
}

/// One motif occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MotifSite {
    pub kind: MotifKind,
    /// Zero-based start offset in the scanned sequence.
    pub position: usize,
    /// The exact matched substring.
    pub matched: String,
}

impl MotifSite {
    /// End offset (exclusive).
    pub fn end(&self) -> usize {
        self.position + self.matched.len()
    }
}

/// Coarse binding prediction from guide GC content.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingAffinity {
    Low,
    Moderate,
    High,
}

impl BindingAffinity {
    /// Below 30 % is low, above 70 % is high, anything in between moderate.
    pub fn from_gc(gc_percent: f64) -> Self {
        if gc_percent < 30.0 {
            BindingAffinity::Low
        } else if gc_percent > 70.0 {
            BindingAffinity::High
        } else {
            BindingAffinity::Moderate
        }
    }
}

impl fmt::Display for BindingAffinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BindingAffinity::Low => "Low binding affinity",
            BindingAffinity::Moderate => "Moderate binding affinity",
            BindingAffinity::High => "High binding affinity",
        };
        f.write_str(s)
    }
}

/// A 20-nt guide immediately upstream of an `NGG` PAM.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GuideCandidate {
    pub guide: String,
    /// Absolute start of the PAM; the guide spans `pam_position - 20 .. pam_position`.
    pub pam_position: usize,
    pub pam: String,
    pub gc_content: f64,
}

impl GuideCandidate {
    pub fn guide_start(&self) -> usize {
        self.pam_position - self.guide.len()
    }

    pub fn binding(&self) -> BindingAffinity {
        BindingAffinity::from_gc(self.gc_content)
    }

    pub fn off_target_variants(&self) -> Vec<String> {
        off_target_variants(&self.guide)
    }
}

/// Single-mismatch variants of `guide`: position `j` is replaced by `A`, or
/// by `T` when it already was `A`.
///
/// # Examples
/// ```
/// let v = motifscan::motif::off_target_variants("AC");
/// assert_eq!(v, vec!["TC".to_string(), "AA".to_string()]);
/// ```
pub fn off_target_variants(guide: &str) -> Vec<String> {
    let bytes = guide.as_bytes();
    (0..bytes.len())
        .map(|j| {
            let mut v = bytes.to_vec();
            v[j] = if v[j] == b'A' { b'T' } else { b'A' };
            String::from_utf8_lossy(&v).into_owned()
        })
        .collect()
}

/// A randomly drawn demonstration PAM/guide pair attached to a 20-nt window.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SyntheticPamSite {
    pub position: usize,
    pub pam: String,
    pub guide: String,
    pub gc_content: f64,
}

impl SyntheticPamSite {
    pub fn binding(&self) -> BindingAffinity {
        BindingAffinity::from_gc(self.gc_content)
    }
}
