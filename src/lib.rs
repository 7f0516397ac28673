#![forbid(unsafe_code)]
//! # motifscan
//!
//! Scan DNA for short notable **motifs** (CpG, tandem repeats,
//! microsatellites, recurring blocks, stop codons, splice dinucleotides) and
//! propose toy **guide-RNA candidates** next to `NGG` PAM motifs.
//!
//! ## Highlights
//! - **Pure core**: [`scan`] and [`candidates_for_site`] are plain functions
//!   over an in-memory [`Sequence`]; they return structured records and do no IO.
//! - **One matcher table**: every [`MotifKind`] maps to a single
//!   [`detect::Matcher`] variant (literal set, repeat run, recurring block).
//! - **Reproducible synthesis**: the demo generators in [`synth`] take the
//!   random source as a parameter.
//! - **Collaborator seams**: a viewer ([`viewer::HighlightSink`]) and a
//!   structure database ([`structure::StructureSource`]) sit behind traits;
//!   structure lookups degrade to "unavailable" instead of failing.
//! - **Embedded data**: a small tumor gene catalog ([`genes`]) lives in the
//!   binary as `&'static str` constants.
//!
//! ## Examples
//! ```rust
//! use motifscan::{candidates_for_site, normalize, scan, MotifKind};
//!
//! let seq = normalize("ATGCGTAAGGCGCGATCGATCGGGCGTAAGCTAGCTGACGTACGTAGGCGATCGATCG").unwrap();
//! let sites = scan(&seq);
//! let stop = sites.iter().find(|s| s.kind == MotifKind::StopCodon).unwrap();
//! assert_eq!((stop.position, stop.matched.as_str()), (5, "TAA"));
//!
//! let guides = candidates_for_site(&seq, stop, 30);
//! assert_eq!(guides[0].guide, "ATGCGTAAGGCGCGATCGAT");
//! assert!((0.0..=100.0).contains(&guides[0].gc_content));
//! ```
//!
//! ## Version
//! See [`VERSION`].

use std::sync::OnceLock;

pub mod config;
pub mod detect;
pub mod error;
pub mod genes;
pub mod guide;
pub mod knowledge;
pub mod motif;
pub mod report;
pub mod seqio;
pub mod sequence;
pub mod structure;
pub mod synth;
pub mod viewer;
pub mod data {
    pub mod genes;
}

pub use error::{Error, Result};
pub use guide::{candidates_for_site, design_guides, SiteGuides, DEFAULT_CONTEXT_RADIUS, GUIDE_LEN};
pub use motif::{BindingAffinity, GuideCandidate, MotifKind, MotifSite, SyntheticPamSite};
pub use report::{analyze, pam_report, Analysis, PamReport};
pub use sequence::{gc_content, normalize, Sequence};

fn default_scanner() -> &'static detect::Scanner {
    static SCANNER: OnceLock<detect::Scanner> = OnceLock::new();
    SCANNER.get_or_init(detect::Scanner::new)
}

/// Scan with the default motif table ([`MotifKind::DEFAULT`]).
///
/// Sites are sorted by position; sites of different kinds at the same
/// position appear in [`MotifKind`] declaration order.
pub fn scan(seq: &Sequence) -> Vec<MotifSite> {
    default_scanner().scan(seq)
}

/// [`normalize`] then [`scan`]; validation errors are returned unchanged.
///
/// # Examples
/// ```
/// assert!(motifscan::scan_text("ATXG").is_err());
/// assert_eq!(motifscan::scan_text("cgcg").unwrap()[0].matched, "CG");
/// ```
pub fn scan_text(raw: &str) -> Result<Vec<MotifSite>> {
    Ok(scan(&normalize(raw)?))
}

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpg_pairs_in_cgcg() {
        let sites = scan_text("CGCG").unwrap();
        let cpg: Vec<_> = sites.iter().filter(|s| s.kind == MotifKind::CpG).map(|s| s.position).collect();
        assert_eq!(cpg, vec![0, 2]);
    }

    #[test]
    fn invalid_text_propagates() {
        assert!(matches!(scan_text("   "), Err(Error::InvalidSequence(_))));
    }
}
