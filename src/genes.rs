//! Registry of embedded **tumor gene** sequences.
//!
//! Records are `'static` constants (see [`crate::data::genes`]); lookups are
//! case-insensitive on the gene symbol and a miss is [`Error::NotFound`].
//!
//! # Examples
//! ```
//! let kras = motifscan::genes::get_gene("kras").unwrap();
//! assert!(kras.common_mutations.contains(&"G12D"));
//! assert!(motifscan::genes::get_gene("MYC").is_err());
//! ```
use serde::Serialize;

use crate::data::genes::GENES;
use crate::detect::Scanner;
use crate::error::{Error, Result};
use crate::motif::{MotifKind, MotifSite};
use crate::sequence::{normalize, Sequence};

/// Where an embedded sequence came from.
#[derive(Clone, Debug)]
pub struct Provenance {
    pub source: &'static str,
    pub notes: &'static str,
}

/// One catalogued gene.
#[derive(Clone, Debug)]
pub struct GeneRecord {
    /// HGNC symbol, e.g. `"TP53"`.
    pub symbol: &'static str,
    pub description: &'static str,
    /// Raw sequence text; may contain line breaks and indentation.
    pub sequence: &'static str,
    pub common_mutations: &'static [&'static str],
    pub provenance: Provenance,
}

impl GeneRecord {
    /// The embedded text as a validated [`Sequence`].
    pub fn sequence(&self) -> Result<Sequence> {
        normalize(self.sequence)
    }
}

pub fn list_genes() -> &'static [GeneRecord] {
    GENES
}

pub fn get_gene(symbol: &str) -> Result<&'static GeneRecord> {
    let symbol = symbol.trim();
    GENES
        .iter()
        .find(|g| g.symbol.eq_ignore_ascii_case(symbol))
        .ok_or_else(|| Error::NotFound {
            what: "Gene",
            key: symbol.to_string(),
            available: GENES.iter().map(|g| g.symbol).collect::<Vec<_>>().join(", "),
        })
}

/// Summary of a catalogued gene with its hotspot codons.
#[derive(Clone, Debug, Serialize)]
pub struct GeneReport {
    pub symbol: &'static str,
    pub description: &'static str,
    pub length: usize,
    pub gc_content: f64,
    /// `CGG`/`TGG` occurrences.
    pub hotspots: Vec<MotifSite>,
    pub common_mutations: &'static [&'static str],
}

pub fn analyze_gene(symbol: &str) -> Result<GeneReport> {
    let gene = get_gene(symbol)?;
    let seq = gene.sequence()?;
    let hotspots = Scanner::with_kinds(&[MotifKind::MutationHotspot]).scan(&seq);
    Ok(GeneReport {
        symbol: gene.symbol,
        description: gene.description,
        length: seq.len(),
        gc_content: seq.gc_content(),
        hotspots,
        common_mutations: gene.common_mutations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_sequence_is_valid_dna() {
        for g in list_genes() {
            let s = g.sequence().unwrap_or_else(|e| panic!("{}: {e}", g.symbol));
            assert!(s.as_str().starts_with("ATG"), "{} should start with ATG", g.symbol);
        }
    }

    #[test]
    fn lookup_is_case_insensitive_and_misses_are_not_found() {
        assert_eq!(get_gene(" tp53 ").unwrap().symbol, "TP53");
        let err = get_gene("MYC").unwrap_err();
        assert!(matches!(err, Error::NotFound { what: "Gene", .. }));
        assert!(err.to_string().contains("TP53, BRCA1, KRAS"));
    }

    #[test]
    fn kras_report() {
        let r = analyze_gene("KRAS").unwrap();
        assert_eq!(r.length, 560);
        assert!((r.gc_content - 40.714).abs() < 0.01);
        assert_eq!(r.hotspots.len(), 20);
        assert_eq!(r.hotspots[0].position, 19);
        assert!(r.hotspots.iter().all(|h| h.matched == "CGG" || h.matched == "TGG"));
    }

    #[test]
    fn catalogue_lengths() {
        let lens: Vec<_> = ["TP53", "BRCA1"].iter().map(|g| analyze_gene(g).unwrap().length).collect();
        assert_eq!(lens, vec![1168, 1615]);
    }
}
