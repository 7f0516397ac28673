//! Structured results: full motif/guide analysis and the PAM report, plus a
//! flat CSV rendering of the former.
use std::io::Write;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::detect::Scanner;
use crate::error::Result;
use crate::guide::{design_guides, SiteGuides};
use crate::motif::{off_target_variants, BindingAffinity, SyntheticPamSite};
use crate::sequence::{normalize, Sequence};
use crate::synth::{random_sequence, synthetic_pam_sites};

/// Length of the replacement sequence drawn when no synthetic PAM window fits.
pub const REPLACEMENT_LEN: usize = 100;

/// Motif sites of one sequence with their guide candidates.
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    /// The analysed sequence (after any truncation).
    pub sequence: String,
    pub length: usize,
    pub gc_content: f64,
    pub truncated: bool,
    pub sites: Vec<SiteGuides>,
}

impl Analysis {
    pub fn n_candidates(&self) -> usize {
        self.sites.iter().map(|s| s.candidates.len()).sum()
    }
}

/// Scan `seq` with the kinds from `cfg` and design guides around each site.
pub fn analyze(seq: Sequence, cfg: &ScanConfig) -> Result<Analysis> {
    let scanner = Scanner::with_kinds(&cfg.motif_kinds()?);
    Ok(analyze_with(&scanner, seq, cfg))
}

/// As [`analyze`], reusing an already compiled scanner.
pub fn analyze_with(scanner: &Scanner, seq: Sequence, cfg: &ScanConfig) -> Analysis {
    let (seq, truncated) = seq.limit_length(cfg.max_input_len, cfg.truncate_to);
    let sites = scanner.scan(&seq);
    let sites = design_guides(&seq, &sites, cfg.context_radius);
    let analysis = Analysis {
        length: seq.len(),
        gc_content: seq.gc_content(),
        truncated,
        sites,
        sequence: seq.into_string(),
    };
    debug!(
        length = analysis.length,
        sites = analysis.sites.len(),
        candidates = analysis.n_candidates(),
        "analysis done"
    );
    analysis
}

#[derive(Serialize)]
struct CsvRow<'a> {
    kind: &'a str,
    position: usize,
    matched: &'a str,
    guide: Option<&'a str>,
    pam_position: Option<usize>,
    pam: Option<&'a str>,
    guide_gc: Option<f64>,
    binding: Option<BindingAffinity>,
}

/// One row per guide candidate; sites without candidates get a single row
/// with empty guide columns.
pub fn write_analysis_csv<W: Write>(analysis: &Analysis, out: W) -> Result<()> {
    let mut w = csv::Writer::from_writer(out);
    for sg in &analysis.sites {
        let base = CsvRow {
            kind: sg.site.kind.as_str(),
            position: sg.site.position,
            matched: &sg.site.matched,
            guide: None,
            pam_position: None,
            pam: None,
            guide_gc: None,
            binding: None,
        };
        if sg.candidates.is_empty() {
            w.serialize(base)?;
            continue;
        }
        for c in &sg.candidates {
            w.serialize(CsvRow {
                guide: Some(&c.guide),
                pam_position: Some(c.pam_position),
                pam: Some(&c.pam),
                guide_gc: Some(c.gc_content),
                binding: Some(c.binding()),
                ..base
            })?;
        }
    }
    w.flush()?;
    Ok(())
}

/// A synthetic PAM window with its annotations.
#[derive(Clone, Debug, Serialize)]
pub struct PamSiteReport {
    #[serde(flatten)]
    pub site: SyntheticPamSite,
    pub binding: BindingAffinity,
    /// `sequence[pos - 10 .. pos + 15]`, clipped to the sequence. Sliced
    /// from [`PamReport::replacement`] instead when that is set.
    pub context: String,
    pub off_targets: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PamReport {
    pub sequence: String,
    pub length: usize,
    pub gc_content: f64,
    pub truncated: bool,
    /// Set when the input was too short for any window and a random
    /// sequence was analysed in its place.
    pub replacement: Option<String>,
    pub sites: Vec<PamSiteReport>,
}

/// Synthetic PAM/guide windows for `seq`, annotated with binding
/// prediction, local context and single-mismatch variants.
pub fn pam_report<R: Rng + ?Sized>(seq: Sequence, cfg: &ScanConfig, rng: &mut R) -> Result<PamReport> {
    let (seq, truncated) = seq.limit_length(cfg.max_input_len, cfg.truncate_to);
    let mut sites = synthetic_pam_sites(seq.len(), rng);
    let mut replacement = None;
    if sites.is_empty() {
        let fresh = normalize(&random_sequence(REPLACEMENT_LEN, rng))?;
        info!(len = seq.len(), "no PAM window fits; analysing a random {REPLACEMENT_LEN}-nt sequence");
        sites = synthetic_pam_sites(fresh.len(), rng);
        replacement = Some(fresh);
    }

    let context_of = replacement.as_ref().unwrap_or(&seq).as_str();
    let sites = sites
        .into_iter()
        .map(|site| {
            let start = site.position.saturating_sub(10);
            let end = (site.position + 15).min(context_of.len());
            PamSiteReport {
                binding: site.binding(),
                context: context_of[start..end].to_string(),
                off_targets: off_target_variants(&site.guide),
                site,
            }
        })
        .collect();

    Ok(PamReport {
        length: seq.len(),
        gc_content: seq.gc_content(),
        truncated,
        replacement: replacement.map(Sequence::into_string),
        sites,
        sequence: seq.into_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn csv_has_a_row_per_candidate_or_site() {
        let seq = normalize(&format!("{}CGG{}", "A".repeat(25), "A".repeat(20))).unwrap();
        let cfg = ScanConfig { kinds: vec!["cpg".into()], ..ScanConfig::default() };
        let a = analyze(seq, &cfg).unwrap();
        // One CpG at 25, whose guides cannot cover it (PAM starts at 25).
        assert_eq!(a.sites.len(), 1);
        let mut buf = Vec::new();
        write_analysis_csv(&a, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "kind,position,matched,guide,pam_position,pam,guide_gc,binding");
        assert_eq!(lines[1], "cpg,25,CG,,,,,");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn long_inputs_are_truncated() {
        let seq = normalize(&"ACGT".repeat(3000)).unwrap();
        let a = analyze(seq, &ScanConfig::default()).unwrap();
        assert!(a.truncated);
        assert_eq!(a.length, 1000);
    }

    #[test]
    fn pam_report_annotates_windows() {
        let seq = normalize(&"GATTACA".repeat(10)).unwrap();
        let r = pam_report(seq, &ScanConfig::default(), &mut StdRng::seed_from_u64(9)).unwrap();
        assert!(r.replacement.is_none());
        assert_eq!(r.sites.len(), 3);
        assert_eq!(r.sites[0].context, "GATTACAGATTACAG");
        assert_eq!(r.sites[1].context.len(), 25);
        for s in &r.sites {
            assert_eq!(s.binding, BindingAffinity::from_gc(s.site.gc_content));
            assert_eq!(s.off_targets.len(), 20);
        }
    }

    #[test]
    fn short_input_gets_a_replacement() {
        let seq = normalize("ACGTACGT").unwrap();
        let r = pam_report(seq, &ScanConfig::default(), &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(r.length, 8);
        assert_eq!(r.replacement.as_ref().map(String::len), Some(REPLACEMENT_LEN));
        assert_eq!(r.sites.len(), 4);
        let fresh = r.replacement.as_deref().unwrap();
        for s in &r.sites {
            let start = s.site.position.saturating_sub(10);
            assert_eq!(s.context, &fresh[start..(s.site.position + 15).min(fresh.len())]);
        }
    }
}
