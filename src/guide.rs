//! Guide-RNA candidates next to `NGG` PAM motifs.
//!
//! For a motif site, a context window around it is searched for `[ACGT]GG`.
//! Each PAM with at least [`GUIDE_LEN`] bases upstream yields a 20-nt guide,
//! which is kept only if it covers the site.
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::motif::{GuideCandidate, MotifSite};
use crate::sequence::{gc_content, Sequence};

/// Guide length in nucleotides.
pub const GUIDE_LEN: usize = 20;

/// Default half-width of the context window around a site.
pub const DEFAULT_CONTEXT_RADIUS: usize = 30;

fn pam_regex() -> &'static Regex {
    static PAM: OnceLock<Regex> = OnceLock::new();
    PAM.get_or_init(|| Regex::new("[ACGT]GG").expect("valid PAM pattern"))
}

/// Absolute start offsets of PAM motifs lying entirely inside
/// `seq[start..end]`, left to right and non-overlapping.
pub fn pam_positions(seq: &Sequence, start: usize, end: usize) -> Vec<usize> {
    let end = end.min(seq.len());
    if start >= end {
        return Vec::new();
    }
    pam_regex()
        .find_iter(&seq.as_str()[start..end])
        .map(|m| start + m.start())
        .collect()
}

/// Guide candidates whose 20-nt guide overlaps `site`, ordered by PAM
/// position. An empty result is a normal outcome.
pub fn candidates_for_site(seq: &Sequence, site: &MotifSite, context_radius: usize) -> Vec<GuideCandidate> {
    let text = seq.as_str();
    let start = site.position.saturating_sub(context_radius);
    let end = site.position.saturating_add(context_radius).min(seq.len());

    pam_positions(seq, start, end)
        .into_iter()
        .filter(|&p| p >= GUIDE_LEN)
        .filter(|&p| (p - GUIDE_LEN..p).contains(&site.position))
        .map(|p| {
            let guide = &text[p - GUIDE_LEN..p];
            GuideCandidate {
                guide: guide.to_string(),
                pam_position: p,
                pam: text[p..p + 3].to_string(),
                gc_content: gc_content(guide.as_bytes()).unwrap_or_default(),
            }
        })
        .collect()
}

/// A site paired with its guide candidates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteGuides {
    pub site: MotifSite,
    pub candidates: Vec<GuideCandidate>,
}

/// Run [`candidates_for_site`] for every site, preserving site order.
pub fn design_guides(seq: &Sequence, sites: &[MotifSite], context_radius: usize) -> Vec<SiteGuides> {
    sites
        .iter()
        .map(|site| SiteGuides {
            site: site.clone(),
            candidates: candidates_for_site(seq, site, context_radius),
        })
        .collect()
}
