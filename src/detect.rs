//! Motif detection: the [`Matcher`] variants and the [`Scanner`] that runs a
//! fixed table of them over a [`Sequence`].
//!
//! Every [`MotifKind`] maps to exactly one matcher through [`matcher_for`];
//! call sites never branch on the kind. Literal sets go through an
//! Aho–Corasick automaton (overlapping occurrences are all reported), repeat
//! runs and recurring blocks are linear/near-linear scans over the bytes.
//!
//! # Examples
//! ```
//! use motifscan::detect::Scanner;
//! use motifscan::motif::MotifKind;
//! let seq = motifscan::normalize("CGCG").unwrap();
//! let sites = Scanner::new().scan(&seq);
//! let cpg: Vec<_> = sites.iter().filter(|s| s.kind == MotifKind::CpG).map(|s| s.position).collect();
//! assert_eq!(cpg, vec![0, 2]);
//! ```
use aho_corasick::{AhoCorasick, AhoCorasickKind};
use tracing::debug;

use crate::motif::{MotifKind, MotifSite};
use crate::sequence::Sequence;

/// How a motif kind is recognised.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Matcher {
    /// Any of the literal strings, at every (possibly overlapping) offset.
    LiteralSet(&'static [&'static str]),
    /// Maximal runs of one repeated base at least `min_len` long.
    RepeatRun { min_len: usize },
    /// The longest block (at least `min_len`) starting at an offset that
    /// occurs again further right; matches do not overlap.
    RecurringBlock { min_len: usize },
}

pub const CPG: &[&str] = &["CG"];
pub const STOP_CODONS: &[&str] = &["TAA", "TAG", "TGA"];
pub const SPLICE_SITES: &[&str] = &["GT", "AG"];
pub const HOTSPOT_CODONS: &[&str] = &["CGG", "TGG"];

/// The fixed kind → matcher table.
pub const fn matcher_for(kind: MotifKind) -> Matcher {
    match kind {
        MotifKind::CpG => Matcher::LiteralSet(CPG),
        MotifKind::TandemRepeat => Matcher::RepeatRun { min_len: 3 },
        MotifKind::Microsatellite => Matcher::RepeatRun { min_len: 5 },
        MotifKind::Palindromic => Matcher::RecurringBlock { min_len: 4 },
        MotifKind::StopCodon => Matcher::LiteralSet(STOP_CODONS),
        MotifKind::SpliceSite => Matcher::LiteralSet(SPLICE_SITES),
        MotifKind::MutationHotspot => Matcher::LiteralSet(HOTSPOT_CODONS),
    }
}

/// A [`Matcher`] with any automaton it needs already built.
enum Compiled {
    Literal(AhoCorasick),
    RepeatRun(usize),
    RecurringBlock(usize),
}

impl Compiled {
    fn build(m: Matcher) -> Self {
        match m {
            Matcher::LiteralSet(patterns) => {
                let ac = AhoCorasick::builder()
                    .kind(Some(AhoCorasickKind::DFA)) // tiny fixed pattern sets
                    .build(patterns)
                    .expect("failed to build Aho-Corasick automaton");
                Compiled::Literal(ac)
            }
            Matcher::RepeatRun { min_len } => Compiled::RepeatRun(min_len),
            Matcher::RecurringBlock { min_len } => Compiled::RecurringBlock(min_len),
        }
    }

    /// `(start, end)` spans, ascending by start.
    fn spans(&self, hay: &str) -> Vec<(usize, usize)> {
        match self {
            Compiled::Literal(ac) => {
                let mut hits: Vec<(usize, usize, usize)> = ac
                    .find_overlapping_iter(hay)
                    .map(|m| (m.start(), m.pattern().as_usize(), m.end()))
                    .collect();
                // Same start: keep the pattern declaration order.
                hits.sort_unstable();
                hits.into_iter().map(|(s, _, e)| (s, e)).collect()
            }
            Compiled::RepeatRun(min_len) => repeat_runs(hay.as_bytes(), *min_len),
            Compiled::RecurringBlock(min_len) => recurring_blocks(hay, *min_len),
        }
    }
}

/// Maximal runs of a single byte with length `>= min_len`.
pub fn repeat_runs(hay: &[u8], min_len: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < hay.len() {
        let mut j = i + 1;
        while j < hay.len() && hay[j] == hay[i] {
            j += 1;
        }
        if j - i >= min_len.max(1) {
            out.push((i, j));
        }
        i = j;
    }
    out
}

/// Left-to-right, non-overlapping recurring blocks.
///
/// At each offset the longest block of at least `min_len` bases that occurs
/// again after itself is chosen, paired with its earliest recurrence; the
/// reported span runs from the block start to the end of the recurrence and
/// scanning resumes after it. Offsets with no recurring block are skipped.
pub fn recurring_blocks(hay: &str, min_len: usize) -> Vec<(usize, usize)> {
    let min_len = min_len.max(1);
    let mut out = Vec::new();
    let mut i = 0;
    while i + 2 * min_len <= hay.len() {
        match longest_recurrence(hay, i, min_len) {
            Some(end) => {
                out.push((i, end));
                i = end;
            }
            None => i += 1,
        }
    }
    out
}

/// End of the span for the longest recurring block starting at `i`.
///
/// If a block of length `L + 1` recurs, its length-`L` prefix recurs too, so
/// the valid lengths form a contiguous range and can be binary searched.
fn longest_recurrence(hay: &str, i: usize, min_len: usize) -> Option<usize> {
    let recur = |len: usize| hay[i + len..].find(&hay[i..i + len]).map(|off| i + len + off + len);
    recur(min_len)?;
    let (mut lo, mut hi) = (min_len, (hay.len() - i) / 2);
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if recur(mid).is_some() {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    recur(lo)
}

/// A compiled set of matchers, reusable across many sequences.
pub struct Scanner {
    matchers: Vec<(MotifKind, Compiled)>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Scanner over [`MotifKind::DEFAULT`].
    pub fn new() -> Self {
        Self::with_kinds(&MotifKind::DEFAULT)
    }

    /// Scanner over a subset of kinds. Duplicates are ignored and the kinds
    /// are always evaluated in enumeration order.
    pub fn with_kinds(kinds: &[MotifKind]) -> Self {
        let mut kinds = kinds.to_vec();
        kinds.sort();
        kinds.dedup();
        let matchers = kinds.into_iter().map(|k| (k, Compiled::build(matcher_for(k)))).collect();
        Scanner { matchers }
    }

    pub fn kinds(&self) -> impl Iterator<Item = MotifKind> + '_ {
        self.matchers.iter().map(|(k, _)| *k)
    }

    /// All sites of all configured kinds, sorted by position; ties keep
    /// kind order.
    pub fn scan(&self, seq: &Sequence) -> Vec<MotifSite> {
        let hay = seq.as_str();
        let mut sites = Vec::new();
        for (kind, m) in &self.matchers {
            let before = sites.len();
            sites.extend(m.spans(hay).into_iter().map(|(s, e)| MotifSite {
                kind: *kind,
                position: s,
                matched: hay[s..e].to_string(),
            }));
            debug!(kind = kind.as_str(), hits = sites.len() - before, "matcher done");
        }
        sites.sort_by_key(|s| s.position);
        sites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::normalize;

    fn kinds_at(sites: &[MotifSite], kind: MotifKind) -> Vec<(usize, &str)> {
        sites.iter().filter(|s| s.kind == kind).map(|s| (s.position, s.matched.as_str())).collect()
    }

    #[test]
    fn repeat_runs_are_maximal() {
        assert_eq!(repeat_runs(b"AAAATTTGCCCCCC", 3), vec![(0, 4), (4, 7), (8, 14)]);
        assert_eq!(repeat_runs(b"AAAATTTGCCCCCC", 5), vec![(8, 14)]);
        assert!(repeat_runs(b"AATTGG", 3).is_empty());
    }

    #[test]
    fn recurring_block_prefers_longest_then_earliest() {
        // "ACGTA" recurs at 6; "ACGTAT" does not.
        assert_eq!(recurring_blocks("ACGTATACGTAG", 4), vec![(0, 11)]);
        assert_eq!(recurring_blocks("ACGTACGT", 4), vec![(0, 8)]);
        assert!(recurring_blocks("ACGTTGCA", 4).is_empty());
    }

    #[test]
    fn overlapping_literals_are_all_reported() {
        let seq = normalize("TAATGA").unwrap();
        let sites = Scanner::with_kinds(&[MotifKind::StopCodon]).scan(&seq);
        assert_eq!(kinds_at(&sites, MotifKind::StopCodon), vec![(0, "TAA"), (3, "TGA")]);

        let seq = normalize("AGTAG").unwrap();
        let sites = Scanner::with_kinds(&[MotifKind::SpliceSite]).scan(&seq);
        assert_eq!(
            kinds_at(&sites, MotifKind::SpliceSite),
            vec![(0, "AG"), (1, "GT"), (3, "AG")]
        );
    }

    #[test]
    fn ties_follow_kind_order() {
        // CpG and the CGG hotspot both start at 0.
        let seq = normalize("CGGA").unwrap();
        let sites = Scanner::with_kinds(&[MotifKind::MutationHotspot, MotifKind::CpG]).scan(&seq);
        assert_eq!(sites[0].kind, MotifKind::CpG);
        assert_eq!(sites[1].kind, MotifKind::MutationHotspot);
        assert_eq!(sites[1].matched, "CGG");
    }

    #[test]
    fn tandem_runs_without_stops_or_splices() {
        let seq = normalize("AAATTT").unwrap();
        let sites = Scanner::new().scan(&seq);
        assert_eq!(
            kinds_at(&sites, MotifKind::TandemRepeat),
            vec![(0, "AAA"), (3, "TTT")]
        );
        assert!(sites
            .iter()
            .all(|s| s.kind != MotifKind::StopCodon && s.kind != MotifKind::SpliceSite));
    }

    #[test]
    fn hotspot_is_opt_in() {
        let seq = normalize("TGGCGG").unwrap();
        assert!(Scanner::new().scan(&seq).iter().all(|s| s.kind != MotifKind::MutationHotspot));
        let hot = Scanner::with_kinds(&[MotifKind::MutationHotspot]).scan(&seq);
        assert_eq!(hot.iter().map(|s| s.position).collect::<Vec<_>>(), vec![0, 3]);
    }
}
