//! Pseudo-random demonstration data: random sequences, a GC-rich viral gene
//! mimic and synthetic PAM/guide windows.
//!
//! Nothing here is analysis. All functions take the random source
//! explicitly, so a seeded generator gives reproducible output.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! let mut rng = StdRng::seed_from_u64(7);
//! let sites = motifscan::synth::synthetic_pam_sites(64, &mut rng);
//! assert_eq!(sites.iter().map(|s| s.position).collect::<Vec<_>>(), vec![0, 20, 40]);
//! ```
use rand::Rng;

use crate::guide::GUIDE_LEN;
use crate::motif::SyntheticPamSite;
use crate::sequence::gc_content;

const BASES: &[u8; 4] = b"ACGT";

const PROMOTERS: &[&str] = &["TATAAA", "GCGCGC", "CCGCCC"];
const ENHANCERS: &[&str] = &["GGGCGG", "CACGTG", "GCCGCC"];
const GC_RICH_BLOCKS: &[&str] = &["GCCGCC", "CGCGCG", "CCGCCG"];
const START_CODON: &str = "ATG";
const STOP_CODONS: &[&str] = &["TAA", "TAG", "TGA"];

/// Window stride used by [`synthetic_pam_sites`].
pub const WINDOW: usize = 20;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn random_base<R: Rng + ?Sized>(rng: &mut R) -> char {
    BASES[rng.gen_range(0..BASES.len())] as char
}

/// G and C at 40 % each, A and T at 10 % each.
fn gc_weighted_base<R: Rng + ?Sized>(rng: &mut R) -> char {
    match rng.gen_range(0..10) {
        0..=3 => 'G',
        4..=7 => 'C',
        8 => 'A',
        _ => 'T',
    }
}

/// Uniformly random sequence of `len` bases.
pub fn random_sequence<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
    (0..len).map(|_| random_base(rng)).collect()
}

/// One synthetic site per 20-nt window, starting at 0, for every window that
/// leaves room for a guide and PAM (`i + 22 <= len`). PAM and guide are drawn
/// at random; they are not read from any sequence.
pub fn synthetic_pam_sites<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<SyntheticPamSite> {
    (0..len)
        .step_by(WINDOW)
        .take_while(|i| i + 22 <= len)
        .map(|position| {
            let pam = format!("{}GG", random_base(rng));
            let guide = random_sequence(GUIDE_LEN, rng);
            let gc = gc_content(guide.as_bytes()).unwrap_or_default();
            SyntheticPamSite { position, pam, guide, gc_content: gc }
        })
        .collect()
}

/// A sequence laid out like an oncogenic viral gene: promoter, three
/// enhancers, start codon, a GC-rich body and a stop codon, cut to `len`.
pub fn oncogenic_virus_gene<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
    let mut seq = String::with_capacity(len + 32);
    seq.push_str(pick(rng, PROMOTERS));
    for _ in 0..3 {
        seq.push_str(pick(rng, ENHANCERS));
    }
    seq.push_str(START_CODON);

    let body_until = len.saturating_sub(50);
    while seq.len() < body_until {
        seq.push_str(pick(rng, GC_RICH_BLOCKS));
        let k = rng.gen_range(10..=20);
        seq.extend((0..k).map(|_| gc_weighted_base(rng)));
    }
    seq.push_str(pick(rng, STOP_CODONS));
    seq.truncate(len);
    seq
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn windows_are_twenty_apart_and_fit() {
        let mut rng = StdRng::seed_from_u64(1);
        for len in [0, 21, 22, 41, 42, 100] {
            let sites = synthetic_pam_sites(len, &mut rng);
            for (i, s) in sites.iter().enumerate() {
                assert_eq!(s.position, i * WINDOW);
                assert!(s.position + 22 <= len);
                assert_eq!(s.guide.len(), GUIDE_LEN);
                assert!(s.pam.ends_with("GG") && s.pam.len() == 3);
                assert!((0.0..=100.0).contains(&s.gc_content));
            }
        }
        assert_eq!(synthetic_pam_sites(21, &mut rng).len(), 0);
        assert_eq!(synthetic_pam_sites(22, &mut rng).len(), 1);
        assert_eq!(synthetic_pam_sites(42, &mut rng).len(), 2);
    }

    #[test]
    fn same_seed_same_output() {
        let a = oncogenic_virus_gene(300, &mut StdRng::seed_from_u64(42));
        let b = oncogenic_virus_gene(300, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        let c = random_sequence(50, &mut StdRng::seed_from_u64(42));
        let d = random_sequence(50, &mut StdRng::seed_from_u64(42));
        assert_eq!(c, d);
    }

    #[test]
    fn virus_gene_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = oncogenic_virus_gene(500, &mut rng);
        // Body stops growing at len - 50; the result is never longer than asked.
        assert!(g.len() >= 453 && g.len() <= 500, "len {}", g.len());
        assert!(PROMOTERS.iter().any(|p| g.starts_with(p)));
        assert_eq!(&g[24..27], START_CODON);
        assert!(g.bytes().all(|b| BASES.contains(&b)));

        // Too short for the body: prefix plus stop, truncated.
        let short = oncogenic_virus_gene(10, &mut rng);
        assert_eq!(short.len(), 10);
    }
}
