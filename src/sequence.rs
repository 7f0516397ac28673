//! Validated DNA sequences, input normalization and GC content.
//!
//! Everything downstream of [`normalize`] works on a [`Sequence`], which is
//! guaranteed non-empty and uppercase over `{A, C, G, T}`.
//!
//! # Examples
//! ```
//! use motifscan::sequence::{normalize, gc_content};
//! let s = normalize("  \"acg t\"  ").unwrap();
//! assert_eq!(s.as_str(), "ACGT");
//! assert_eq!(gc_content(b"GGCC").unwrap(), 100.0);
//! ```
use core::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{Error, Result};

/// A non-empty, uppercase DNA string over `{A, C, G, T}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequence(String);

impl Sequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// GC percentage of the whole sequence. Infallible because a `Sequence`
    /// is never empty.
    pub fn gc_content(&self) -> f64 {
        gc_percent(self.as_bytes())
    }

    /// Keep only the first `truncate_to` bases when the sequence is longer
    /// than `max_len`. Returns the (possibly shortened) sequence and whether
    /// truncation happened.
    pub fn limit_length(self, max_len: usize, truncate_to: usize) -> (Sequence, bool) {
        if self.len() <= max_len || truncate_to == 0 {
            return (self, false);
        }
        warn!(
            len = self.len(),
            max_len, truncate_to, "sequence is very long; analysing only a prefix"
        );
        let mut s = self.0;
        s.truncate(truncate_to);
        (Sequence(s), true)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Sequence {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        normalize(s)
    }
}

/// Clean free-form user text into a [`Sequence`].
///
/// Surrounding whitespace and `"`/`'` quotes are stripped, internal
/// whitespace removed and the result uppercased. The cleaned text must be
/// non-empty and consist only of `A`, `C`, `G`, `T`.
pub fn normalize(raw: &str) -> Result<Sequence> {
    let cleaned: String = raw
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c.is_whitespace())
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if cleaned.is_empty() {
        return Err(Error::InvalidSequence("sequence is empty".into()));
    }
    let alphabet = bio::alphabets::dna::alphabet();
    let foreign = cleaned
        .chars()
        .enumerate()
        .find(|&(_, c)| !c.is_ascii_uppercase() || !alphabet.symbols.contains(c as usize));
    if let Some((offset, bad)) = foreign {
        return Err(Error::InvalidSequence(format!(
            "unexpected character {bad:?} at offset {offset}; only A, C, G, T are allowed"
        )));
    }
    Ok(Sequence(cleaned))
}

/// GC percentage, `100 * (G + C) / len`. Fails on empty input.
pub fn gc_content(seq: &[u8]) -> Result<f64> {
    if seq.is_empty() {
        return Err(Error::InvalidSequence(
            "GC content is undefined for an empty sequence".into(),
        ));
    }
    Ok(gc_percent(seq))
}

#[inline]
fn gc_percent(seq: &[u8]) -> f64 {
    let gc = seq
        .iter()
        .filter(|&&b| matches!(b, b'G' | b'C' | b'g' | b'c'))
        .count();
    100.0 * gc as f64 / seq.len() as f64
}
