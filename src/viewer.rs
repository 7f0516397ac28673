//! Write-only boundary to a molecular viewer.
//!
//! Motif positions are projected onto the 12-bp B-DNA dodecamer (`1bna`)
//! used as a display scaffold: sequence offset `i` maps to residue
//! `i % 12 + 1`. The crate never reads anything back from the viewer.
//!
//! [`PymolScript`] renders the calls as a PyMOL command script (`.pml`).
use core::fmt;
use std::io::Write;

use crate::error::Result;
use crate::motif::MotifSite;

/// PDB entry used as the display scaffold.
pub const SCAFFOLD_PDB: &str = "1bna";
/// Base pairs per strand in [`SCAFFOLD_PDB`].
pub const SCAFFOLD_BASE_PAIRS: usize = 12;

/// Scaffold residue number (1-based) for a sequence offset.
pub fn residue_for(position: usize) -> usize {
    position % SCAFFOLD_BASE_PAIRS + 1
}

/// Inclusive 1-based residue range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResidueRange {
    pub start: usize,
    pub end: usize,
}

impl ResidueRange {
    pub fn single(resi: usize) -> Self {
        ResidueRange { start: resi, end: resi }
    }
}

impl fmt::Display for ResidueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Anything that can render a highlight on a named viewer object.
pub trait HighlightSink {
    fn apply_highlight(&mut self, object_id: &str, residues: ResidueRange, color: &str) -> Result<()>;
}

/// Highlight one scaffold residue per site. Returns the number of calls made.
pub fn highlight_sites<S>(sink: &mut S, object_id: &str, sites: &[MotifSite], color: &str) -> Result<usize>
where
    S: HighlightSink + ?Sized,
{
    for site in sites {
        sink.apply_highlight(object_id, ResidueRange::single(residue_for(site.position)), color)?;
    }
    Ok(sites.len())
}

/// Emits PyMOL commands to a writer.
pub struct PymolScript<W: Write> {
    out: W,
    selections: usize,
}

impl<W: Write> PymolScript<W> {
    pub fn new(out: W) -> Self {
        PymolScript { out, selections: 0 }
    }

    /// (Re)create `object_id` from the scaffold and show it as a blue cartoon.
    pub fn scaffold(&mut self, object_id: &str) -> Result<()> {
        writeln!(self.out, "delete {object_id}")?;
        writeln!(self.out, "create {object_id}, {SCAFFOLD_PDB}")?;
        writeln!(self.out, "color blue, {object_id}")?;
        writeln!(self.out, "show cartoon, {object_id}")?;
        writeln!(self.out, "set cartoon_ring_mode, 3")?;
        writeln!(self.out, "set cartoon_ring_finder, 1")?;
        writeln!(self.out, "set cartoon_ring_transparency, 0.5")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> HighlightSink for PymolScript<W> {
    fn apply_highlight(&mut self, object_id: &str, residues: ResidueRange, color: &str) -> Result<()> {
        let sel = format!("{object_id}_hl_{}", self.selections);
        self.selections += 1;
        writeln!(self.out, "select {sel}, {object_id} and resi {residues}")?;
        writeln!(self.out, "color {color}, {sel}")?;
        writeln!(self.out, "show sticks, {sel}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motif::MotifKind;

    #[derive(Default)]
    struct Recording(Vec<(String, ResidueRange, String)>);

    impl HighlightSink for Recording {
        fn apply_highlight(&mut self, object_id: &str, residues: ResidueRange, color: &str) -> Result<()> {
            self.0.push((object_id.to_string(), residues, color.to_string()));
            Ok(())
        }
    }

    fn site(position: usize) -> MotifSite {
        MotifSite { kind: MotifKind::MutationHotspot, position, matched: "TGG".into() }
    }

    #[test]
    fn positions_wrap_onto_scaffold() {
        assert_eq!(residue_for(0), 1);
        assert_eq!(residue_for(11), 12);
        assert_eq!(residue_for(12), 1);
        assert_eq!(residue_for(19), 8);
    }

    #[test]
    fn sink_receives_one_call_per_site() {
        let mut rec = Recording::default();
        let n = highlight_sites(&mut rec, "KRAS", &[site(19), site(26)], "red").unwrap();
        assert_eq!(n, 2);
        assert_eq!(rec.0[0], ("KRAS".to_string(), ResidueRange::single(8), "red".to_string()));
        assert_eq!(rec.0[1].1, ResidueRange::single(3));
    }

    #[test]
    fn pymol_script_text() {
        let mut pml = PymolScript::new(Vec::new());
        pml.scaffold("TP53").unwrap();
        highlight_sites(&mut pml, "TP53", &[site(1)], "red").unwrap();
        let text = String::from_utf8(pml.into_inner()).unwrap();
        assert!(text.starts_with("delete TP53\ncreate TP53, 1bna\n"));
        assert!(text.contains("select TP53_hl_0, TP53 and resi 2\ncolor red, TP53_hl_0\nshow sticks, TP53_hl_0\n"));
    }

    #[test]
    fn range_display() {
        assert_eq!(ResidueRange { start: 3, end: 5 }.to_string(), "3-5");
        assert_eq!(ResidueRange::single(7).to_string(), "7");
    }
}
