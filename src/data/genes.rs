//! Embedded tumor gene sequences.
//!
//! Short, partial coding sequences used for demonstration and hotspot
//! scanning. They are not reference-grade transcripts; the sequence text is
//! stored wrapped at 60 columns and normalized on access.

use crate::genes::{GeneRecord, Provenance};

const CURATED: Provenance = Provenance {
    source: "Hand-curated demonstration set",
    notes: "Partial coding sequences; mutation labels use protein (p.) or legacy cDNA notation.",
};

/// Tumor protein p53 coding sequence (partial).
pub const TP53: GeneRecord = GeneRecord {
    symbol: "TP53",
    description: "TP53 tumor suppressor gene, commonly mutated in various cancers",
    sequence: "
    ATGGAGGAGCCGCAGTCAGATCCTAGCGTCGAGCCCCCTCTGAGTCAGGAAACATTTTCA
    GACCTATGGAAACTACTTCCTGAAAACAACGTTCTGTCCCCCTTGCCGTCCCAAGCAATG
    GATGATTTGATGCTGTCCCCGGACGATATTGAACAATGGTTCACTGAAGACCCAGGTCCA
    GATGAAGCTCCCAGAATGCCAGAGGCTGCTCCCCCCGTGGCCCCTGCACCAGCAGCTCCT
    ACACCGGCGGCCCCTGCACCAGCCCCCTCCTGGCCCCTGTCATCTTCTGTCCCTTCCCAG
    AAAACCTACCAGGGCAGCTACGGTTTCCGTCTGGGCTTCTTGCATTCTGGGACAGCCAAG
    TCTGTGACTTGCACGTACTCCCCTGCCCTCAACAAGATGTTTTGCCAACTGGCCAAGACC
    TGCCCTGTGCAGCTGTGGGTTGATTCCACACCCCCGCCCGGCACCCGCGTCCGCGCCATG
    GCCATCTACAAGCAGTCACAGCACATGACGGAGGTTGTGAGGCGCTGCCCCCACCATGAG
    CGCTGCTCAGATAGCGATGGTCTGGCCCCTCCTCAGCATCTTATCCGAGTGGAAGGAAAT
    TTGCGTGTGGAGTATTTGGATGACAGAAACACTTTTCGACATAGTGTGGTGGTGCCCTAT
    GAGCCGCCTGAGGTTGGCTCTGACTGTACCACCATCCACTACAACTACATGTGTAACAGT
    TCCTGCATGGGCGGCATGAACCGGAGGCCCATCCTCACCATCATCACACTGGAAGACTCC
    AGTGGTAATCTACTGGGACGGAACAGCTTTGAGGTGCGTGTTTGTGCCTGTCCTGGGAGA
    GACCGGCGCACAGAGGAAGAGAATCTCCGCAAGAAAGGGGAGCCTCACCACGAGCTGCCC
    CCAGGGAGCACTAAGCGAGCACTGCCCAACAACACCAGCTCCTCTCCCCAGCCAAAGAAG
    AAACCACTGGATGGAGAATATTTCACCCTTCAGATCCGTGGGCGTGAGCGCTTCGAGATG
    TTCCGAGAGCTGAATGAGGCCTTGGAACTCAAGGATGCCCAGGCTGGGAAGGAGCCAGGG
    GGGAGCAGGGCTCACTCCAGCCACCTGAAGTCCAAAAAGGGTCAGTCTACCTCCCGCCAT
    AAAAAACTCATGTTCAAGACAGAAGGAA
    ",
    common_mutations: &["R175H", "R248W", "R273H", "R282W"],
    provenance: CURATED,
};

/// BRCA1 DNA repair associated, 5' coding region (partial).
pub const BRCA1: GeneRecord = GeneRecord {
    symbol: "BRCA1",
    description: "BRCA1 breast cancer susceptibility gene",
    sequence: "
    ATGGATTTATCTGCTCTTCGCGTTGAAGAAGTACAAAATGTCGTAACTTGCAAAAGAAAT
    ATCATCAGAAATGTGAAACCAACACATAAAATGAAGAGGAAAAATCTGATTCAAAGAGGC
    AGAGAAAGATACAGCTGCAGAAAGGATGAAGGGGCTGCATTAATATAGGTGAAAACCCAT
    CTAGTGATTGTAATGGATATGGGAAAACTTGAATCCGATGATTCACTTTATATCACTTTA
    ATTGTTACTCATTCAAAATATTACAGGGCTACTATGTCCAAATGTGTTAGAGGTATTTTG
    GGGAACCCAGATGCCTGGTTTATAGACACTAAGGATGGGGAAATTTATATGTGGCAGCAA
    AACAAGGGGATCAAGCCATTTGTCGAAACTGGCGAGAGACAAAAACAATTTTTAGAACTG
    GCAGTGACAATAATTTCCGAATATCCATCTCTTCTTACAATGCCTACTAATTTTACTACT
    TCAAATCTTGATACAGTCACTGAAAGTGATATTTGGATTATTTTATAAACTACATTAAGT
    AATGTGTGTTTCTAGATGTCTTTACTGAAAGTGCTTTACATATCAGCATCTGAATTCTTT
    GCCCCAGCCTATTCCTCTCCCTCAACTTTGTGCAGCCTCATGTCACTCTCCTCCATCCAG
    TTACGTCTTCCTCGTCGATGAAATCCAAGAAAAAGGCTGCCACCAACTAAGAATGGATAG
    AATAAAAGCAAGTTTGAATCATCAGCTCAGGCAGACAGTGGTTTCAGCCGGGTTTCTGCT
    GTGTCCAGGAAAGCTTGTTTTTTTCGAGACATGGCTTTACATGTGTTGATCTGCCTTAAT
    AAATCTAAACGAAAATAATTCCGTAAAAATTGAAACTTATCAGATATGTTAATCCTTTAA
    AAAGAAAAACCTATAACCCAGCATGGAATAAATCTTTGTGCCATTTATTTTATGAAGGAC
    TCAGATATACCCATCGGAAGGTCTGATGATTTCTATGGAGGCAGGGTCTCATGCTGACGG
    TGGACAGATGGTTCTGCACCTGGTTGGAGGATTCAGCATGGAAAGGGTACAAAGCATGTG
    AAACGGGAAGAATCAATTCTGTTTATTTCATTCATATGCTTAGTCTCATTGTTTTATACA
    TTCATTTTCTTAATTTAGTTCATATGTAAATAATGGCTCCTTCGCACTTCTTAACAAGAT
    CAATGTACTTTGGTGTTTCTTTATGAGCAGTACTAAAATGGACTATTTTATTTCTTTTAT
    GTTCAGCATGTAATAATACAGTTGACTTAGGCCACTTTGCAAGCCTGTGAAAGAAAATAA
    ACAAATTAGCCCTAGGTCAAATGGATATGGAGAAACCCATTCAGGGATATACAGATGGGT
    CAAATTCAATGCAGGGTTCTGGGGAGAGTCAATGGAGTTTCCATACAGCTTGTCTTAGAC
    CTATCTATTCCTCTCCCTAGTATATTTTGAAATGTACAATAAATTATTATGTGCTGTATT
    TTATGAGACTCAAGCTTCCTCTTTAGATTCCATTTAAATAACACTCTCCATTGCACAGTA
    AAAGATAATTCCTCCAAAACAGATCATGCTTGCTCCCATCCAGTCAGGAGGTGCG
    ",
    common_mutations: &["185delAG", "5382insC", "C61G"],
    provenance: CURATED,
};

/// KRAS proto-oncogene coding region (partial, with an internal duplication as transcribed).
pub const KRAS: GeneRecord = GeneRecord {
    symbol: "KRAS",
    description: "KRAS oncogene, commonly mutated in pancreatic and colorectal cancers",
    sequence: "
    ATGACTGAATATAAACTTGTGGTAGTTGGAGCTGGTGGCGTAGGCAAGAGTGCCTTGACG
    ATACAGCTAATTCAGAATCATTTTGTGGACGAATATGATCCAACAATAGAGGTGTTTACA
    GCTGTAGTAAAAACTTGTGGTCAAGAATGGTCCTGCATCAGATAATTACCTTTATTGTGA
    TCATGTCATTAAAAATGGTAGAGCCGGAGGCGTAGGCAAACCATTTGAATAAGCTTGATT
    GACACAGGCAGTTTATTGTGTGGCGAGTACCATGCTGAAAATGACTGAATATAAACTTGT
    GGTAGTTGGAGCTGGTGGCGTAGGCAAGAGTGCCTTGACGATACAGCTAATTCAGAATCA
    TTTTGTGGACGAATATGATCCAACAATAGAGGTGTTTACAGCTGTAGTAAAAACTTGTGG
    TCAAGAATGGTCCTGCATCAGATAATTACCTTTATTGTGATCATGTCATTAAAAATGGTA
    GAGCCGGAGGCGTAGGCAAACCATTTGAATAAGCTTGATTGACACAGGCAGTTTATTGTG
    TGGCGAGTACCATGCTGAAA
    ",
    common_mutations: &["G12D", "G12V", "G13D"],
    provenance: CURATED,
};

pub const GENES: &[GeneRecord] = &[TP53, BRCA1, KRAS];
