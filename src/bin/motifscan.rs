use std::io::Write;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use motifscan::config::ScanConfig;
use motifscan::knowledge::KnowledgeBase;
use motifscan::report::{write_analysis_csv, Analysis, PamReport};
use motifscan::viewer::{highlight_sites, PymolScript};
use motifscan::structure::{self, DirectorySource};
use motifscan::{genes, normalize, seqio, synth};

/// motifscan CLI
#[derive(Parser)]
#[command(name = "motifscan")]
#[command(version)]
#[command(about = "DNA motif scanning, toy guide-RNA design and a tumor gene catalog", long_about = None)]
struct Cli {
    /// JSON scan configuration (context_radius, max_input_len, truncate_to, kinds)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Override the PAM context radius
    #[arg(long, global = true)]
    radius: Option<usize>,
    /// Comma-separated motif kinds (e.g. "cpg,stop_codon")
    #[arg(long, global = true)]
    kinds: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a sequence for motifs and design guides around each site
    Scan {
        /// DNA sequence (quotes and whitespace are ignored)
        sequence: String,
        /// Emit CSV to stdout
        #[arg(long)]
        csv: bool,
        /// Emit JSON to stdout
        #[arg(long)]
        json: bool,
    },

    /// Synthetic PAM/guide windows with binding prediction and off-target variants
    Pam {
        /// DNA sequence; omit together with --generate or --virus-gene
        sequence: Option<String>,
        /// Analyse a random sequence instead
        #[arg(long)]
        generate: bool,
        /// Analyse a generated oncogenic-virus-like gene instead
        #[arg(long)]
        virus_gene: bool,
        /// Length for generated sequences
        #[arg(long, default_value_t = 100)]
        length: usize,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Emit JSON to stdout
        #[arg(long)]
        json: bool,
    },

    /// Print a generated sequence
    Generate {
        #[arg(long, default_value_t = 100)]
        length: usize,
        /// GC-rich oncogenic-virus-like layout instead of uniform bases
        #[arg(long)]
        virus_gene: bool,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List catalogued tumor genes
    ListGenes,

    /// Analyse a catalogued tumor gene (e.g. "TP53")
    Gene {
        symbol: String,
        /// Write a PyMOL script highlighting the hotspot codons
        #[arg(long)]
        pml: Option<String>,
        #[arg(long)]
        json: bool,
    },

    /// Search the local knowledge base
    Knowledge {
        query: String,
        /// Knowledge base JSON file
        #[arg(long, default_value = "knowledge.json")]
        db: String,
    },

    /// Show a saved structure database entry (e.g. "1bna")
    Structure {
        id: String,
        /// Directory of `<id>.json` entry documents
        #[arg(long, default_value = "structures")]
        dir: String,
    },

    /// Analyse every record of FASTA/FASTQ files
    Batch {
        /// Input files (FASTA/FASTQ/FASTQ.GZ)
        #[arg(required = true)]
        files: Vec<String>,
        /// Threads (0/None = all)
        #[arg(long)]
        threads: Option<usize>,
        /// Write results as JSON to this file
        #[arg(long)]
        json: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(&cli)?;

    match cli.command {
        Commands::Scan { sequence, csv, json } => cmd_scan(&sequence, &cfg, csv, json)?,
        Commands::Pam { sequence, generate, virus_gene, length, seed, json } => {
            let mut rng = make_rng(seed);
            let raw = match sequence {
                Some(s) => s,
                None if virus_gene => synth::oncogenic_virus_gene(length, &mut rng),
                None if generate => synth::random_sequence(length, &mut rng),
                None => bail!("provide a DNA sequence or pass --generate / --virus-gene"),
            };
            let report = motifscan::pam_report(normalize(&raw)?, &cfg, &mut rng)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_pam_report(&report);
            }
        }
        Commands::Generate { length, virus_gene, seed } => {
            let mut rng = make_rng(seed);
            let s = if virus_gene {
                synth::oncogenic_virus_gene(length, &mut rng)
            } else {
                synth::random_sequence(length, &mut rng)
            };
            println!("{s}");
        }
        Commands::ListGenes => cmd_list_genes()?,
        Commands::Gene { symbol, pml, json } => cmd_gene(&symbol, pml, json)?,
        Commands::Knowledge { query, db } => {
            let kb = KnowledgeBase::load_or_empty(&db);
            match kb.search(&query) {
                Some(e) => println!("{}\n{}", e.name, e.description),
                None => println!("No local knowledge for {query:?}"),
            }
        }
        Commands::Structure { id, dir } => {
            match structure::fetch_or_unavailable(&DirectorySource::new(&dir), &id)? {
                Some(rec) => println!("{rec}"),
                None => println!("Structure information for {id} is unavailable"),
            }
        }
        Commands::Batch { files, threads, json } => {
            let outcome = seqio::analyze_files(&files, threads, &cfg)?;
            for r in &outcome.records {
                match (&r.analysis, &r.error) {
                    (Some(a), _) => println!(
                        "{}\tlen={}\tgc={:.1}\tsites={}\tguides={}",
                        r.id,
                        a.length,
                        a.gc_content,
                        a.sites.len(),
                        a.n_candidates()
                    ),
                    (None, Some(e)) => println!("{}\terror={e}", r.id),
                    (None, None) => {}
                }
            }
            if let Some(path) = json {
                let f = std::fs::File::create(&path).with_context(|| format!("creating {path}"))?;
                serde_json::to_writer_pretty(f, &outcome.records)?;
                info!(path = %path, records = outcome.records.len(), "wrote JSON");
            }
            if let Some(first) = outcome.failed_files.first() {
                bail!(
                    "{} of {} input files could not be read (first: {}: {})",
                    outcome.failed_files.len(),
                    files.len(),
                    first.path,
                    first.error
                );
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<ScanConfig> {
    let mut cfg = match &cli.config {
        Some(p) => ScanConfig::load(p).with_context(|| format!("loading config {p}"))?,
        None => ScanConfig::default(),
    };
    if let Some(r) = cli.radius {
        cfg.context_radius = r;
    }
    if let Some(k) = &cli.kinds {
        cfg.kinds = k.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect();
    }
    // Fail early on unknown kind names.
    cfg.motif_kinds()?;
    Ok(cfg)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn cmd_scan(raw: &str, cfg: &ScanConfig, csv: bool, json: bool) -> anyhow::Result<()> {
    let analysis = motifscan::analyze(normalize(raw)?, cfg)?;
    if csv {
        write_analysis_csv(&analysis, std::io::stdout().lock())?;
    } else if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis);
    }
    Ok(())
}

fn print_analysis(a: &Analysis) {
    println!("Sequence length: {} bp", a.length);
    if a.truncated {
        println!("(input truncated for analysis)");
    }
    println!("GC content: {:.2}%", a.gc_content);
    println!("\nPotential mutation sites: {}", a.sites.len());
    for sg in &a.sites {
        println!("\nPosition {}:", sg.site.position);
        println!("Type: {}", sg.site.kind);
        println!("Sequence: {}", sg.site.matched);
        if sg.candidates.is_empty() {
            println!("No suitable guide RNAs found near this site");
        }
        for c in &sg.candidates {
            println!("Guide RNA: {}", c.guide);
            println!("PAM Position: {} ({})", c.pam_position, c.pam);
            println!("GC Content: {:.1}%", c.gc_content);
        }
    }
}

fn print_pam_report(r: &PamReport) {
    println!("Sequence length: {} bp", r.length);
    println!("GC content: {:.1}%", r.gc_content);
    if let Some(s) = &r.replacement {
        println!("\nNo PAM window fits; analysing a generated sequence instead:\n{s}");
    }
    println!("\nFound {} PAM sites", r.sites.len());
    for (i, s) in r.sites.iter().enumerate() {
        println!("\nPAM Site {}:", i + 1);
        println!("Position: {}", s.site.position);
        println!("PAM sequence: {}", s.site.pam);
        println!("Guide RNA: {}", s.site.guide);
        println!("GC content: {:.1}%", s.site.gc_content);
        println!("Binding prediction: {}", s.binding);
        println!("Context: {}", s.context);
        println!("Potential off-target sites (1 mismatch):");
        for (j, v) in s.off_targets.iter().enumerate() {
            println!("Position {}: {v}", j + 1);
        }
    }
}

fn cmd_list_genes() -> anyhow::Result<()> {
    let gs = genes::list_genes();
    let symbols: Vec<&str> = gs.iter().map(|g| g.symbol).collect();
    let descs: Vec<&str> = gs.iter().map(|g| g.description).collect();
    let lens: Vec<u64> = gs
        .iter()
        .map(|g| g.sequence().map(|s| s.len() as u64))
        .collect::<motifscan::Result<_>>()?;
    let muts: Vec<String> = gs.iter().map(|g| g.common_mutations.join(", ")).collect();

    let df = df!(
        "gene" => symbols,
        "description" => descs,
        "length" => lens,
        "common_mutations" => muts,
    )?;

    std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
    std::env::set_var("POLARS_FMT_STR_LEN", "100000");
    std::env::set_var("POLARS_TABLE_WIDTH", "65535");
    println!("{}", df);
    Ok(())
}

fn cmd_gene(symbol: &str, pml: Option<String>, json: bool) -> anyhow::Result<()> {
    let report = genes::analyze_gene(symbol)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Tumor gene analysis for {}:", report.symbol);
        println!("Description: {}", report.description);
        println!("Sequence length: {} nucleotides", report.length);
        println!("GC content: {:.2}%", report.gc_content);
        println!("\nPotential mutation sites:");
        for h in &report.hotspots {
            println!("Position {}: {}", h.position, h.matched);
        }
        println!("\nCommon mutations:");
        for m in report.common_mutations {
            println!("- {m}");
        }
    }

    if let Some(path) = pml {
        let file = std::fs::File::create(&path).with_context(|| format!("creating {path}"))?;
        let mut script = PymolScript::new(std::io::BufWriter::new(file));
        script.scaffold(report.symbol)?;
        let n = highlight_sites(&mut script, report.symbol, &report.hotspots, "red")?;
        script.into_inner().flush()?;
        info!(path = %path, highlights = n, "wrote PyMOL script");
    }
    Ok(())
}
