//! pdf2outline - Infer PDF titles and heading outlines
//!
//! A command line tool that scans an input directory for PDF files,
//! infers each document's title and H1/H2/H3 outline from its visual
//! layout, and writes one JSON record per input file to an output
//! directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use rayon::prelude::*;
use sucre_core::api::extract_structure_from_file;
use sucre_core::params::{ExclusionRules, OutlineParams};
use tracing::{error, info, warn};

/// Exclusion rule set applied to classified headings.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ExclusionSet {
    /// Length and numbered-item filters only (default)
    #[default]
    Lenient,
    /// Additionally drop "(a)"-style markers and trailing-colon lines
    Strict,
}

/// A command line tool for inferring PDF titles and heading outlines
/// from visual layout and writing them as JSON.
#[derive(Parser, Debug)]
#[command(name = "pdf2outline")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory scanned for input PDF files (created if absent)
    #[arg(short = 'i', long, default_value = "input")]
    input_dir: PathBuf,

    /// Directory JSON results are written to (created if absent)
    #[arg(short = 'o', long, default_value = "output")]
    output_dir: PathBuf,

    /// Exclusion rule set for heading post-filtering
    #[arg(long, value_enum, default_value = "lenient")]
    exclusions: ExclusionSet,

    /// Suppress outlines that do not look structured (fewer than three
    /// headings, or all headings on one page)
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Abort the whole batch on the first failed file instead of
    /// skipping it
    #[arg(long, action = ArgAction::SetTrue)]
    abort_on_error: bool,

    /// Leave stray PDFs in the working directory instead of moving them
    /// into the input directory
    #[arg(long, action = ArgAction::SetTrue)]
    no_collect: bool,

    /// Number of documents processed in parallel
    #[arg(short = 'j', long, default_value = "1")]
    threads: usize,

    /// Soft per-document time budget in seconds; documents exceeding it
    /// are reported as failures
    #[arg(long)]
    time_budget: Option<u64>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_params(args: &Args) -> OutlineParams {
    OutlineParams {
        exclusions: match args.exclusions {
            ExclusionSet::Lenient => ExclusionRules::lenient(),
            ExclusionSet::Strict => ExclusionRules::strict(),
        },
        strict_outline: args.strict,
        ..OutlineParams::default()
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Output file name for an input document: same stem, `.json` extension.
fn json_name(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("document");
    PathBuf::from(format!("{stem}.json"))
}

/// Moves PDF files sitting in the working directory into the input
/// directory, so a bare drop-and-run invocation picks them up.
fn collect_stray_pdfs(input_dir: &Path) -> Result<usize> {
    let cwd = Path::new(".");
    if let (Ok(a), Ok(b)) = (cwd.canonicalize(), input_dir.canonicalize()) {
        if a == b {
            return Ok(0);
        }
    }

    let mut moved = 0;
    for entry in fs::read_dir(cwd).context("failed to read working directory")? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() || !is_pdf(&path) {
            continue;
        }

        let Some(name) = path.file_name() else {
            continue;
        };
        let target = input_dir.join(name);
        fs::rename(&path, &target)
            .with_context(|| format!("failed to move {} into {}", path.display(), input_dir.display()))?;
        info!("moved {} to {}", path.display(), input_dir.display());
        moved += 1;
    }

    Ok(moved)
}

/// All PDF files in the input directory, sorted for a stable batch
/// order.
fn discover_pdfs(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)
        .with_context(|| format!("failed to read input directory {}", input_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && is_pdf(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn process_file(
    path: &Path,
    output_dir: &Path,
    params: &OutlineParams,
    time_budget: Option<u64>,
) -> Result<()> {
    info!("processing {}", path.display());
    let started = Instant::now();

    let structure = extract_structure_from_file(path, params)
        .with_context(|| format!("failed to process {}", path.display()))?;

    let elapsed = started.elapsed();
    if let Some(secs) = time_budget {
        if elapsed > Duration::from_secs(secs) {
            bail!(
                "{} exceeded the time budget ({:.1}s > {}s)",
                path.display(),
                elapsed.as_secs_f64(),
                secs
            );
        }
    }

    let out_path = output_dir.join(json_name(path));
    let json = serde_json::to_string_pretty(&structure)?;
    fs::write(&out_path, json)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    info!(
        headings = structure.outline.len(),
        "done: {}",
        out_path.display()
    );
    Ok(())
}

fn run_batch(args: &Args, files: &[PathBuf], params: &OutlineParams) -> Result<usize> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads.max(1))
        .build()
        .context("failed to build worker pool")?;

    let failures = AtomicUsize::new(0);
    pool.install(|| -> Result<()> {
        if args.abort_on_error {
            files.par_iter().try_for_each(|file| {
                process_file(file, &args.output_dir, params, args.time_budget)
            })
        } else {
            files.par_iter().for_each(|file| {
                if let Err(err) = process_file(file, &args.output_dir, params, args.time_budget) {
                    error!("{err:#}; skipping");
                    failures.fetch_add(1, Ordering::Relaxed);
                }
            });
            Ok(())
        }
    })?;

    Ok(failures.into_inner())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let params = build_params(&args);

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("failed to create output directory {}", args.output_dir.display())
    })?;
    fs::create_dir_all(&args.input_dir).with_context(|| {
        format!("failed to create input directory {}", args.input_dir.display())
    })?;

    if !args.no_collect {
        collect_stray_pdfs(&args.input_dir)?;
    }

    let files = discover_pdfs(&args.input_dir)?;
    if files.is_empty() {
        info!("no PDF files found in {}", args.input_dir.display());
        return Ok(());
    }

    info!(files = files.len(), "starting batch");
    let failed = run_batch(&args, &files, &params)?;
    if failed > 0 {
        warn!(failed, total = files.len(), "batch finished with failures");
    } else {
        info!(total = files.len(), "batch finished");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_name_replaces_extension() {
        assert_eq!(
            json_name(Path::new("input/report.pdf")),
            PathBuf::from("report.json")
        );
        assert_eq!(
            json_name(Path::new("Weird.Name.PDF")),
            PathBuf::from("Weird.Name.json")
        );
    }

    #[test]
    fn pdf_detection_is_case_insensitive() {
        assert!(is_pdf(Path::new("a.pdf")));
        assert!(is_pdf(Path::new("a.PDF")));
        assert!(!is_pdf(Path::new("a.pdf.txt")));
        assert!(!is_pdf(Path::new("nodot")));
    }

    #[test]
    fn discover_ignores_non_pdfs_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.PDF", "notes.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.pdf")).unwrap();

        let found = discover_pdfs(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.PDF", "b.pdf"]);
    }
}
