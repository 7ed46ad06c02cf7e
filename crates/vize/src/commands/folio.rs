//! Folio command - Generate prop documentation for Vue components

use clap::{Args, ValueEnum};
use glob::glob;
use ignore::Walk;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use vize_carton::FxHashSet;
use vize_folio::{
    load_component, load_overlay, overlay_path_for, CanonicalDocument, CommonMark,
    DocumentationOverlay, Folio, FolioError,
};

use crate::config::FolioConfig;

const DEFAULT_PATTERN: &str = "./**/*.component.json";

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One compact JSON document per line
    #[default]
    Json,
    /// Indented JSON documents
    Pretty,
    /// Only show statistics (no output)
    Stats,
}

#[derive(Args, Default)]
pub struct FolioArgs {
    /// Glob pattern(s) or directories with component definition files
    #[arg(default_value = DEFAULT_PATTERN)]
    pub patterns: Vec<String>,

    /// Overlay file applied to every component (disables sibling overlay lookup)
    #[arg(short, long)]
    pub docs: Option<PathBuf>,

    /// Leave mixin-contributed props out of the documents
    #[arg(long)]
    pub ignore_mixins: bool,

    /// Write `<name>.doc.json` files to this directory instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Number of threads (default: number of CPUs)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Quiet mode - no summary
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Default)]
struct FolioStats {
    built: AtomicUsize,
    skipped: AtomicUsize,
    failed: AtomicUsize,
}

pub fn run(args: FolioArgs, config: &FolioConfig) {
    let start = Instant::now();

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            tracing::warn!("Failed to configure thread pool: {}", e);
        }
    }

    let patterns = if args.patterns.is_empty() {
        vec![DEFAULT_PATTERN.to_string()]
    } else {
        args.patterns.clone()
    };

    let files = collect_files(&patterns, config);
    if files.is_empty() {
        eprintln!(
            "No component files ({}) found matching patterns: {:?}",
            config.component_suffix, patterns
        );
        std::process::exit(1);
    }
    tracing::debug!("Found {} component files", files.len());

    let shared_overlay = match args.docs.as_deref().map(load_overlay).transpose() {
        Ok(overlay) => overlay,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let folio = Folio::new(CommonMark::new(config.markdown))
        .ignore_mixins(args.ignore_mixins || config.ignore_mixins);
    let stats = FolioStats::default();

    let documents: Vec<CanonicalDocument> = files
        .par_iter()
        .filter_map(|path| {
            match document_for(&folio, path, shared_overlay.as_ref(), config) {
                Ok(Some(doc)) => {
                    stats.built.fetch_add(1, Ordering::Relaxed);
                    Some(doc)
                }
                Ok(None) => {
                    stats.skipped.fetch_add(1, Ordering::Relaxed);
                    tracing::warn!("{} has no component name, skipping", path.display());
                    None
                }
                Err(e) => {
                    stats.failed.fetch_add(1, Ordering::Relaxed);
                    eprintln!("Error: {}", e);
                    None
                }
            }
        })
        .collect();

    if args.format != OutputFormat::Stats {
        match &args.output {
            Some(dir) => write_documents(dir, &documents, args.format, &stats),
            None => print_documents(&documents, args.format),
        }
    }

    let built = stats.built.load(Ordering::Relaxed);
    let skipped = stats.skipped.load(Ordering::Relaxed);
    let failed = stats.failed.load(Ordering::Relaxed);
    let elapsed = start.elapsed();

    if !args.quiet {
        if failed > 0 {
            eprintln!(
                "✗ {} file(s) failed, {} documented, {} skipped in {:.4}s",
                failed,
                built,
                skipped,
                elapsed.as_secs_f64()
            );
        } else {
            let doc_word = if built == 1 { "component" } else { "components" };
            eprintln!(
                "✓ {} {} documented ({} skipped) in {:.4}s",
                built,
                doc_word,
                skipped,
                elapsed.as_secs_f64()
            );
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

fn document_for(
    folio: &Folio<CommonMark>,
    path: &Path,
    shared_overlay: Option<&DocumentationOverlay>,
    config: &FolioConfig,
) -> Result<Option<CanonicalDocument>, FolioError> {
    let component = load_component(path)?;

    let sibling_overlay = match shared_overlay {
        Some(_) => None,
        None => overlay_path_for(path, &config.component_suffix, &config.overlay_suffix)
            .filter(|overlay_path| overlay_path.is_file())
            .map(|overlay_path| {
                tracing::debug!("Using overlay {}", overlay_path.display());
                load_overlay(&overlay_path)
            })
            .transpose()?,
    };

    Ok(folio.build(&component, shared_overlay.or(sibling_overlay.as_ref())))
}

fn serialize(doc: &CanonicalDocument, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Pretty => doc.to_json_pretty(),
        OutputFormat::Json | OutputFormat::Stats => doc.to_json(),
    }
}

fn print_documents(documents: &[CanonicalDocument], format: OutputFormat) {
    for doc in documents {
        match serialize(doc, format) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize {}: {}", doc.name, e),
        }
    }
}

fn write_documents(
    dir: &Path,
    documents: &[CanonicalDocument],
    format: OutputFormat,
    stats: &FolioStats,
) {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Failed to create {}: {}", dir.display(), e);
        std::process::exit(1);
    }

    let file_names = output_file_names(documents.iter().map(|doc| doc.name.as_str()));
    for (doc, file_name) in documents.iter().zip(file_names) {
        let out_path = dir.join(file_name);
        let written = serialize(doc, format)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(&out_path, json).map_err(|e| e.to_string()));

        if let Err(e) = written {
            stats.failed.fetch_add(1, Ordering::Relaxed);
            eprintln!("Failed to write {}: {}", out_path.display(), e);
        }
    }
}

/// Component name with characters unsafe in file names replaced.
fn output_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.trim_matches('.').is_empty() {
        "component".to_string()
    } else {
        stem
    }
}

/// One `<name>.doc.json` per document. Components sharing a name get
/// `-2`, `-3`, ... suffixes in input order instead of overwriting each other.
fn output_file_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken: FxHashSet<String> = FxHashSet::default();

    names
        .into_iter()
        .map(|name| {
            let stem = output_stem(name);
            let mut candidate = stem.clone();
            let mut n = 1;
            while !taken.insert(candidate.clone()) {
                n += 1;
                candidate = format!("{}-{}", stem, n);
            }
            if n > 1 {
                tracing::warn!(
                    "Component name {:?} is used more than once, writing {}.doc.json",
                    name,
                    candidate
                );
            }
            format!("{}.doc.json", candidate)
        })
        .collect()
}

fn collect_files(patterns: &[String], config: &FolioConfig) -> Vec<PathBuf> {
    let is_component = |path: &Path| {
        let name = path.to_string_lossy();
        name.ends_with(config.component_suffix.as_str())
            && !(config.overlay_suffix != config.component_suffix
                && name.ends_with(config.overlay_suffix.as_str()))
            && !path.components().any(|c| c.as_os_str() == "node_modules")
    };

    let mut files: Vec<PathBuf> = patterns
        .iter()
        .flat_map(|pattern| {
            // Check if pattern contains glob characters
            if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
                glob(pattern)
                    .ok()
                    .into_iter()
                    .flatten()
                    .filter_map(|r| r.ok())
                    .filter(|p| is_component(p))
                    .collect::<Vec<_>>()
            } else if Path::new(pattern).is_file() {
                // Explicit files are taken as they are
                vec![PathBuf::from(pattern)]
            } else {
                // Use directory walking for paths (respects .gitignore)
                Walk::new(pattern)
                    .filter_map(|e| e.ok())
                    .filter(|e| is_component(e.path()))
                    .map(|e| e.path().to_path_buf())
                    .collect::<Vec<_>>()
            }
        })
        .collect();

    files.sort();
    files.dedup();
    files
}
