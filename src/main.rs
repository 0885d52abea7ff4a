//! CLI entry point for fnsort

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use rayon::prelude::*;

use fnsort::{
    FileOutcome, FileReport, Language, SortError, file_utils, print_json, print_reports,
    sort_source,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fnsort")]
#[command(about = "Sorts the functions in a source file alphabetically")]
#[command(version)]
struct Args {
    /// Files or directories to process (reads stdin when omitted)
    paths: Vec<PathBuf>,

    /// Rewrite files in place instead of printing to stdout
    #[arg(short, long)]
    write: bool,

    /// Report which files would change, without rewriting anything
    #[arg(long, conflicts_with = "write")]
    check: bool,

    /// Language identifier: php, java, csharp, javascript, typescript
    /// (required for stdin; overrides extension detection for file arguments)
    #[arg(short, long, value_name = "ID")]
    language: Option<String>,

    /// Output the per-file report as JSON
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Number of parallel workers for batch processing
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Maximum file size to process (default: 1MB)
    /// Files larger than this are skipped. Use suffixes: K, M, G (e.g., 5M)
    #[arg(long = "max-file-size", value_name = "SIZE")]
    max_file_size: Option<String>,
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    Ok(num * multiplier)
}

/// Print a usage error and exit with the conventional CLI usage code.
fn usage_error(message: &str) -> ! {
    eprintln!("fnsort: {}", message);
    process::exit(2);
}

fn main() {
    let args = Args::parse();

    if let Some(ref size_str) = args.max_file_size {
        match parse_file_size(size_str) {
            Ok(size) => file_utils::set_max_file_size(size),
            Err(e) => usage_error(&format!("invalid --max-file-size '{}': {}", size_str, e)),
        }
    }

    let language_override = args.language.as_deref().map(|id| {
        Language::from_id(id).unwrap_or_else(|| {
            usage_error(&format!(
                "unsupported language '{}' (expected php, java, csharp, javascript, or typescript)",
                id
            ))
        })
    });

    if args.paths.is_empty() {
        sort_stdin(language_override);
        return;
    }

    let batch_mode = args.write || args.check;

    // Expand directories into their contained source files.
    let mut files: Vec<(PathBuf, Option<Language>)> = Vec::new();
    for path in &args.paths {
        if path.is_dir() {
            if !batch_mode {
                usage_error("directory arguments require --write or --check");
            }
            for file in collect_source_files(path) {
                files.push((file, None));
            }
        } else {
            files.push((path.clone(), language_override));
        }
    }

    if !batch_mode {
        if files.len() != 1 {
            usage_error("printing to stdout supports a single file; use --write or --check");
        }
        let (path, language) = &files[0];
        sort_to_stdout(path, *language);
        return;
    }

    let apply = args.write;
    let reports: Vec<FileReport> = if args.jobs == 1 || files.len() == 1 {
        files
            .iter()
            .map(|(path, language)| process_file(path, *language, apply))
            .collect()
    } else if args.jobs == 0 {
        // Auto-detect: use rayon's default thread pool
        files
            .par_iter()
            .map(|(path, language)| process_file(path, *language, apply))
            .collect()
    } else {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(args.jobs)
            .build()
        {
            Ok(pool) => pool.install(|| {
                files
                    .par_iter()
                    .map(|(path, language)| process_file(path, *language, apply))
                    .collect()
            }),
            Err(_) => {
                // Fall back to rayon's global pool if custom pool creation fails
                files
                    .par_iter()
                    .map(|(path, language)| process_file(path, *language, apply))
                    .collect()
            }
        }
    };

    let result = if args.json {
        print_json(&reports)
    } else {
        print_reports(&reports, should_use_color(args.color), args.check)
    };

    if let Err(e) = result {
        eprintln!("fnsort: error writing output: {}", e);
        process::exit(1);
    }

    let failed = reports.iter().any(|r| r.outcome.is_failure());
    let would_change = reports.iter().any(|r| r.outcome.would_change());
    if failed || (args.check && would_change) {
        process::exit(1);
    }
}

/// Sort text from stdin and print the result to stdout.
fn sort_stdin(language: Option<Language>) {
    let Some(language) = language else {
        usage_error("reading from stdin requires --language");
    };

    let mut text = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut text) {
        eprintln!("fnsort: error reading stdin: {}", e);
        process::exit(1);
    }

    emit_sorted(&text, language, "<stdin>");
}

/// Sort a single file and print the result to stdout.
fn sort_to_stdout(path: &Path, language: Option<Language>) {
    let Some(language) = language.or_else(|| Language::from_path(path)) else {
        eprintln!(
            "fnsort: '{}': language not supported for function sorting",
            path.display()
        );
        process::exit(1);
    };

    if file_utils::exceeds_size_limit(path) {
        eprintln!(
            "fnsort: '{}': skipped, file exceeds the size cap ({} bytes)",
            path.display(),
            file_utils::get_max_file_size()
        );
        process::exit(1);
    }

    let text = match file_utils::read_source_file(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("fnsort: cannot read '{}': {}", path.display(), e);
            process::exit(1);
        }
    };

    emit_sorted(&text, language, &path.display().to_string());
}

/// Print sorted text, passing the input through untouched when there is
/// nothing to sort.
fn emit_sorted(text: &str, language: Language, origin: &str) {
    match sort_source(text, language) {
        Ok(sorted) => print!("{}", sorted),
        Err(SortError::NoFunctionsFound) => {
            eprintln!("fnsort: {}: no functions found to sort", origin);
            print!("{}", text);
        }
        Err(e) => {
            eprintln!("fnsort: {}: {}", origin, e);
            process::exit(1);
        }
    }
}

/// Process one file for a `--write`/`--check` batch.
///
/// When `apply` is false the new text is computed and compared but never
/// written.
fn process_file(path: &Path, language: Option<Language>, apply: bool) -> FileReport {
    let Some(language) = language.or_else(|| Language::from_path(path)) else {
        return FileReport::new(path, FileOutcome::Unsupported);
    };

    if file_utils::exceeds_size_limit(path) {
        return FileReport::new(path, FileOutcome::Skipped);
    }

    let text = match file_utils::read_source_file(path) {
        Ok(text) => text,
        Err(e) => return FileReport::new(path, FileOutcome::Failed(e.to_string())),
    };

    match sort_source(&text, language) {
        Ok(sorted) if sorted == text => FileReport::new(path, FileOutcome::Unchanged),
        Ok(sorted) => {
            if apply {
                if let Err(e) = file_utils::write_source_file(path, &sorted) {
                    return FileReport::new(path, FileOutcome::Failed(e.to_string()));
                }
            }
            FileReport::new(path, FileOutcome::Sorted)
        }
        Err(SortError::NoFunctionsFound) => FileReport::new(path, FileOutcome::NoFunctions),
        Err(e) => FileReport::new(path, FileOutcome::Failed(e.to_string())),
    }
}

/// Walk a directory, honoring gitignore rules, and collect the files whose
/// extension maps into the supported language set.
fn collect_source_files(root: &Path) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).build().flatten() {
        let path = entry.path();
        if path.is_file() && Language::from_path(path).is_some() {
            files.push(path.to_path_buf());
        }
    }

    // Walk order is not stable across platforms; reports should be.
    files.sort();
    files
}
