use anyhow::{Context, Error};
use chrono::Utc;
use clap::Parser;
use glob::Pattern;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::warn;
use serde_json::to_string_pretty;
use std::env;
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use reusescan::cli::Cli;
use reusescan::models::{ExtraData, Header, OUTPUT_FORMAT_VERSION, Output, SystemEnvironment};
use reusescan::utils::file::is_path_excluded;
use reusescan::{ResolveOptionsBuilder, ResolveResult, Resolver, resolve_all};

fn main() -> std::io::Result<()> {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    let multi_progress = init_logging()?;
    let start_time = Utc::now();

    let exclude_patterns = compile_exclude_patterns(&cli.exclude);
    println!("Exclusion patterns: {:?}", cli.exclude);

    let candidates = read_candidates(&cli.files)?;
    let (paths, excluded_count) = filter_candidates(candidates, &exclude_patterns);
    println!(
        "Resolving {} files ({} excluded)",
        paths.len(),
        excluded_count
    );

    let root = fs::canonicalize(&cli.root)
        .with_context(|| format!("Repository root {} is not accessible", cli.root))?;
    let mut options = ResolveOptionsBuilder::default();
    options.dep5_path(cli.dep5_path.as_str());
    if let Some(max_lines) = cli.max_lines {
        options.max_lines(max_lines);
    }
    let resolver = Resolver::new(&root, options.build()?)?;
    let dep5_manifest = resolver
        .manifest()
        .map(|_| resolver.root().join(&cli.dep5_path).display().to_string());

    let progress_bar = multi_progress.add(create_progress_bar(paths.len())?);
    let result = resolve_all(&resolver, &paths, &progress_bar);
    progress_bar.finish_with_message("Resolution complete!");

    let end_time = Utc::now();
    let output = create_output(start_time, end_time, result, excluded_count, dep5_manifest);
    write_output(&cli.output_file, &output)?;

    println!("JSON output written to {}", cli.output_file);
    Ok(())
}

fn init_logging() -> Result<MultiProgress, Error> {
    let logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .build();
    let level = logger.filter();
    let multi_progress = MultiProgress::new();

    LogWrapper::new(multi_progress.clone(), logger).try_init()?;
    log::set_max_level(level);
    Ok(multi_progress)
}

fn compile_exclude_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|pattern| match Pattern::new(pattern) {
            Ok(compiled) => Some(compiled),
            Err(err) => {
                warn!("Ignoring invalid exclude pattern {:?}: {}", pattern, err);
                None
            }
        })
        .collect()
}

/// Candidate paths from the command line, or one per line from stdin.
fn read_candidates(files: &[String]) -> Result<Vec<String>, Error> {
    if !files.is_empty() {
        return Ok(files.to_vec());
    }

    let mut candidates = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read candidate paths from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            candidates.push(line.to_string());
        }
    }
    Ok(candidates)
}

fn filter_candidates(candidates: Vec<String>, exclude_patterns: &[Pattern]) -> (Vec<PathBuf>, usize) {
    let total = candidates.len();
    let paths: Vec<PathBuf> = candidates
        .into_iter()
        .map(PathBuf::from)
        .filter(|path| !is_path_excluded(path, exclude_patterns))
        .collect();
    let excluded_count = total - paths.len();
    (paths, excluded_count)
}

fn create_progress_bar(total_files: usize) -> Result<ProgressBar, Error> {
    let progress_bar = ProgressBar::new(total_files as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files resolved ({eta})")?
            .progress_chars("#>-"),
    );
    Ok(progress_bar)
}

fn create_output(
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    result: ResolveResult,
    excluded_count: usize,
    dep5_manifest: Option<String>,
) -> Output {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    let extra_data = ExtraData {
        files_count: result.files.len(),
        excluded_count,
        dep5_manifest,
        system_environment: SystemEnvironment {
            operating_system: sys_info::os_type().ok(),
            cpu_architecture: env::consts::ARCH.to_string(),
            platform: format!(
                "{}-{}-{}",
                sys_info::os_type().unwrap_or_else(|_| "unknown".to_string()),
                sys_info::os_release().unwrap_or_else(|_| "unknown".to_string()),
                env::consts::ARCH
            ),
            rust_version: rustc_version_runtime::version().to_string(),
        },
    };

    let errors = result
        .errors
        .iter()
        .map(|error| format!("{}: {}", error.path, error.message))
        .collect();

    Output {
        headers: vec![Header {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            extra_data,
            errors,
            output_format_version: OUTPUT_FORMAT_VERSION.to_string(),
        }],
        files: result.files,
        license_identifiers: result.license_identifiers,
    }
}

fn write_output(output_file: &str, output: &Output) -> Result<(), Error> {
    let json_output = to_string_pretty(output)?;
    let mut file =
        File::create(output_file).with_context(|| format!("Failed to create {}", output_file))?;
    file.write_all(json_output.as_bytes())?;
    Ok(())
}
