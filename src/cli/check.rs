//! The `check` command: scan, parse, and check files in parallel.

use std::{fs, path::Path};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::checker::UnlocalizedChecker;
use crate::cli::{CheckCommand, ExitStatus};
use crate::config::{CONFIG_FILE_NAME, CompiledOptions, Config, load_config};
use crate::issues::Issue;
use crate::parser::parse_source;
use crate::reporter::{print_parse_warning, print_report, print_success};
use crate::scanner::scan_files;

/// A file that could not be read or parsed. These are skipped, counted,
/// and surfaced as a warning; they do not affect the exit status.
#[derive(Debug, Clone)]
pub struct ParseFailure {
    pub file_path: String,
    pub error: String,
}

/// Aggregated result of checking a directory tree.
pub struct CheckOutcome {
    pub issues: Vec<Issue>,
    pub files_checked: usize,
    pub parse_failures: Vec<ParseFailure>,
}

pub fn check(cmd: &CheckCommand) -> Result<ExitStatus> {
    let loaded = load_config(&cmd.path)?;
    if cmd.verbose {
        if loaded.from_file {
            println!("Using configuration from {}", CONFIG_FILE_NAME);
        } else {
            println!("No {} found, using defaults", CONFIG_FILE_NAME);
        }
    }

    let config = if cmd.permissive {
        loaded.config.with_permissive_defaults()
    } else {
        loaded.config
    };

    let outcome = run_check(&cmd.path, &config, cmd.verbose)?;

    if cmd.verbose {
        for failure in &outcome.parse_failures {
            eprintln!(
                "{} Skipped {}: {}",
                "warning:".bold().yellow(),
                failure.file_path,
                failure.error
            );
        }
    }
    print_parse_warning(outcome.parse_failures.len(), cmd.verbose);

    if outcome.issues.is_empty() {
        print_success(outcome.files_checked);
        Ok(ExitStatus::Success)
    } else {
        print_report(&outcome.issues);
        Ok(ExitStatus::Failure)
    }
}

/// Check every source file under `path` and collect the results.
///
/// Files are checked in parallel; each file gets its own parse, source
/// map, and checker instance, so no state is shared between files. The
/// returned issues are sorted, making repeated runs over the same tree
/// produce identical output.
pub fn run_check(path: &Path, config: &Config, verbose: bool) -> Result<CheckOutcome> {
    // Compile patterns once, up front; a bad pattern is a hard error
    let options = config.compiled()?;

    let scan = scan_files(
        path,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
        verbose,
    );
    if scan.skipped_count > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            scan.skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    let results: Vec<Result<Vec<Issue>, ParseFailure>> = scan
        .files
        .par_iter()
        .map(|file_path| check_file(file_path, &options))
        .collect();

    let mut issues = Vec::new();
    let mut parse_failures = Vec::new();
    for result in results {
        match result {
            Ok(file_issues) => issues.extend(file_issues),
            Err(failure) => parse_failures.push(failure),
        }
    }
    issues.sort();
    parse_failures.sort_by(|a, b| a.file_path.cmp(&b.file_path));

    Ok(CheckOutcome {
        issues,
        files_checked: scan.files.len(),
        parse_failures,
    })
}

/// Check a single file. Returns the issues found, or a ParseFailure when
/// the file cannot be read or parsed.
pub fn check_file(file_path: &str, options: &CompiledOptions) -> Result<Vec<Issue>, ParseFailure> {
    let code = fs::read_to_string(file_path).map_err(|e| ParseFailure {
        file_path: file_path.to_string(),
        error: format!("Failed to read file: {}", e),
    })?;

    let parsed = parse_source(code, file_path).map_err(|e| ParseFailure {
        file_path: file_path.to_string(),
        error: e.to_string(),
    })?;

    let checker = UnlocalizedChecker::new(
        file_path,
        options,
        &parsed.source_map,
        &parsed.comments,
    );
    Ok(checker.check(&parsed.module))
}
