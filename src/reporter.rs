//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic so translint can be
//! used as a library without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issues::Issue;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in a cargo-style format.
///
/// Expects the issues to be pre-sorted. Each issue is displayed with a
/// clickable file location (path:line:col), the offending source line with
/// a caret indicator, and a wrap-it suggestion.
pub fn print_report(issues: &[Issue]) {
    let max_line_width = issues
        .iter()
        .map(|i| i.line.to_string().len())
        .max()
        .unwrap_or(1);

    for issue in issues {
        println!(
            "{}: \"{}\"  {}",
            "error".bold().red(),
            issue.text,
            issue.kind.to_string().dimmed().cyan()
        );

        println!(
            "  {} {}:{}:{}",
            "-->".blue(),
            issue.file_path,
            issue.line,
            issue.col
        );

        if let Some(source_line) = &issue.source_line {
            println!("{:>width$} {}", "", "|".blue(), width = max_line_width);
            println!(
                "{:>width$} {} {}",
                issue.line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );
            // Caret pointing to the column (col is 1-based). Use unicode
            // display width for correct positioning with CJK chars and emoji
            let prefix = if issue.col > 1 {
                source_line.chars().take(issue.col - 1).collect::<String>()
            } else {
                String::new()
            };
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            println!(
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                "^".red(),
                width = max_line_width,
                padding = caret_padding
            );
        }

        println!(
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "help:".bold().cyan(),
            issue.kind.help(),
            width = max_line_width
        );

        println!(); // Empty line between issues
    }

    let total = issues.len();
    if total > 0 {
        println!(
            "{} {} {} found",
            FAILURE_MARK.red(),
            total,
            if total == 1 { "error" } else { "errors" }.red()
        );
    }
}

/// Print a success message when no issues are found.
///
/// Displays the number of files checked to give the user confidence that
/// the check actually ran and covered the expected scope.
pub fn print_success(source_files: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no unlocalized strings found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
///
/// Shown at the end of a check run when files were skipped.
pub fn print_parse_warning(parse_error_count: usize, verbose: bool) {
    if parse_error_count > 0 && !verbose {
        eprintln!(
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            parse_error_count,
            "-v".cyan()
        );
    }
}
