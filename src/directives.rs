//! Suppression comments for translint diagnostics.
//!
//! Supported forms:
//! - `translint-disable-next-line` - skip reporting on the next line
//! - `translint-disable` / `translint-enable` - range-based skipping
//!
//! Works in both JS comments (`// translint-disable-next-line`) and JSX
//! comments (`{/* translint-disable-next-line */}`).

use std::collections::HashSet;

use swc_common::{SourceMap, comments::SingleThreadedComments};

/// Parsed translint directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Disable,
    Enable,
    DisableNextLine,
}

impl Directive {
    /// Parse a directive from comment text.
    /// Returns None if the comment is not a translint directive.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        // Order matters: check the longer prefix first
        if text.starts_with("translint-disable-next-line") {
            return Some(Self::DisableNextLine);
        }
        if text.starts_with("translint-disable") {
            return Some(Self::Disable);
        }
        if text.starts_with("translint-enable") {
            return Some(Self::Enable);
        }

        None
    }
}

/// Range of disabled lines, [start, end] inclusive.
#[derive(Debug, Clone, Copy)]
struct DisabledRange {
    start: usize,
    end: usize, // usize::MAX for open-ended
}

/// Tracks disabled lines for a single file.
#[derive(Debug, Default)]
pub struct DisableContext {
    disabled_lines: HashSet<usize>,
    disabled_ranges: Vec<DisabledRange>,
}

impl DisableContext {
    /// Check if reporting is suppressed on a line.
    pub fn should_ignore(&self, line: usize) -> bool {
        self.disabled_lines.contains(&line)
            || self
                .disabled_ranges
                .iter()
                .any(|r| line >= r.start && line <= r.end)
    }

    /// Build a DisableContext from a file's parsed comments.
    pub fn from_comments(comments: &SingleThreadedComments, source_map: &SourceMap) -> Self {
        let mut ctx = Self::default();
        let (leading, trailing) = comments.borrow_all();

        let mut directives: Vec<(usize, Directive)> = leading
            .iter()
            .chain(trailing.iter())
            .flat_map(|(_, cmts)| cmts.iter())
            .filter_map(|cmt| {
                Directive::parse(&cmt.text)
                    .map(|directive| (source_map.lookup_char_pos(cmt.span.lo).line, directive))
            })
            .collect();
        directives.sort_by_key(|(line, _)| *line);

        let mut open_range: Option<usize> = None;

        for (line, directive) in directives {
            match directive {
                Directive::Disable => {
                    // Consecutive disables keep the earliest start
                    open_range.get_or_insert(line);
                }
                Directive::Enable => {
                    if let Some(start) = open_range.take() {
                        ctx.disabled_ranges.push(DisabledRange {
                            start,
                            end: line.saturating_sub(1),
                        });
                    }
                }
                Directive::DisableNextLine => {
                    ctx.disabled_lines.insert(line + 1);
                }
            }
        }

        // An unmatched disable extends to the end of the file
        if let Some(start) = open_range {
            ctx.disabled_ranges.push(DisabledRange {
                start,
                end: usize::MAX,
            });
        }

        ctx
    }
}
