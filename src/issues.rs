use std::{cmp::Ordering, fmt};

/// Which diagnostic message applies to a reported node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageKind {
    /// A plain string or template literal.
    Default,
    /// Bare text between JSX tags.
    ForJsxText,
    /// A JSX attribute value. Reserved: attribute values that survive
    /// exemption currently fall through to the string-literal check and
    /// report `Default`.
    ForAttribute,
}

impl MessageKind {
    /// Suggestion shown under the diagnostic.
    pub fn help(&self) -> &'static str {
        match self {
            MessageKind::Default => "wrap it with t``, <Trans>, or msg``",
            MessageKind::ForJsxText => "wrap it with <Trans>",
            MessageKind::ForAttribute => "wrap it with t`` from the useLingui() macro hook",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Default => write!(f, "unlocalized-string"),
            MessageKind::ForJsxText => write!(f, "unlocalized-jsx-text"),
            MessageKind::ForAttribute => write!(f, "unlocalized-attribute"),
        }
    }
}

/// A single diagnostic: a string that is not marked for translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    /// The offending text as it appears in the source.
    pub text: String,
    pub kind: MessageKind,
    pub source_line: Option<String>,
}

impl Issue {
    pub fn new(
        file_path: &str,
        line: usize,
        col: usize,
        text: &str,
        kind: MessageKind,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            col,
            text: text.to_string(),
            kind,
            source_line,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Text is part of the key so that re-runs produce a stable order
        // even when two issues land on the same position.
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sort_by_position() {
        let mut issues = vec![
            Issue::new("b.tsx", 1, 1, "x", MessageKind::Default, None),
            Issue::new("a.tsx", 2, 5, "y", MessageKind::ForJsxText, None),
            Issue::new("a.tsx", 2, 3, "z", MessageKind::Default, None),
        ];
        issues.sort();

        assert_eq!(issues[0].text, "z");
        assert_eq!(issues[1].text, "y");
        assert_eq!(issues[2].file_path, "b.tsx");
    }

    #[test]
    fn test_sort_same_position_by_text() {
        let mut issues = vec![
            Issue::new("a.tsx", 1, 1, "b", MessageKind::Default, None),
            Issue::new("a.tsx", 1, 1, "a", MessageKind::Default, None),
        ];
        issues.sort();

        assert_eq!(issues[0].text, "a");
        assert_eq!(issues[1].text, "b");
    }

    #[test]
    fn test_message_kind_display() {
        assert_eq!(MessageKind::Default.to_string(), "unlocalized-string");
        assert_eq!(MessageKind::ForJsxText.to_string(), "unlocalized-jsx-text");
        assert_eq!(
            MessageKind::ForAttribute.to_string(),
            "unlocalized-attribute"
        );
    }
}
