//! Inline role syntax parsing: `:name[content]{attrs}`

/// One role occurrence found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedRole<'a> {
    pub(crate) name: &'a str,
    pub(crate) content: &'a str,
    pub(crate) attrs: &'a str,
    /// Byte offset of the leading colon.
    pub(crate) start: usize,
    /// Byte offset just past the occurrence.
    pub(crate) end: usize,
}

impl<'a> ParsedRole<'a> {
    /// The occurrence exactly as written.
    pub(crate) fn raw_text(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

/// Find the first role occurrence in `line`.
///
/// A role starts with a single colon (runs of two or more colons are not
/// roles) directly followed by a valid name and a `[content]` group. Colons
/// that do not start a role, such as `Note: ...` or `https://...`, are
/// skipped, and so is everything inside an inline code span.
pub(crate) fn parse_line(line: &str) -> Option<ParsedRole<'_>> {
    let bytes = line.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'`' => {
                let run = run_length(&line[pos..], '`');
                pos = skip_code_span(line, pos + run, run).unwrap_or(pos + run);
            }
            b':' => {
                let run = run_length(&line[pos..], ':');
                if run == 1
                    && let Some(role) = parse_at(line, pos)
                {
                    return Some(role);
                }
                pos += run;
            }
            _ => pos += 1,
        }
    }

    None
}

/// Number of consecutive `c` at the start of `s`.
fn run_length(s: &str, c: char) -> usize {
    s.chars().take_while(|&ch| ch == c).count()
}

/// Find the end of a code span opened by `run` backticks.
///
/// The span closes at the next run of exactly `run` backticks. Returns the
/// offset just past it, or `None` if the span is never closed (the opening
/// backticks are then literal text).
fn skip_code_span(line: &str, from: usize, run: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(offset) = line[pos..].find('`') {
        let start = pos + offset;
        let len = run_length(&line[start..], '`');
        if len == run {
            return Some(start + len);
        }
        pos = start + len;
    }
    None
}

/// Parse a role whose colon is at `start`.
fn parse_at(line: &str, start: usize) -> Option<ParsedRole<'_>> {
    let name_start = start + 1;
    let after_colon = &line[name_start..];

    let name_len = after_colon
        .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
        .unwrap_or(after_colon.len());
    let name = &after_colon[..name_len];
    if !is_valid_role_name(name) {
        return None;
    }

    let mut pos = name_start + name_len;

    // The content group is what makes it a role; `:name` alone is prose.
    let (content, consumed) = parse_delimited(&line[pos..], '[', ']');
    if consumed == 0 {
        return None;
    }
    pos += consumed;

    let (attrs, consumed) = parse_delimited(&line[pos..], '{', '}');
    pos += consumed;

    Some(ParsedRole {
        name,
        content,
        attrs,
        start,
        end: pos,
    })
}

/// Valid names contain only alphanumeric characters, hyphens, and underscores.
fn is_valid_role_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Parse a nested `open ... close` group at the start of `s`.
///
/// Returns (inner text, bytes consumed); an absent or unclosed group
/// consumes nothing.
fn parse_delimited(s: &str, open: char, close: char) -> (&str, usize) {
    if !s.starts_with(open) {
        return ("", 0);
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return (&s[open.len_utf8()..i], i + close.len_utf8());
            }
        }
    }

    ("", 0)
}
