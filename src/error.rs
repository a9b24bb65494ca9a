use std::borrow::Cow;
use thiserror::Error;

/// Line number and byte offset within that line
///
/// We report the byte offset within the line rather than a column number:
/// columns depend on encoding, tab width and rendering, while the byte
/// offset is unambiguous.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub offset_in_line: usize,
}

/// Location of a parse event in the source text
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SourceLoc<'code> {
    text: &'code str,
    offset: usize,
}

impl<'code> SourceLoc<'code> {
    pub fn new(text: &'code str, offset: usize) -> Self {
        SourceLoc { text, offset }
    }

    /// Absolute byte offset into the source text
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Calculate the line number and the byte offset within that line
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, ch) in self.text.char_indices() {
            if i >= self.offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            offset_in_line: self.offset - line_start,
        }
    }

    /// Lines of context around the location: up to two lines on either side,
    /// with a pointer under the offending position
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let mut lines = Vec::new();

        for (index, content) in self.text.split('\n').enumerate() {
            let number = index + 1;
            if number + 2 < pos.line || number > pos.line + 2 {
                continue;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.offset_in_line;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl std::fmt::Display for SourceLoc<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pos = self.readable_position();
        write!(
            f,
            "line {}, offset {} (absolute position {})",
            pos.line, pos.offset_in_line, self.offset
        )
    }
}

/// Fatal parse errors
///
/// The recoverable no-match is `Ok(None)` in [`crate::ParseResult`];
/// combinators backtrack from it. These variants instead abort the parse and
/// propagate to the caller unconditionally.
#[derive(Debug, Clone, Error)]
pub enum ParseError<'code> {
    /// A grammar slot that must never match was exercised: the `fatal`
    /// primitive, or a forward reference used before its definition
    #[error("grammar error at {loc}: {message}")]
    Grammar {
        message: Cow<'static, str>,
        loc: SourceLoc<'code>,
    },

    /// Nothing matched at the start of the input
    #[error("parse error at {loc}: no match")]
    NoMatch { loc: SourceLoc<'code> },

    /// A match succeeded but did not consume the whole input
    #[error("parse error at {loc}: unconsumed input")]
    Incomplete { loc: SourceLoc<'code> },

    /// The pattern handed to `regexp` failed to compile
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl<'code> ParseError<'code> {
    /// Location of the failure, if the error carries one
    pub fn loc(&self) -> Option<SourceLoc<'code>> {
        match self {
            ParseError::Grammar { loc, .. } => Some(*loc),
            ParseError::NoMatch { loc } => Some(*loc),
            ParseError::Incomplete { loc } => Some(*loc),
            ParseError::Pattern { .. } => None,
        }
    }

    /// Absolute byte offset at which the failure was detected
    pub fn offset(&self) -> Option<usize> {
        self.loc().map(|loc| loc.offset())
    }

    /// Multi-line report: the error message followed by source context lines
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        if let Some(loc) = self.loc() {
            for line in loc.context_lines() {
                out.push('\n');
                out.push_str(&line);
            }
        }
        out
    }
}
