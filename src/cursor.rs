use crate::error::SourceLoc;
use regex::Regex;

/// Immutable position into a source string
///
/// A cursor never moves: every successful match produces a new cursor past
/// the consumed text, so any saved copy remains a valid backtracking point.
/// `offset` is a byte offset, always on a UTF-8 boundary and never past the
/// end of `text`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    text: &'code str,
    offset: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `text`
    pub fn new(text: &'code str) -> Self {
        Cursor { text, offset: 0 }
    }

    /// The full source text this cursor points into
    pub fn text(&self) -> &'code str {
        self.text
    }

    /// Current byte offset into the source text
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The not-yet-consumed tail of the source text
    pub fn rest(&self) -> &'code str {
        &self.text[self.offset..]
    }

    /// Check if the cursor is at the end of the source text
    pub fn eos(&self) -> bool {
        self.offset == self.text.len()
    }

    /// Location of this cursor for error reporting
    pub fn loc(&self) -> SourceLoc<'code> {
        SourceLoc::new(self.text, self.offset)
    }

    /// Anchored match: `regex` must match starting exactly at the cursor
    ///
    /// Returns the matched slice and the cursor advanced past it, or `None`
    /// when the regex does not match at this position. A leftmost match that
    /// starts later than the cursor is rejected, so patterns need no explicit
    /// `\A` anchor. Zero-length matches are legal and leave the cursor in
    /// place.
    pub fn match_anchored(&self, regex: &Regex) -> Option<(&'code str, Cursor<'code>)> {
        let found = regex.find(self.rest())?;
        if found.start() != 0 {
            return None;
        }
        let end = self.offset + found.end();
        let matched = &self.text[self.offset..end];
        Some((
            matched,
            Cursor {
                text: self.text,
                offset: end,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_match_at_start() {
        let cursor = Cursor::new("hello world");
        let (value, next) = cursor.match_anchored(&regex("[a-z]+")).unwrap();
        assert_eq!(value, "hello");
        assert_eq!(next.offset(), 5);
        assert_eq!(next.rest(), " world");
    }

    #[test]
    fn test_match_mid_text() {
        let cursor = Cursor::new("hello world");
        let (_, cursor) = cursor.match_anchored(&regex("hello ")).unwrap();
        let (value, next) = cursor.match_anchored(&regex("[a-z]+")).unwrap();
        assert_eq!(value, "world");
        assert!(next.eos());
    }

    #[test]
    fn test_match_is_anchored() {
        // "world" occurs later in the text but not at the cursor
        let cursor = Cursor::new("hello world");
        assert!(cursor.match_anchored(&regex("world")).is_none());
    }

    #[test]
    fn test_match_never_rewinds() {
        let cursor = Cursor::new("aaa");
        let (_, next) = cursor.match_anchored(&regex("a")).unwrap();
        assert!(next.offset() > cursor.offset());
        let (_, next) = next.match_anchored(&regex("a*")).unwrap();
        assert_eq!(next.offset(), 3);
    }

    #[test]
    fn test_zero_length_match() {
        let cursor = Cursor::new("abc");
        let (value, next) = cursor.match_anchored(&regex("x*")).unwrap();
        assert_eq!(value, "");
        assert_eq!(next.offset(), cursor.offset());
    }

    #[test]
    fn test_match_at_eos() {
        let cursor = Cursor::new("ab");
        let (_, cursor) = cursor.match_anchored(&regex("ab")).unwrap();
        assert!(cursor.eos());
        assert!(cursor.match_anchored(&regex("[a-z]")).is_none());
        // Zero-length patterns still match at the end
        assert!(cursor.match_anchored(&regex("[a-z]*")).is_some());
    }

    #[test]
    fn test_empty_text() {
        let cursor = Cursor::new("");
        assert!(cursor.eos());
        assert!(cursor.match_anchored(&regex("a")).is_none());
    }

    #[test]
    fn test_value_equals_consumed_slice() {
        let text = "foo123bar";
        let cursor = Cursor::new(text);
        let (_, cursor) = cursor.match_anchored(&regex("foo")).unwrap();
        let (value, next) = cursor.match_anchored(&regex("[0-9]+")).unwrap();
        assert_eq!(value, &text[cursor.offset()..next.offset()]);
    }

    #[test]
    fn test_copy_independence() {
        let cursor = Cursor::new("xyz");
        let saved = cursor;
        let (_, advanced) = cursor.match_anchored(&regex("xy")).unwrap();
        assert_eq!(saved.offset(), 0);
        assert_eq!(advanced.offset(), 2);
        // The saved copy still parses from the original position
        let (value, _) = saved.match_anchored(&regex("x")).unwrap();
        assert_eq!(value, "x");
    }

    #[test]
    fn test_multibyte_text() {
        let cursor = Cursor::new("héllo");
        let (value, next) = cursor.match_anchored(&regex("h.")).unwrap();
        assert_eq!(value, "hé");
        // é is two bytes in UTF-8
        assert_eq!(next.offset(), 3);
        assert_eq!(next.rest(), "llo");
    }
}
