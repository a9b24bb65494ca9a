//! Property tests for the cursor and combinator laws.

use proptest::prelude::*;
use recomb::{Cursor, Parser, many, maybe, or, regexp};
use regex::Regex;

/// Advance a cursor to `offset` by matching exactly that many characters
fn cursor_at(text: &str, offset: usize) -> Cursor<'_> {
    let cursor = Cursor::new(text);
    if offset == 0 {
        return cursor;
    }
    let skip = Regex::new(&format!("[a-z0-9 ]{{{}}}", offset)).unwrap();
    cursor.match_anchored(&skip).unwrap().1
}

proptest! {
    #[test]
    fn anchored_match_never_rewinds(text in "[a-z0-9 ]{0,40}", offset in 0usize..=40) {
        let offset = offset.min(text.len());
        let start = cursor_at(&text, offset);
        let letters = Regex::new("[a-z]+").unwrap();

        if let Some((value, next)) = start.match_anchored(&letters) {
            prop_assert!(next.offset() >= start.offset());
            prop_assert_eq!(value, &text[start.offset()..next.offset()]);
        }
    }

    #[test]
    fn many_is_total_and_counts_matches(text in "[ab]{0,30}") {
        let parser = many(regexp("a"));
        let (values, next) = parser.parse(Cursor::new(&text)).unwrap().unwrap();

        let leading = text.chars().take_while(|&c| c == 'a').count();
        prop_assert_eq!(values.len(), leading);
        prop_assert_eq!(next.offset(), leading);
    }

    #[test]
    fn maybe_never_fails(text in "[a-z!]{0,20}") {
        let parser = maybe(regexp("[a-z]+"));
        prop_assert!(parser.parse(Cursor::new(&text)).unwrap().is_some());
    }

    #[test]
    fn or_is_left_biased(text in "a{0,5}b{0,3}") {
        let choice = or(regexp("a"), regexp("a+"));
        let first_alone = regexp("a").parse(Cursor::new(&text)).unwrap();

        let result = choice.parse(Cursor::new(&text)).unwrap();
        if first_alone.is_some() {
            prop_assert_eq!(result, first_alone);
        }
    }
}
