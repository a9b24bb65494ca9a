use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use regex::Regex;

/// Parser that matches a regex anchored at the cursor and yields the matched
/// text
///
/// The construction is infallible; a pattern that fails to compile is
/// reported as a fatal [`ParseError::Pattern`] the first time the parser
/// runs.
#[derive(Debug, Clone)]
pub struct Regexp {
    pattern: String,
    compiled: Result<Regex, regex::Error>,
}

impl Regexp {
    pub fn new(pattern: &str) -> Self {
        Regexp {
            pattern: pattern.to_string(),
            compiled: Regex::new(pattern),
        }
    }
}

impl<'code> Parser<'code> for Regexp {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let regex = match &self.compiled {
            Ok(regex) => regex,
            Err(source) => {
                return Err(ParseError::Pattern {
                    pattern: self.pattern.clone(),
                    source: source.clone(),
                });
            }
        };
        Ok(cursor.match_anchored(regex))
    }
}

/// Convenience function to create a Regexp parser
pub fn regexp(pattern: &str) -> Regexp {
    Regexp::new(pattern)
}
