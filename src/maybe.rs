use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator for an optional match
///
/// Yields `Some(value)` when the inner parser matches and `None` without
/// consuming input when it does not. Never fails recoverably.
#[derive(Debug, Clone)]
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'code, P> Parser<'code> for Maybe<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor)? {
            Some((value, cursor)) => Ok(Some((Some(value), cursor))),
            None => Ok(Some((None, cursor))),
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code, P>(parser: P) -> Maybe<P>
where
    P: Parser<'code>,
{
    Maybe::new(parser)
}
