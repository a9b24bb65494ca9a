use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given
/// parser
///
/// Always succeeds, possibly with an empty vector, and leaves the cursor at
/// the end of the last match. Termination policy for zero-width parsers: a
/// successful match that consumes nothing ends the repetition after its
/// value is recorded, so `many` cannot loop forever.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor)? {
                Some((value, next_cursor)) => {
                    let progressed = next_cursor.offset() > cursor.offset();
                    results.push(value);
                    cursor = next_cursor;
                    if !progressed {
                        break;
                    }
                }
                // Zero or more: a no-match ends the repetition
                None => break,
            }
        }

        Ok(Some((results, cursor)))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
