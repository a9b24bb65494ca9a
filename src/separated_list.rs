use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses at least one item, followed by zero or more occurrences of
/// (separator + item), and yields a vector of the items. A separator with no
/// item after it is backtracked whole: the separator's consumption is
/// undone and the list ends before it.
#[derive(Debug, Clone)]
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        // The first item is required
        let (first_value, mut cursor) = match self.parser.parse(cursor)? {
            Some(result) => result,
            None => return Ok(None),
        };
        results.push(first_value);

        loop {
            let after_separator = match self.separator.parse(cursor)? {
                Some((_, next_cursor)) => next_cursor,
                None => break,
            };

            match self.parser.parse(after_separator)? {
                Some((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                // Trailing separator: leave it unconsumed
                None => break,
            }
        }

        Ok(Some((results, cursor)))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}
