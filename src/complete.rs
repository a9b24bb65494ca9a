use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Extension trait that runs a parser over a whole input
pub trait ParseToCompletion<'code>: Parser<'code> {
    /// Parse from the start of `text`, requiring the entire input to be
    /// consumed
    ///
    /// Partial matches are rejected: a match that leaves input behind is a
    /// fatal [`ParseError::Incomplete`] carrying the residual offset, and no
    /// match at all is [`ParseError::NoMatch`].
    fn parse_to_completion(&self, text: &'code str) -> Result<Self::Output, ParseError<'code>> {
        let cursor = Cursor::new(text);
        match self.parse(cursor)? {
            None => Err(ParseError::NoMatch { loc: cursor.loc() }),
            Some((value, rest)) => {
                if rest.eos() {
                    Ok(value)
                } else {
                    Err(ParseError::Incomplete { loc: rest.loc() })
                }
            }
        }
    }
}

/// Implement ParseToCompletion for all parsers
impl<'code, P> ParseToCompletion<'code> for P where P: Parser<'code> {}
