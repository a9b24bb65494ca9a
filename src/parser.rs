use crate::cursor::Cursor;
use crate::error::ParseError;

/// Outcome of a single parse attempt
///
/// `Ok(Some((value, next)))` is a match: the produced value and the cursor
/// positioned just past the consumed text. `Ok(None)` is a recoverable
/// no-match that choice combinators backtrack from. `Err` carries a fatal
/// [`ParseError`] and always propagates to the caller.
pub type ParseResult<'code, T> = Result<Option<(T, Cursor<'code>)>, ParseError<'code>>;

/// Core parser trait for parser combinators
///
/// A parser is a pure description of a grammar rule: parsing never mutates
/// the parser or the cursor. The one exception is the late-bound forward
/// reference, whose behavior is bound exactly once before any parse runs.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// A no-match must not consume input: callers retry alternatives from
    /// the same cursor they passed in.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}
