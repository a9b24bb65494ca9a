use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that feeds the first parser's value into a callback
/// producing the next parser
///
/// This is the sequencing primitive: `and` and `map` are specializations.
/// The callback runs on every match, so it should be cheap to build the
/// follow-on parser.
#[derive(Debug, Clone)]
pub struct Bind<P, F> {
    parser: P,
    callback: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, callback: F) -> Self {
        Bind { parser, callback }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor)? {
            Some((value, cursor)) => (self.callback)(value).parse(cursor),
            None => Ok(None),
        }
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, callback: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, callback)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, callback: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, callback)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
