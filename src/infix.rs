use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Left-associative binary expression parser for one precedence level
///
/// Parses one term, then zero or more (operator, term) pairs, folding every
/// pair onto the accumulated left subtree: `1 + 2 + 3` becomes `(1+2)+3`.
/// The operator parser yields the function that joins two terms, so the
/// combinator stays grammar-agnostic; a grammar maps each operator token to
/// a plain `fn` item and `or`s the alternatives together as
/// `fn(T, T) -> T`. Precedence levels are layered by using a tighter
/// `Infix` as the term parser of a looser one.
///
/// A pair is backtracked whole: when the operator matches but the following
/// term does not, the operator's consumption is undone and the expression
/// ends before it.
#[derive(Debug, Clone)]
pub struct Infix<OP, TP> {
    op: OP,
    term: TP,
}

impl<OP, TP> Infix<OP, TP> {
    pub fn new(op: OP, term: TP) -> Self {
        Infix { op, term }
    }
}

impl<'code, OP, TP, F, T> Parser<'code> for Infix<OP, TP>
where
    OP: Parser<'code, Output = F>,
    TP: Parser<'code, Output = T>,
    F: Fn(T, T) -> T,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (mut left, mut cursor) = match self.term.parse(cursor)? {
            Some(result) => result,
            None => return Ok(None),
        };

        loop {
            let (combine, after_op) = match self.op.parse(cursor)? {
                Some(result) => result,
                None => break,
            };
            let (right, after_term) = match self.term.parse(after_op)? {
                Some(result) => result,
                // Operator without a term: backtrack the whole pair
                None => break,
            };
            left = combine(left, right);
            cursor = after_term;
        }

        Ok(Some((left, cursor)))
    }
}

/// Convenience function to create an Infix parser
pub fn infix<'code, OP, TP, F, T>(op: OP, term: TP) -> Infix<OP, TP>
where
    OP: Parser<'code, Output = F>,
    TP: Parser<'code, Output = T>,
    F: Fn(T, T) -> T,
{
    Infix::new(op, term)
}
