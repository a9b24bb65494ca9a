use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always raises a fatal grammar error
///
/// Placeholder for grammar slots that must never be reached, most notably a
/// rule that is used before its real definition exists. Unlike a no-match,
/// the error is not recoverable: `or` does not fall through to its
/// alternative and the parse aborts with the failure offset.
#[derive(Debug)]
pub struct Fatal<T> {
    message: Cow<'static, str>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Fatal<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fatal {
            message: message.into(),
            _output: PhantomData,
        }
    }
}

impl<T> Clone for Fatal<T> {
    fn clone(&self) -> Self {
        Fatal {
            message: self.message.clone(),
            _output: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Fatal<T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Err(ParseError::Grammar {
            message: self.message.clone(),
            loc: cursor.loc(),
        })
    }
}

/// Convenience function to create a Fatal parser
pub fn fatal<T>(message: impl Into<Cow<'static, str>>) -> Fatal<T> {
    Fatal::new(message)
}
