use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::cell::OnceCell;
use std::rc::Rc;
use thiserror::Error;

/// Error returned when a forward reference is bound a second time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("forward reference already defined")]
pub struct AlreadyDefined;

/// Late-bound parser slot for recursive grammar rules
///
/// A recursive rule (a parenthesized sub-expression referring back to the
/// top-level expression) needs a parser value before its definition exists.
/// Create the slot first, embed clones of it in the grammar, then bind the
/// finished grammar with [`ForwardRef::define`] exactly once. Clones share
/// identity, so every earlier reference delegates to the final definition.
///
/// Parsing a slot that was never defined is a fatal grammar error, so
/// premature use fails loudly instead of silently matching nothing.
pub struct ForwardRef<'code, T> {
    slot: Rc<OnceCell<Rc<dyn Parser<'code, Output = T> + 'code>>>,
}

impl<T> std::fmt::Debug for ForwardRef<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForwardRef")
            .field("defined", &self.slot.get().is_some())
            .finish()
    }
}

impl<'code, T> ForwardRef<'code, T> {
    pub fn new() -> Self {
        ForwardRef {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// Bind the slot to its final definition
    ///
    /// May be called once per slot; rebinding is refused to preserve the
    /// define-once contract.
    pub fn define<P>(&self, parser: P) -> Result<(), AlreadyDefined>
    where
        P: Parser<'code, Output = T> + 'code,
    {
        self.slot.set(Rc::new(parser)).map_err(|_| AlreadyDefined)
    }
}

impl<'code, T> Default for ForwardRef<'code, T> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: cloning shares the slot and must not require T: Clone
impl<'code, T> Clone for ForwardRef<'code, T> {
    fn clone(&self) -> Self {
        ForwardRef {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<'code, T> Parser<'code> for ForwardRef<'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.slot.get() {
            Some(parser) => parser.parse(cursor),
            None => Err(ParseError::Grammar {
                message: "forward reference used before definition".into(),
                loc: cursor.loc(),
            }),
        }
    }
}

/// Convenience function to create a ForwardRef slot
pub fn forward<'code, T>() -> ForwardRef<'code, T> {
    ForwardRef::new()
}
