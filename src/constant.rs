use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that always succeeds without consuming input and yields a clone of
/// its value
#[derive(Debug, Clone)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    pub fn new(value: T) -> Self {
        Constant { value }
    }
}

impl<'code, T> Parser<'code> for Constant<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(Some((self.value.clone(), cursor)))
    }
}

/// Convenience function to create a Constant parser
pub fn constant<T>(value: T) -> Constant<T>
where
    T: Clone,
{
    Constant::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_yields_value() {
        let cursor = Cursor::new("hello");
        let parser = constant(42);

        let (value, cursor) = parser.parse(cursor).unwrap().unwrap();
        assert_eq!(value, 42);
        // Nothing consumed
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_constant_on_empty_input() {
        let cursor = Cursor::new("");
        let parser = constant("marker");

        let (value, cursor) = parser.parse(cursor).unwrap().unwrap();
        assert_eq!(value, "marker");
        assert!(cursor.eos());
    }

    #[test]
    fn test_constant_repeated_use() {
        let cursor = Cursor::new("x");
        let parser = constant(vec![1, 2]);

        let (first, _) = parser.parse(cursor).unwrap().unwrap();
        let (second, _) = parser.parse(cursor).unwrap().unwrap();
        assert_eq!(first, second);
    }
}
