use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping
/// function
#[derive(Debug, Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor)? {
            Some((value, cursor)) => Ok(Some(((self.mapper)(value), cursor))),
            None => Ok(None),
        }
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::or::OrExt;
    use crate::regexp::regexp;

    #[derive(Debug, PartialEq)]
    enum Token {
        Word(String),
        Number(i64),
    }

    #[test]
    fn test_map_transforms_value() {
        let cursor = Cursor::new("42");
        let parser = regexp("[0-9]+").map(|digits: &str| digits.parse::<i64>().unwrap());

        let (value, cursor) = parser.parse(cursor).unwrap().unwrap();
        assert_eq!(value, 42);
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_keeps_cursor() {
        let cursor = Cursor::new("abc rest");
        let parser = regexp("[a-z]+").map(str::len);

        let (value, cursor) = parser.parse(cursor).unwrap().unwrap();
        assert_eq!(value, 3);
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_map_no_match_passes_through() {
        let cursor = Cursor::new("!!!");
        let parser = regexp("[a-z]+").map(str::len);

        assert!(parser.parse(cursor).unwrap().is_none());
    }

    #[test]
    fn test_map_to_enum_tokens() {
        let word = regexp("[a-z]+").map(|w: &str| Token::Word(w.to_string()));
        let number = regexp("[0-9]+").map(|d: &str| Token::Number(d.parse().unwrap()));
        let token = word.or(number);

        let (value, cursor) = token.parse(Cursor::new("hello")).unwrap().unwrap();
        assert_eq!(value, Token::Word("hello".to_string()));
        assert!(cursor.eos());

        let (value, _) = token.parse(Cursor::new("7")).unwrap().unwrap();
        assert_eq!(value, Token::Number(7));
    }

    #[test]
    fn test_map_function_syntax() {
        let cursor = Cursor::new("ab");
        let parser = map(regexp("ab"), |s: &str| s.to_uppercase());

        let (value, _) = parser.parse(cursor).unwrap().unwrap();
        assert_eq!(value, "AB");
    }
}
