//! # Recomb - Regex-Anchored Parser Combinators
//!
//! A small parser combinator library over an immutable string cursor, built
//! for writing backtracking grammars out of anchored regex tokens.
//!
//! Recomb provides composable, type-safe parsers that combine into complex
//! parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: recoverable no-matches and fatal grammar errors both
//!   travel through `Result` types
//! - **Backtracking**: ordered choice retries alternatives from the cursor
//!   where the failed branch started
//! - **Recursive grammars**: a late-bound forward reference lets a rule be
//!   embedded in the very expression that defines it
//! - **Operator precedence**: a grammar-agnostic infix combinator builds
//!   left-associative expression parsers level by level

pub mod and;
pub mod bind;
pub mod complete;
pub mod constant;
pub mod cursor;
pub mod error;
pub mod fatal;
pub mod forward;
pub mod infix;
pub mod many;
pub mod map;
pub mod maybe;
pub mod or;
pub mod parser;
pub mod regexp;
pub mod separated_list;

pub use and::{And, AndExt, and};
pub use bind::{Bind, BindExt, bind};
pub use complete::ParseToCompletion;
pub use constant::{Constant, constant};
pub use cursor::Cursor;
pub use error::{ParseError, ReadablePosition, SourceLoc};
pub use fatal::{Fatal, fatal};
pub use forward::{AlreadyDefined, ForwardRef, forward};
pub use infix::{Infix, infix};
pub use many::{Many, many};
pub use map::{Map, MapExt, map};
pub use maybe::{Maybe, maybe};
pub use or::{Or, OrExt, or};
pub use parser::{ParseResult, Parser};
pub use regexp::{Regexp, regexp};
pub use separated_list::{SeparatedList, separated_list};
