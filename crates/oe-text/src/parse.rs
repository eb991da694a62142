//! Typed parsing from delimited text
//!
//! Every parseable type implements [`Parseable`], which pulls the tokens it
//! needs from a shared [`StringTokenizer`]. The free functions build on it:
//! [`try_parse`] reports failure as `false` and leaves a default in place,
//! [`parse`] turns failure into a [`ParseError`].

use std::panic::Location;

use tracing::trace;

use crate::error::ParseError;
use crate::tokenizer::StringTokenizer;

/// Separators used when none are given
pub const DEFAULT_SEPARATORS: &str = ",";

/// A value that can be read from a sequence of tokens
pub trait Parseable: Sized {
    /// Consume the tokens this type needs and build a value.
    ///
    /// Returns `None` if too few tokens remain or one of them is malformed.
    /// Tokens already consumed are not given back.
    fn from_tokens(parts: &mut StringTokenizer<'_>) -> Option<Self>;
}

macro_rules! impl_parseable_int {
    ($($ty:ty),*) => {$(
        impl Parseable for $ty {
            fn from_tokens(parts: &mut StringTokenizer<'_>) -> Option<Self> {
                // strtol rules: leading blanks and a sign are fine, trailing junk is not
                parts.next_token()?.trim_start().parse().ok()
            }
        }
    )*};
}

impl_parseable_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Parse from an existing cursor, writing `dest` only on success
pub fn try_parse_tokens<T: Parseable>(dest: &mut T, parts: &mut StringTokenizer<'_>) -> bool {
    match T::from_tokens(parts) {
        Some(value) => {
            *dest = value;
            true
        }
        None => false,
    }
}

/// Parse `text` split on `separators` into `dest`.
///
/// `dest` is set to `default` before parsing, so it holds a valid value
/// whatever the outcome.
pub fn try_parse<T: Parseable>(dest: &mut T, text: &str, default: T, separators: &str) -> bool {
    *dest = default;
    let mut parts = StringTokenizer::new(text, separators);
    try_parse_tokens(dest, &mut parts)
}

/// Parse a comma separated value or fail with a [`ParseError`]
#[track_caller]
pub fn parse<T: Parseable>(text: &str) -> Result<T, ParseError> {
    parse_at(text, DEFAULT_SEPARATORS, Location::caller())
}

/// Parse a value split on `separators` or fail with a [`ParseError`]
#[track_caller]
pub fn parse_with<T: Parseable>(text: &str, separators: &str) -> Result<T, ParseError> {
    parse_at(text, separators, Location::caller())
}

fn parse_at<T: Parseable>(
    text: &str,
    separators: &str,
    caller: &Location<'_>,
) -> Result<T, ParseError> {
    let mut parts = StringTokenizer::new(text, separators);
    T::from_tokens(&mut parts).ok_or_else(|| {
        let err = ParseError::at::<T>(caller, text);
        trace!("{}", err);
        err
    })
}
