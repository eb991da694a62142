//! Text helpers for oxidized-emotion
//!
//! This crate provides the string plumbing used by the frontend: a
//! delimiter tokenizer, geometry value parsing and formatting, INI-style
//! assignment line parsing and hexadecimal views of 128-bit registers.

pub mod assignment;
pub mod error;
pub mod geometry;
pub mod parse;
pub mod quadword;
pub mod tokenizer;

pub use assignment::{parse_assignment, ParsedAssignment};
pub use error::ParseError;
pub use geometry::{Point, Rect, Size, ToText};
pub use parse::{parse, parse_with, try_parse, try_parse_tokens, Parseable, DEFAULT_SEPARATORS};
pub use quadword::Quadword;
pub use tokenizer::{split_string, StringTokenizer, TokenizerMode};
