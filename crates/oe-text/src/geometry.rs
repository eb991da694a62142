//! 2D geometry values and their delimited text form
//!
//! Window positions and sizes are persisted as short comma separated lists
//! such as `32,64` or `32,64,128,5`.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use crate::error::ParseError;
use crate::parse::{parse, Parseable, DEFAULT_SEPARATORS};
use crate::tokenizer::StringTokenizer;

/// Integer point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Integer size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Rectangle made of an origin point and a size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Build a rectangle from `x, y, width, height`
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }
}

/// Conversion to a separator-delimited string
pub trait ToText {
    fn to_text(&self, separator: &str) -> String;
}

impl ToText for Point {
    fn to_text(&self, separator: &str) -> String {
        format!("{}{}{}", self.x, separator, self.y)
    }
}

impl ToText for Size {
    fn to_text(&self, separator: &str) -> String {
        format!("{}{}{}", self.width, separator, self.height)
    }
}

impl ToText for Rect {
    /// Example: `32,64,128,5`
    fn to_text(&self, separator: &str) -> String {
        format!(
            "{}{}{}",
            self.origin.to_text(separator),
            separator,
            self.size.to_text(separator)
        )
    }
}

impl Parseable for Point {
    fn from_tokens(parts: &mut StringTokenizer<'_>) -> Option<Self> {
        let x = i32::from_tokens(parts)?;
        let y = i32::from_tokens(parts)?;
        Some(Self { x, y })
    }
}

impl Parseable for Size {
    fn from_tokens(parts: &mut StringTokenizer<'_>) -> Option<Self> {
        let width = i32::from_tokens(parts)?;
        let height = i32::from_tokens(parts)?;
        Some(Self { width, height })
    }
}

impl Parseable for Rect {
    fn from_tokens(parts: &mut StringTokenizer<'_>) -> Option<Self> {
        let origin = Point::from_tokens(parts)?;
        let size = Size::from_tokens(parts)?;
        Some(Self { origin, size })
    }
}

macro_rules! impl_text_traits {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_text(DEFAULT_SEPARATORS))
            }
        }

        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse(s)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(D::Error::custom)
            }
        }
    )*};
}

impl_text_traits!(Point, Size, Rect);
