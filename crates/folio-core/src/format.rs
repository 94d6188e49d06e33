//! # Format Codes
//!
//! The one-letter codes accepted by [`Book::to_formatted_string`](crate::Book::to_formatted_string).
//!
//! ```text
//! ┌──────┬──────────────────────────────────────────────────────────────────┐
//! │ Code │ Output                                                           │
//! ├──────┼──────────────────────────────────────────────────────────────────┤
//! │  G   │ {title} by {author}                                              │
//! │  D   │ ... {year}. {publisher}. ISBN: {isbn}. {pages} pages. {cur}{p}.  │
//! │  P   │ ... {year}. {publisher}. ISBN: {isbn}. {pages} pages.            │
//! │  Y   │ ... {year}. {publisher}. {pages} pages.                          │
//! │  T   │ ... {year}. {pages} pages.                                       │
//! │  R   │ {title} by {author} {cur}{p}.                                    │
//! └──────┴──────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::BookError;

/// A supported rendering of a [`Book`](crate::Book).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BookFormat {
    /// General: title and author only.
    #[default]
    G,
    /// Detailed: everything, including price.
    D,
    /// Publishing: everything except price.
    P,
    /// Year, publisher and page count.
    Y,
    /// Year and page count.
    T,
    /// Retail: title, author and price.
    R,
}

impl BookFormat {
    /// Every supported code, in table order.
    pub const ALL: [BookFormat; 6] = [
        BookFormat::G,
        BookFormat::D,
        BookFormat::P,
        BookFormat::Y,
        BookFormat::T,
        BookFormat::R,
    ];

    /// The canonical (upper-case) code.
    pub const fn code(&self) -> &'static str {
        match self {
            BookFormat::G => "G",
            BookFormat::D => "D",
            BookFormat::P => "P",
            BookFormat::Y => "Y",
            BookFormat::T => "T",
            BookFormat::R => "R",
        }
    }

    /// Resolves an optional format string; `None` and `""` both mean [`BookFormat::G`].
    pub fn resolve(format: Option<&str>) -> Result<Self, BookError> {
        match format {
            None => Ok(BookFormat::G),
            Some(code) => code.parse(),
        }
    }
}

impl fmt::Display for BookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Case-insensitive; the empty string parses as [`BookFormat::G`].
impl FromStr for BookFormat {
    type Err = BookError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if code.is_empty() {
            return Ok(BookFormat::G);
        }

        BookFormat::ALL
            .into_iter()
            .find(|candidate| candidate.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| BookError::FormatNotSupported {
                format: code.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("d".parse::<BookFormat>().unwrap(), BookFormat::D);
        assert_eq!("D".parse::<BookFormat>().unwrap(), BookFormat::D);
        assert_eq!("r".parse::<BookFormat>().unwrap(), BookFormat::R);
    }

    #[test]
    fn test_empty_and_absent_mean_general() {
        assert_eq!("".parse::<BookFormat>().unwrap(), BookFormat::G);
        assert_eq!(BookFormat::resolve(None).unwrap(), BookFormat::G);
        assert_eq!(BookFormat::resolve(Some("")).unwrap(), BookFormat::G);
        assert_eq!(BookFormat::default(), BookFormat::G);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        for code in ["Z", "GG", " G", "x"] {
            let err = code.parse::<BookFormat>().unwrap_err();
            assert_eq!(
                err,
                BookError::FormatNotSupported {
                    format: code.to_string()
                }
            );
        }
    }

    #[test]
    fn test_display_is_code() {
        for format in BookFormat::ALL {
            assert_eq!(format.to_string(), format.code());
        }
    }
}
