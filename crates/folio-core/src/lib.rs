//! # folio-core: The Book Value Object
//!
//! This crate holds a single entity, [`Book`], together with the small value
//! types it is built from. Everything here is pure: no I/O, no locale
//! lookups, no shared state.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            folio-core                                   │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐           │
//! │   │   book    │  │   money   │  │  format   │  │  culture  │           │
//! │   │   Book    │  │   Money   │  │BookFormat │  │  Culture  │           │
//! │   └───────────┘  └───────────┘  └───────────┘  └───────────┘           │
//! │                                                                         │
//! │   Identity = ISBN • Order = title • Output = invariant culture          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`] - The `Book` entity
//! - [`money`] - Exact decimal Money type (no floating point!)
//! - [`format`] - Format codes accepted by formatted rendering
//! - [`culture`] - Format provider stand-in
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use folio_core::{Book, Culture, Money};
//!
//! let mut book = Book::with_isbn(
//!     "Jon Skeet",
//!     "C# in Depth",
//!     "Manning Publications",
//!     "9781617294532",
//! );
//! book.set_pages(528).unwrap();
//! book.set_price(Money::from_cents(3999), "USD");
//! book.publish(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
//!
//! assert_eq!(book.to_string(), "C# in Depth by Jon Skeet");
//! assert_eq!(
//!     book.to_formatted_string(Some("D"), Some(Culture::Invariant)).unwrap(),
//!     "C# in Depth by Jon Skeet. 2019. Manning Publications. \
//!      ISBN: 9781617294532. 528 pages. USD39.99."
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod book;
pub mod culture;
pub mod error;
pub mod format;
pub mod money;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use book::Book;
pub use culture::Culture;
pub use error::{BookError, BookResult};
pub use format::BookFormat;
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Text returned by [`Book::publication_date`] before the book is published.
pub const NOT_PUBLISHED: &str = "Not published yet.";

/// Year rendered by the long formats when no publication date is stored.
///
/// Matches the year of the zero date (0001-01-01) that an unpublished book
/// carries implicitly.
pub const UNPUBLISHED_YEAR: i32 = 1;
