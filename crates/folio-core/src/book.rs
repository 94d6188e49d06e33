//! # Book Entity
//!
//! A book with identity, pricing and publication state.
//!
//! ## Identity vs. Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Equality / Hash  ──►  isbn only                                        │
//! │                        (author, title, price... are ignored)            │
//! │                                                                         │
//! │  Ordering         ──►  title only, ordinal comparison                   │
//! │                        compare_to(None) is always Greater               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because the two rules look at different fields, `Book` implements
//! `PartialEq`/`Eq`/`Hash` but not `Ord`. Sort with [`Book::cmp_by_title`].
//!
//! ## Publication State
//! ```text
//!   Unpublished ──publish(date)──► Published(date) ──publish(date')──┐
//!                                        ▲                            │
//!                                        └────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace, warn};
use ts_rs::TS;

use crate::culture::Culture;
use crate::error::{BookError, BookResult};
use crate::format::BookFormat;
use crate::money::Money;
use crate::{NOT_PUBLISHED, UNPUBLISHED_YEAR};

/// Fixed short date pattern used by [`Book::publication_date`].
const SHORT_DATE_PATTERN: &str = "%m/%d/%Y";

// =============================================================================
// Book
// =============================================================================

/// A book.
///
/// Text fields are taken as given; no validation is applied to them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Book {
    author: String,
    title: String,
    publisher: String,
    /// Identity key. Empty when the book was built without one.
    isbn: String,
    price: Money,
    currency: Option<String>,
    /// Zero until set; once set, always positive.
    pages: i32,
    /// `Some` once published.
    #[ts(as = "Option<String>")]
    date_published: Option<NaiveDate>,
}

impl Book {
    /// Creates a book with an empty ISBN.
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Book::with_isbn(author, title, publisher, String::new())
    }

    /// Creates a book with the given ISBN.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::Book;
    ///
    /// let book = Book::with_isbn("Jon Skeet", "C# in Depth", "Manning Publications", "9781617294532");
    /// assert_eq!(book.isbn(), "9781617294532");
    /// assert_eq!(book.pages(), 0);
    /// assert!(!book.is_published());
    /// ```
    pub fn with_isbn(
        author: impl Into<String>,
        title: impl Into<String>,
        publisher: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Book {
            author: author.into(),
            title: title.into(),
            publisher: publisher.into(),
            isbn: isbn.into(),
            price: Money::zero(),
            currency: None,
            pages: 0,
            date_published: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// `None` until [`Book::set_price`] is called.
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn pages(&self) -> i32 {
        self.pages
    }

    pub fn is_published(&self) -> bool {
        self.date_published.is_some()
    }

    pub fn date_published(&self) -> Option<NaiveDate> {
        self.date_published
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Sets the page count.
    ///
    /// ## Errors
    /// [`BookError::InvalidArgument`] when `pages <= 0`. The stored count is
    /// left as it was.
    pub fn set_pages(&mut self, pages: i32) -> BookResult<()> {
        if pages <= 0 {
            warn!(isbn = %self.isbn, pages, "rejected non-positive page count");
            return Err(BookError::InvalidArgument {
                field: "pages",
                value: i64::from(pages),
            });
        }

        debug!(isbn = %self.isbn, pages, "pages set");
        self.pages = pages;
        Ok(())
    }

    /// Marks the book as published on `date`. Publishing again replaces the date.
    pub fn publish(&mut self, date: NaiveDate) {
        debug!(isbn = %self.isbn, %date, republished = self.is_published(), "book published");
        self.date_published = Some(date);
    }

    /// Sets price and currency together. The amount is stored as given,
    /// including negative or sub-cent values.
    pub fn set_price(&mut self, price: Money, currency: impl Into<String>) {
        let currency = currency.into();
        debug!(isbn = %self.isbn, %price, %currency, "price set");
        self.price = price;
        self.currency = Some(currency);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Publication date as `MM/DD/YYYY`, or `"Not published yet."`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use folio_core::Book;
    ///
    /// let mut book = Book::new("Jon Skeet", "C# in Depth", "Manning Publications");
    /// assert_eq!(book.publication_date(), "Not published yet.");
    ///
    /// book.publish(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
    /// assert_eq!(book.publication_date(), "01/01/2019");
    /// ```
    pub fn publication_date(&self) -> String {
        match self.date_published {
            Some(date) => date.format(SHORT_DATE_PATTERN).to_string(),
            None => NOT_PUBLISHED.to_string(),
        }
    }

    /// Year shown by the long formats. An unpublished book shows year 1.
    pub fn publication_year(&self) -> i32 {
        self.date_published.map_or(UNPUBLISHED_YEAR, |date| date.year())
    }

    /// Renders the book using a format code.
    ///
    /// `format` is case-insensitive; `None` or `""` means `"G"`. `provider`
    /// defaults to [`Culture::Invariant`]. Numbers and dates always use
    /// invariant rules; prices are rounded half away from zero to two places.
    ///
    /// ## Errors
    /// [`BookError::FormatNotSupported`] for any code outside G, D, P, Y, T, R.
    pub fn to_formatted_string(
        &self,
        format: Option<&str>,
        provider: Option<Culture>,
    ) -> BookResult<String> {
        let culture = provider.unwrap_or_default();
        let format = BookFormat::resolve(format).map_err(|err| {
            warn!(isbn = %self.isbn, error = %err, "unsupported book format");
            err
        })?;

        trace!(isbn = %self.isbn, %format, ?culture, "rendering book");
        Ok(self.render_as(format))
    }

    /// Renders the book in an already-parsed format.
    pub fn render_as(&self, format: BookFormat) -> String {
        let Book {
            author,
            title,
            publisher,
            isbn,
            price,
            pages,
            ..
        } = self;
        let year = self.publication_year();
        let currency = self.currency().unwrap_or_default();

        match format {
            BookFormat::G => format!("{title} by {author}"),
            BookFormat::D => format!(
                "{title} by {author}. {year}. {publisher}. ISBN: {isbn}. {pages} pages. {currency}{price}."
            ),
            BookFormat::P => format!(
                "{title} by {author}. {year}. {publisher}. ISBN: {isbn}. {pages} pages."
            ),
            BookFormat::Y => format!("{title} by {author}. {year}. {publisher}. {pages} pages."),
            BookFormat::T => format!("{title} by {author}. {year}. {pages} pages."),
            BookFormat::R => format!("{title} by {author} {currency}{price}."),
        }
    }

    // -------------------------------------------------------------------------
    // Comparison
    // -------------------------------------------------------------------------

    /// Same as `==`, with `None` never equal.
    pub fn equals(&self, other: Option<&Book>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Orders by title. Any book is greater than `None`.
    ///
    /// ## Example
    /// ```rust
    /// use std::cmp::Ordering;
    /// use folio_core::Book;
    ///
    /// let depth = Book::new("Jon Skeet", "C# in Depth", "Manning Publications");
    /// let action = Book::new("Jon Skeet", "C# in Action", "Manning Publications");
    /// assert_eq!(depth.compare_to(Some(&action)), Ordering::Greater);
    /// assert_eq!(depth.compare_to(None), Ordering::Greater);
    /// ```
    pub fn compare_to(&self, other: Option<&Book>) -> Ordering {
        match other {
            Some(other) => Book::cmp_by_title(self, other),
            None => Ordering::Greater,
        }
    }

    /// Title comparator for `sort_by`.
    pub fn cmp_by_title(a: &Book, b: &Book) -> Ordering {
        a.title.cmp(&b.title)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Equal iff the ISBNs are equal.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

/// Hashes the ISBN only, consistent with `PartialEq`.
impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

/// `"{title} by {author}"`.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
