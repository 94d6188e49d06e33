//! # Error Types
//!
//! Domain-specific error types for folio-core.
//!
//! ## Error Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         BookError                                       │
//! │                                                                         │
//! │  InvalidArgument     - set_pages(n) with n <= 0                         │
//! │  FormatNotSupported  - to_formatted_string("Z", ..)                     │
//! │  InvalidAmount       - "12.345".parse::<Money>()                        │
//! │                                                                         │
//! │  All failures are immediate: the call returns Err, state is unchanged  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Book Error
// =============================================================================

/// Errors raised by [`Book`](crate::Book) and its value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// A numeric argument is outside its accepted range.
    ///
    /// ## When This Occurs
    /// - `set_pages(0)` or `set_pages(-3)`: page count must be positive
    #[error("{field} must be greater than zero, got {value}")]
    InvalidArgument { field: &'static str, value: i64 },

    /// Formatted rendering was asked for a code it does not know.
    #[error("The {format} format string is not supported.")]
    FormatNotSupported { format: String },

    /// Text could not be parsed as a monetary amount.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BookError.
pub type BookResult<T> = Result<T, BookError>;

// =============================================================================
// Unit Tests
// =============================================================================
