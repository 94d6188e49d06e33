//! Format provider passed to formatted rendering.
//!
//! Output is always produced with invariant rules (`.` decimal separator,
//! `MM/DD/YYYY` dates). The provider is accepted so callers can state their
//! intent; when they pass none, [`Culture::Invariant`] is used.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Culture in effect for a formatted rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Culture {
    /// Fixed, locale-independent rules.
    #[default]
    Invariant,
    /// The host's culture. Rendering still follows invariant rules.
    Current,
}
