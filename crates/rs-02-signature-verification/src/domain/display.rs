//! # Display States
//!
//! `UNSIGNED -> (no verification)`, `SIGNED -> PENDING -> {VALID, INVALID}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-review badge state on a review page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewDisplayState {
    /// No signature was attached; never verified.
    Unsigned,
    /// Signed, verification call outstanding.
    Pending,
    /// Recovered signer matches the claimed wallet.
    Valid,
    /// Mismatch, malformed signature or failed verification call.
    Invalid,
}

impl ReviewDisplayState {
    /// Whether no further transition is expected.
    pub fn is_settled(&self) -> bool {
        !matches!(self, ReviewDisplayState::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewDisplayState::Unsigned => "Unsigned",
            ReviewDisplayState::Pending => "Verifying signature",
            ReviewDisplayState::Valid => "Verified wallet signature",
            ReviewDisplayState::Invalid => "Invalid signature",
        }
    }
}

impl fmt::Display for ReviewDisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
