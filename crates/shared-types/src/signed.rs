//! # Signed Review Attestation
//!
//! The optional signature triple attached to a review at insert time.

use crate::address::WalletAddress;
use serde::{Deserialize, Serialize};

/// Signature attestation for a review.
///
/// A review is either fully signed or fully unsigned. Storage keeps three
/// nullable columns; [`SignedReview::from_columns`] and
/// [`SignedReview::into_columns`] convert at that boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SignedReview {
    #[default]
    Unsigned,
    Signed {
        wallet_address: WalletAddress,
        /// Hex signature exactly as the wallet returned it.
        signature: String,
        /// Hex SHA-256 of the canonical message bytes.
        message_hash: String,
    },
}

impl SignedReview {
    pub fn is_signed(&self) -> bool {
        matches!(self, SignedReview::Signed { .. })
    }

    /// Rebuild from storage columns. Anything short of a complete, parseable
    /// triple is unsigned.
    pub fn from_columns(
        wallet_address: Option<&str>,
        signature: Option<&str>,
        message_hash: Option<&str>,
    ) -> Self {
        match (wallet_address, signature, message_hash) {
            (Some(address), Some(signature), Some(hash))
                if !signature.is_empty() && !hash.is_empty() =>
            {
                match address.parse() {
                    Ok(wallet_address) => SignedReview::Signed {
                        wallet_address,
                        signature: signature.to_string(),
                        message_hash: hash.to_string(),
                    },
                    Err(_) => SignedReview::Unsigned,
                }
            }
            _ => SignedReview::Unsigned,
        }
    }

    /// Split into `(wallet_address, signature, message_hash)` columns.
    pub fn into_columns(self) -> (Option<String>, Option<String>, Option<String>) {
        match self {
            SignedReview::Unsigned => (None, None, None),
            SignedReview::Signed {
                wallet_address,
                signature,
                message_hash,
            } => (
                Some(wallet_address.to_hex()),
                Some(signature),
                Some(message_hash),
            ),
        }
    }
}
