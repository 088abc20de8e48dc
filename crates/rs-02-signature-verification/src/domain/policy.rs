//! # Newline Fallback Policy
//!
//! Some wallets sign the displayed message with a trailing newline. The claim
//! is checked against the canonical bytes first and, if that does not match,
//! once against the bytes plus `\n`. There are exactly two branches.

use super::entities::{MessageVariant, VerificationOutcome};
use super::errors::VerificationError;
use super::recovery::{decode_signature, recover_address};
use shared_types::WalletAddress;

/// Check a `(message, signature, claimed address)` triple.
///
/// - Valid if either branch recovers the claimed address.
/// - Otherwise reports the first address that was recovered.
/// - If neither branch recovers anything, reports the recovery error.
pub fn verify_claim(canonical: &[u8], signature: &str, claimed: &str) -> VerificationOutcome {
    let claimed: WalletAddress = match claimed.parse() {
        Ok(address) => address,
        Err(e) => {
            return VerificationOutcome::rejected(VerificationError::InvalidClaimedAddress(e))
        }
    };

    let signature = match decode_signature(signature) {
        Ok(signature) => signature,
        Err(e) => return VerificationOutcome::rejected(e),
    };

    let first = recover_address(&MessageVariant::Canonical.apply(canonical), &signature);
    if let Ok(recovered) = first {
        if recovered == claimed {
            return VerificationOutcome::matched(recovered, MessageVariant::Canonical);
        }
    }

    let second = recover_address(
        &MessageVariant::TrailingNewline.apply(canonical),
        &signature,
    );

    match (first, second) {
        (_, Ok(recovered)) if recovered == claimed => {
            VerificationOutcome::matched(recovered, MessageVariant::TrailingNewline)
        }
        (Ok(recovered), _) | (Err(_), Ok(recovered)) => VerificationOutcome::mismatch(recovered),
        (Err(_), Err(e)) => VerificationOutcome::rejected(e),
    }
}
