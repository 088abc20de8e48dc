//! # Signer Recovery (secp256k1, EIP-191)
//!
//! Pure domain logic: decode a wallet signature and recover the account that
//! produced it over a personal message.
//!
//! ## Checks
//!
//! - R and S must be in [1, n-1]
//! - R must be a valid x-coordinate on the secp256k1 curve
//! - A high S is folded to `n - s` with the recovery parity flipped; both
//!   forms recover the same key

use super::errors::VerificationError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::FromEncodedPoint;
use k256::{AffinePoint, EncodedPoint};
use shared_crypto::{address_from_verifying_key, personal_message_hash, CryptoError, PersonalSignature};
use shared_types::WalletAddress;

/// Decode a wallet signature (`0x`-optional hex, 65 bytes).
pub fn decode_signature(text: &str) -> Result<PersonalSignature, VerificationError> {
    PersonalSignature::from_hex(text).map_err(|e| match e {
        CryptoError::InvalidHex => VerificationError::InvalidHex,
        CryptoError::InvalidSignatureLength { expected, actual } => {
            VerificationError::InvalidLength { expected, actual }
        }
        _ => VerificationError::InvalidFormat,
    })
}

/// Check the message-independent properties of a signature and bring it
/// into low-S form.
///
/// `Signature::from_slice` rejects zero and out-of-range scalars.
pub fn check_signature(
    signature: &PersonalSignature,
) -> Result<(Signature, RecoveryId), VerificationError> {
    if !is_valid_r_coordinate(&signature.r) {
        return Err(VerificationError::InvalidFormat);
    }

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let sig = Signature::from_slice(&sig_bytes).map_err(|_| VerificationError::InvalidFormat)?;

    let recovery_id = parse_recovery_id(signature.v)?;

    Ok(match sig.normalize_s() {
        Some(normalized) => (
            normalized,
            RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
        ),
        None => (sig, recovery_id),
    })
}

/// Recover the account that personal-signed `message`.
pub fn recover_address(
    message: &[u8],
    signature: &PersonalSignature,
) -> Result<WalletAddress, VerificationError> {
    let (sig, recovery_id) = check_signature(signature)?;

    let digest = personal_message_hash(message);
    let recovered_key = VerifyingKey::recover_from_prehash(&digest, &sig, recovery_id)
        .map_err(|_| VerificationError::RecoveryFailed)?;

    Ok(WalletAddress::from_bytes(address_from_verifying_key(
        &recovered_key,
    )))
}

/// Only about half of all field elements have a matching y on the curve.
fn is_valid_r_coordinate(r: &[u8; 32]) -> bool {
    let mut compressed = [0u8; 33];
    compressed[0] = 0x02; // Even y-parity
    compressed[1..].copy_from_slice(r);

    let encoded = match EncodedPoint::from_bytes(compressed) {
        Ok(e) => e,
        Err(_) => return false,
    };

    AffinePoint::from_encoded_point(&encoded).is_some().into()
}

/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, VerificationError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(VerificationError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| VerificationError::InvalidRecoveryId(v))
}


#[cfg(test)]
mod tests {
    use super::test_helpers::high_s_twin;
    use super::*;
    use shared_crypto::Secp256k1KeyPair;

    fn signed(message: &[u8]) -> (Secp256k1KeyPair, PersonalSignature) {
        let keypair = Secp256k1KeyPair::generate();
        let signature = keypair.sign_personal(message).unwrap();
        (keypair, signature)
    }

    #[test]
    fn test_recovers_signer() {
        let (keypair, signature) = signed(b"review");
        let recovered = recover_address(b"review", &signature).unwrap();
        assert_eq!(recovered.as_bytes(), &keypair.address());
    }

    #[test]
    fn test_recovery_is_deterministic() {
        let (_, signature) = signed(b"review");
        assert_eq!(
            recover_address(b"review", &signature),
            recover_address(b"review", &signature)
        );
    }

    #[test]
    fn test_wrong_message_recovers_other_address() {
        let (keypair, signature) = signed(b"message 1");

        // Recovery still succeeds, just for some other key
        let recovered = recover_address(b"message 2", &signature).unwrap();
        assert_ne!(recovered.as_bytes(), &keypair.address());
    }

    #[test]
    fn test_raw_recovery_ids_accepted() {
        let (keypair, mut signature) = signed(b"review");
        signature.v -= 27;
        let recovered = recover_address(b"review", &signature).unwrap();
        assert_eq!(recovered.as_bytes(), &keypair.address());
    }

    #[test]
    fn test_invalid_recovery_id() {
        let (_, mut signature) = signed(b"review");
        signature.v = 29;
        assert_eq!(
            recover_address(b"review", &signature),
            Err(VerificationError::InvalidRecoveryId(29))
        );
    }

    #[test]
    fn test_high_s_recovers_same_signer() {
        let (keypair, signature) = signed(b"review");
        let twin = high_s_twin(&signature);
        assert_ne!(twin.s, signature.s);

        let recovered = recover_address(b"review", &twin).unwrap();
        assert_eq!(recovered.as_bytes(), &keypair.address());
        assert_eq!(
            recover_address(b"review", &twin),
            recover_address(b"review", &signature)
        );
    }

    #[test]
    fn test_high_s_normalized_form() {
        let (_, signature) = signed(b"review");
        let (low, low_id) = check_signature(&signature).unwrap();
        let (folded, folded_id) = check_signature(&high_s_twin(&signature)).unwrap();

        assert_eq!(low, folded);
        assert_eq!(low_id, folded_id);
    }

    #[test]
    fn test_scalar_range() {
        let (_, signature) = signed(b"review");

        let zero_s = PersonalSignature {
            s: [0u8; 32],
            ..signature
        };
        assert_eq!(
            check_signature(&zero_s).unwrap_err(),
            VerificationError::InvalidFormat
        );

        let huge_s = PersonalSignature {
            s: [0xFF; 32],
            ..signature
        };
        assert_eq!(
            check_signature(&huge_s).unwrap_err(),
            VerificationError::InvalidFormat
        );
    }

    #[test]
    fn test_garbage_signature_rejected() {
        let garbage = PersonalSignature {
            r: [0xFF; 32],
            s: [0xFF; 32],
            v: 27,
        };
        assert_eq!(
            recover_address(b"review", &garbage),
            Err(VerificationError::InvalidFormat)
        );
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            decode_signature("0xzz").unwrap_err(),
            VerificationError::InvalidHex
        );
        assert_eq!(
            decode_signature("0x1234").unwrap_err(),
            VerificationError::InvalidLength {
                expected: 65,
                actual: 2
            }
        );
    }

    #[test]
    fn test_decode_accepts_missing_prefix() {
        let (_, signature) = signed(b"review");
        let hex = signature.to_hex();
        assert_eq!(decode_signature(&hex[2..]).unwrap(), signature);
    }
}
