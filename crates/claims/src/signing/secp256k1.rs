use alloy_primitives::{Address, keccak256};
use k256::ecdsa::{RecoveryId, SigningKey, VerifyingKey, signature::hazmat::PrehashSigner};
use sha2::{Digest, Sha256};

use crate::encoding::{Destination, MessageFormat};
use crate::error::ClaimError;

use super::signature::{ClaimSignature, SIGNATURE_LEN};

/// Signs claim messages with an Ethereum-style secp256k1 key.
///
/// Signatures are recoverable (65 bytes: r + s + v) so the verifying
/// runtime can recover the claimant's address from the signature and the
/// message hash alone, without ever seeing the public key.
pub struct ClaimSigner {
    signing_key: SigningKey,
}

impl ClaimSigner {
    /// Loads a raw 32-byte private key. Anything but exactly 32 bytes is
    /// rejected here, before any hashing or signing happens.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ClaimError> {
        let key: [u8; 32] = bytes.try_into().map_err(|_| {
            ClaimError::Signing(format!(
                "expected a 32-byte private key, got {} bytes",
                bytes.len()
            ))
        })?;
        let signing_key = SigningKey::from_bytes(&key.into())
            .map_err(|e| ClaimError::Signing(format!("invalid private key: {e}")))?;
        Ok(Self { signing_key })
    }

    /// Loads a hex private key, with or without a 0x prefix.
    pub fn from_hex(hex_str: &str) -> Result<Self, ClaimError> {
        let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(stripped)
            .map_err(|e| ClaimError::Signing(format!("invalid private key hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Derives a key from an arbitrary seed string (SHA-256 of the seed).
    /// For tests and demo chains; real keys arrive through `from_bytes`.
    pub fn from_seed(seed: &str) -> Result<Self, ClaimError> {
        let hash = Sha256::digest(seed.as_bytes());
        let signing_key = SigningKey::from_bytes((&hash).into())
            .map_err(|e| ClaimError::Signing(format!("invalid seed: {e}")))?;
        Ok(Self { signing_key })
    }

    /// The signer's Ethereum address: keccak-256 of the uncompressed
    /// public key (tag byte dropped), last 20 bytes.
    pub fn address(&self) -> Address {
        ethereum_address(self.signing_key.verifying_key())
    }

    /// Keccak-hashes `message` and signs the 32-byte digest directly.
    ///
    /// The digest is signed as-is (`sign_prehash`), matching a verifier
    /// that hashes the reconstructed message exactly once. `s` is kept in
    /// the low half of the curve order; when normalization flips `s`, the
    /// recovery parity flips with it. The recovery byte is always 0 or 1.
    pub fn sign(&self, message: &[u8]) -> Result<ClaimSignature, ClaimError> {
        let digest = keccak256(message);

        let (signature, recovery_id): (k256::ecdsa::Signature, RecoveryId) = self
            .signing_key
            .sign_prehash(digest.as_slice())
            .map_err(|e| ClaimError::Signing(format!("secp256k1 sign_prehash failed: {e}")))?;

        let (signature, recovery_id) = match signature.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (signature, recovery_id),
        };

        // 65-byte signature: 32 bytes r + 32 bytes s + 1 byte v
        let mut sig = [0u8; SIGNATURE_LEN];
        sig[..64].copy_from_slice(signature.to_bytes().as_slice());
        sig[64] = u8::from(recovery_id.is_y_odd());
        Ok(ClaimSignature::from_raw(sig))
    }

    /// Runs the whole pipeline for a destination: canonical account
    /// bytes, hex expansion, message framing, hash, signature.
    pub fn sign_claim(
        &self,
        format: &MessageFormat,
        destination: &Destination,
        extra: &[u8],
    ) -> Result<ClaimSignature, ClaimError> {
        let message = format.claim_message(destination, extra)?;
        self.sign(&message)
    }
}

/// Recovers the Ethereum address that signed `message`, the same check
/// the verifying runtime performs before honoring a claim.
pub fn recover_address(
    message: &[u8],
    signature: &ClaimSignature,
) -> Result<Address, ClaimError> {
    let digest = keccak256(message);
    let sig = k256::ecdsa::Signature::from_slice(&signature.as_bytes()[..64])
        .map_err(|e| ClaimError::MalformedSignature(format!("invalid r/s scalars: {e}")))?;
    let recovery_id = RecoveryId::from_byte(signature.recovery_id()).ok_or_else(|| {
        ClaimError::MalformedSignature(format!(
            "recovery byte {} out of range",
            signature.recovery_id()
        ))
    })?;

    let verifying_key = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recovery_id)
        .map_err(|e| ClaimError::MalformedSignature(format!("public key recovery failed: {e}")))?;
    Ok(ethereum_address(&verifying_key))
}

fn ethereum_address(verifying_key: &VerifyingKey) -> Address {
    let point = verifying_key.to_encoded_point(false);
    let digest = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&digest[12..])
}
