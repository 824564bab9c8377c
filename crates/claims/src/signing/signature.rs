use std::fmt;

use crate::error::ClaimError;

/// Length of a recoverable signature: r (32) + s (32) + recovery id (1).
pub const SIGNATURE_LEN: usize = 65;

/// A 65-byte recoverable secp256k1 signature in the chain's layout:
/// big-endian `r`, big-endian `s`, then one recovery byte.
///
/// The recovery byte uses the chain's 0/1 convention. Ethereum tooling
/// that emits 27/28 is accepted on input and normalized; the stored form
/// is always 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimSignature([u8; SIGNATURE_LEN]);

impl ClaimSignature {
    /// Accepts exactly 65 bytes; anything shorter or longer is rejected,
    /// never truncated or padded. A trailing 27/28 is mapped to 0/1.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ClaimError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(ClaimError::MalformedSignature(format!(
                "expected {SIGNATURE_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let mut sig = [0u8; SIGNATURE_LEN];
        sig.copy_from_slice(bytes);
        sig[64] = match sig[64] {
            v @ (0 | 1) => v,
            27 => 0,
            28 => 1,
            v => {
                return Err(ClaimError::MalformedSignature(format!(
                    "recovery byte {v} is neither 0/1 nor 27/28"
                )));
            }
        };
        Ok(Self(sig))
    }

    /// Parses a hex signature, with or without a 0x prefix. Odd-length
    /// hex fails to decode to whole bytes and is rejected.
    pub fn from_hex(hex_str: &str) -> Result<Self, ClaimError> {
        let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(stripped)
            .map_err(|e| ClaimError::MalformedSignature(format!("invalid hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    pub(crate) fn from_raw(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Big-endian `r` scalar.
    pub fn r(&self) -> &[u8] {
        &self.0[..32]
    }

    /// Big-endian `s` scalar.
    pub fn s(&self) -> &[u8] {
        &self.0[32..64]
    }

    /// Recovery byte, always 0 or 1.
    pub fn recovery_id(&self) -> u8 {
        self.0[64]
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for ClaimSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ClaimSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(v: u8) -> Vec<u8> {
        let mut bytes = vec![0x11; 64];
        bytes.push(v);
        bytes
    }

    #[test]
    fn accepts_exactly_65_bytes() {
        let signature = ClaimSignature::from_bytes(&sample(0)).unwrap();
        assert_eq!(signature.as_bytes().len(), SIGNATURE_LEN);
        assert_eq!(signature.r(), &[0x11; 32]);
        assert_eq!(signature.s(), &[0x11; 32]);
        assert_eq!(signature.recovery_id(), 0);
    }

    #[test]
    fn rejects_64_and_66_bytes() {
        for len in [0, 64, 66] {
            let result = ClaimSignature::from_bytes(&vec![0u8; len]);
            assert!(
                matches!(result, Err(ClaimError::MalformedSignature(_))),
                "length {len} should be rejected"
            );
        }
    }

    #[test]
    fn normalizes_ethereum_recovery_bytes() {
        assert_eq!(ClaimSignature::from_bytes(&sample(27)).unwrap().recovery_id(), 0);
        assert_eq!(ClaimSignature::from_bytes(&sample(28)).unwrap().recovery_id(), 1);
        assert_eq!(ClaimSignature::from_bytes(&sample(1)).unwrap().recovery_id(), 1);
    }

    #[test]
    fn rejects_out_of_range_recovery_bytes() {
        for v in [2, 3, 4, 26, 29, 255] {
            assert!(
                matches!(
                    ClaimSignature::from_bytes(&sample(v)),
                    Err(ClaimError::MalformedSignature(_))
                ),
                "recovery byte {v} should be rejected"
            );
        }
    }

    #[test]
    fn hex_roundtrip() {
        let signature = ClaimSignature::from_bytes(&sample(1)).unwrap();
        let parsed = ClaimSignature::from_hex(&signature.to_string()).unwrap();
        assert_eq!(parsed, signature);

        let prefixed = format!("0x{signature}");
        assert_eq!(ClaimSignature::from_hex(&prefixed).unwrap(), signature);
    }

    #[test]
    fn rejects_odd_length_hex() {
        let odd = "a".repeat(129);
        assert!(matches!(
            ClaimSignature::from_hex(&odd),
            Err(ClaimError::MalformedSignature(_))
        ));
    }
}
