use blake2::{Blake2b512, Digest};

use crate::error::ClaimError;

/// Upper bound on accepted specifier input, in bytes.
const MAX_SPECIFIER_LEN: usize = 256;

/// A claim's destination account, resolved from caller input.
///
/// The verifying runtime accepts a deliberately polymorphic account
/// representation: test chains use small integer indices, production
/// chains use the 32-byte public key behind an SS58 address, and raw
/// text is the final fallback so every input has exactly one encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Account index, encoded as 8 bytes little-endian.
    Numeric(u64),
    /// SS58 account address, encoded as the decoded 32-byte public key.
    Address(String),
    /// Arbitrary text, encoded as its UTF-8 bytes.
    Text(String),
}

impl Destination {
    /// Resolves input through the three accepted forms, first match wins:
    /// decimal account index, SS58 address, raw text.
    ///
    /// A digit string that overflows 64 bits is not an error; it falls
    /// through to the address and text forms like any other input. Only
    /// empty input or input longer than 256 bytes is rejected.
    pub fn resolve(input: &str) -> Result<Self, ClaimError> {
        if input.is_empty() {
            return Err(ClaimError::InvalidSpecifier("empty specifier".into()));
        }
        if input.len() > MAX_SPECIFIER_LEN {
            return Err(ClaimError::InvalidSpecifier(format!(
                "specifier exceeds {MAX_SPECIFIER_LEN} bytes"
            )));
        }

        if input.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = input.parse::<u64>() {
                return Ok(Self::Numeric(index));
            }
        }

        if decode_ss58(input).is_some() {
            return Ok(Self::Address(input.to_string()));
        }

        Ok(Self::Text(input.to_string()))
    }

    /// Canonical account bytes, the form both signer and verifier hash.
    /// Deterministic: the same destination always yields the same bytes.
    pub fn encode(&self) -> Result<Vec<u8>, ClaimError> {
        match self {
            Self::Numeric(index) => Ok(index.to_le_bytes().to_vec()),
            Self::Address(address) => decode_ss58(address)
                .map(|key| key.to_vec())
                .ok_or_else(|| {
                    ClaimError::InvalidSpecifier(format!("not a valid SS58 address: {address}"))
                }),
            Self::Text(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}

impl From<u64> for Destination {
    fn from(index: u64) -> Self {
        Self::Numeric(index)
    }
}

/// Explicit numeric path for callers holding wider integers. A value
/// that does not fit the chain's 64-bit account index is rejected here
/// rather than falling through to the text form.
impl TryFrom<u128> for Destination {
    type Error = ClaimError;

    fn try_from(index: u128) -> Result<Self, Self::Error> {
        u64::try_from(index)
            .map(Self::Numeric)
            .map_err(|_| ClaimError::EncodingOverflow(index))
    }
}

impl std::str::FromStr for Destination {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

/// Decodes an SS58 address to its 32-byte public key.
///
/// Accepts the one-byte (network types 0..=63) and two-byte (64..=16383)
/// prefix forms. The trailing two bytes must equal the leading two bytes
/// of blake2b-512 over `"SS58PRE"` plus prefix plus body. Any failure
/// returns `None` and the caller treats the input as raw text.
fn decode_ss58(address: &str) -> Option<[u8; 32]> {
    let raw = bs58::decode(address).into_vec().ok()?;
    let prefix_len = match *raw.first()? {
        0..=63 => 1,
        64..=127 => 2,
        _ => return None,
    };
    if raw.len() != prefix_len + 32 + 2 {
        return None;
    }

    let (body, checksum) = raw.split_at(raw.len() - 2);
    let mut hasher = Blake2b512::new();
    hasher.update(b"SS58PRE");
    hasher.update(body);
    if hasher.finalize()[..2] != *checksum {
        return None;
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&body[prefix_len..]);
    Some(key)
}
