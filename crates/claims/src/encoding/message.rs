use crate::error::ClaimError;

use super::account::Destination;
use super::ascii_hex::to_ascii_hex;

/// Wallet-standard preamble for Ethereum personal messages. Framing the
/// claim this way keeps wallets willing to sign it and keeps the signed
/// bytes from being interpretable as transaction data.
pub const ETHEREUM_PREAMBLE: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Prefix constant compiled into the verifying runtime of the test
/// chain. Must match byte for byte, spelling and punctuation included.
pub const DEFAULT_PREFIX: &[u8] = b"Pay RUSTs to the TEST account:";

/// Layout of the signable claim message: the preamble and prefix the
/// verifying runtime uses when it reconstructs the message on its side.
///
/// Both constants are held as values so a chain with a different prefix
/// is a single construction-site change, not an edit to the assembly
/// logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFormat {
    preamble: Vec<u8>,
    prefix: Vec<u8>,
}

impl MessageFormat {
    /// Format with the standard preamble and the given chain prefix.
    pub fn new(prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            preamble: ETHEREUM_PREAMBLE.to_vec(),
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Assembles the exact byte sequence that gets hashed and signed.
    ///
    /// The decimal length field counts the three segments that follow it
    /// (prefix, hex-expanded account bytes, extra), never the preamble or
    /// the digits themselves. Pure byte assembly, no hashing.
    pub fn build(&self, account_hex: &[u8], extra: &[u8]) -> Vec<u8> {
        let payload_len = self.prefix.len() + account_hex.len() + extra.len();
        let digits = payload_len.to_string();

        let mut message =
            Vec::with_capacity(self.preamble.len() + digits.len() + payload_len);
        message.extend_from_slice(&self.preamble);
        message.extend_from_slice(digits.as_bytes());
        message.extend_from_slice(&self.prefix);
        message.extend_from_slice(account_hex);
        message.extend_from_slice(extra);
        message
    }

    /// Encodes a destination and frames its claim message in one step.
    pub fn claim_message(
        &self,
        destination: &Destination,
        extra: &[u8],
    ) -> Result<Vec<u8>, ClaimError> {
        let account_hex = to_ascii_hex(&destination.encode()?);
        Ok(self.build(&account_hex, extra))
    }
}

impl Default for MessageFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_have_expected_widths() {
        assert_eq!(ETHEREUM_PREAMBLE.len(), 26);
        assert_eq!(DEFAULT_PREFIX.len(), 30);
        assert_eq!(MessageFormat::default().prefix(), DEFAULT_PREFIX);
    }

    #[test]
    fn builds_exact_message_for_numeric_account() {
        // 8 account bytes hex-expand to 16, so the payload is 30 + 16 = 46.
        let message = MessageFormat::default().build(b"2a00000000000000", b"");
        assert_eq!(
            message,
            b"\x19Ethereum Signed Message:\n46Pay RUSTs to the TEST account:2a00000000000000"
        );
        assert_eq!(message.len(), 74);
    }

    #[test]
    fn length_field_covers_prefix_account_and_extra() {
        let format = MessageFormat::default();
        for (account_hex, extra) in [
            (&b""[..], &b""[..]),
            (&b"2a00000000000000"[..], &b""[..]),
            (&b"2a00000000000000"[..], &b"extra data"[..]),
            (&[b'a'; 64][..], &b""[..]),
        ] {
            let payload_len = DEFAULT_PREFIX.len() + account_hex.len() + extra.len();
            let digits = payload_len.to_string();
            let message = format.build(account_hex, extra);
            assert_eq!(
                message.len(),
                ETHEREUM_PREAMBLE.len() + digits.len() + payload_len
            );
            assert!(message.ends_with(extra));
        }
    }

    #[test]
    fn digits_are_plain_decimal() {
        let message = MessageFormat::default().build(b"", b"");
        // Payload is just the 30-byte prefix.
        assert_eq!(&message[26..28], b"30");
        assert_eq!(&message[28..], DEFAULT_PREFIX);
    }

    #[test]
    fn custom_prefix_replaces_default() {
        let format = MessageFormat::new(b"Pay KSMs to the Kusama account:".as_slice());
        let message = format.build(b"2a00000000000000", b"");
        assert!(!message.windows(DEFAULT_PREFIX.len()).any(|w| w == DEFAULT_PREFIX));
        // 31-byte prefix + 16 hex bytes = 47.
        assert_eq!(&message[26..28], b"47");
    }

    #[test]
    fn claim_message_runs_encode_and_hex() {
        let format = MessageFormat::default();
        let destination = Destination::Numeric(42);
        assert_eq!(
            format.claim_message(&destination, b"").unwrap(),
            format.build(b"2a00000000000000", b"")
        );
    }

    #[test]
    fn extra_bytes_are_appended_verbatim() {
        let format = MessageFormat::default();
        let message = format.claim_message(&Destination::Numeric(42), b"extra data").unwrap();
        assert_eq!(message.len(), 84);
        assert!(message.ends_with(b"extra data"));
        // 30 + 16 + 10 = 56.
        assert_eq!(&message[26..28], b"56");
    }
}
