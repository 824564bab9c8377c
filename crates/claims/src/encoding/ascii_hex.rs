/// Renders bytes as their lowercase ASCII-hex byte sequence, high nibble
/// first. Output length is exactly twice the input length.
///
/// The return type stays `Vec<u8>` rather than `String`: the result is
/// spliced verbatim into the larger message buffer that the verifying
/// runtime reconstructs, and the comparison there is on raw bytes.
pub fn to_ascii_hex(data: &[u8]) -> Vec<u8> {
    hex::encode(data).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_the_length() {
        assert_eq!(to_ascii_hex(&[0x00]).len(), 2);
        assert_eq!(to_ascii_hex(&[0xde, 0xad, 0xbe, 0xef]).len(), 8);
        assert_eq!(to_ascii_hex(&[]).len(), 0);
    }

    #[test]
    fn maps_nibbles_high_first() {
        assert_eq!(to_ascii_hex(&[0x00]), b"00");
        assert_eq!(to_ascii_hex(&[0x2a]), b"2a");
        assert_eq!(to_ascii_hex(&[0xff]), b"ff");
        assert_eq!(to_ascii_hex(&[0x01, 0x23, 0x45]), b"012345");
    }

    #[test]
    fn always_lowercase() {
        let encoded = to_ascii_hex(&[0xAB, 0xCD, 0xEF]);
        assert_eq!(encoded, b"abcdef");
        assert!(encoded.iter().all(|b| !b.is_ascii_uppercase()));
    }

    #[test]
    fn inverts_through_hex_decode() {
        let data = [0x00, 0x2a, 0x7f, 0x80, 0xff];
        let decoded = hex::decode(to_ascii_hex(&data)).unwrap();
        assert_eq!(decoded, data);

        let text = b"d43593c7";
        assert_eq!(to_ascii_hex(&hex::decode(text).unwrap()), text);
    }
}
