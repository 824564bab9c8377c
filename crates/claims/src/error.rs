#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    #[error("Invalid destination specifier: {0}")]
    InvalidSpecifier(String),
    #[error("Numeric destination {0} exceeds the 64-bit account index range")]
    EncodingOverflow(u128),
    #[error("Signing failed: {0}")]
    Signing(String),
    #[error("Malformed signature input: {0}")]
    MalformedSignature(String),
}
