mod secp256k1;
mod signature;

pub use secp256k1::{ClaimSigner, recover_address};
pub use signature::{ClaimSignature, SIGNATURE_LEN};
