pub mod chain;
pub mod encoding;
pub mod error;
pub mod signing;

pub use chain::{ChainGateway, ClaimEvent, GatewayError, TransactionHandle, await_chain};
pub use encoding::{Destination, MessageFormat, to_ascii_hex};
pub use error::ClaimError;
pub use signing::{ClaimSignature, ClaimSigner, recover_address};
