mod account;
mod ascii_hex;
mod message;

pub use account::Destination;
pub use ascii_hex::to_ascii_hex;
pub use message::{DEFAULT_PREFIX, ETHEREUM_PREAMBLE, MessageFormat};
