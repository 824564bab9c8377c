use std::future::Future;
use std::time::Duration;

use alloy_primitives::{Address, B256};
use eyre::Report;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::signing::ClaimSignature;

/// Opaque handle for a submitted claim transaction.
pub type TransactionHandle = B256;

/// A claim event reported by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEvent {
    /// Canonical account bytes of the credited destination.
    pub claimant: Vec<u8>,
    /// Ethereum address recovered from the claim signature.
    pub ethereum_address: Address,
    /// Amount credited to the destination.
    pub amount: u128,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Unexpected(#[from] Report),
    #[error("Failed to connect to chain node: {0}")]
    Connection(String),
    #[error("Claim submission rejected: {0}")]
    Rejected(String),
    #[error("Timed out after {0:?} waiting for the chain")]
    TimedOut(Duration),
    #[error("Cancelled while waiting for the chain")]
    Cancelled,
}

/// Chain-side collaborators of the claim flow. The codec produces bytes;
/// implementations of this trait move them on and off the chain.
///
/// `register_claim` dispatches the privileged, administrator-signed call
/// that credits a claim record for an Ethereum address, a prerequisite to
/// any claim. `submit_claim` sends the canonical account bytes and the
/// 65-byte signature as a self-verifying transaction; the runtime
/// re-derives the signable message from the account bytes and checks that
/// the recovered signer matches a credited record. `query_claim_events`
/// reads back the events a settled claim produced.
pub trait ChainGateway: Send + Sync {
    fn register_claim(
        &self,
        ethereum_address: Address,
        amount: u128,
    ) -> BoxFuture<'_, Result<(), GatewayError>>;

    fn submit_claim(
        &self,
        destination: Vec<u8>,
        signature: ClaimSignature,
    ) -> BoxFuture<'_, Result<TransactionHandle, GatewayError>>;

    fn query_claim_events(
        &self,
        handle: TransactionHandle,
    ) -> BoxFuture<'_, Result<Vec<ClaimEvent>, GatewayError>>;
}

/// Drives a gateway call under a caller-supplied cancellation token and
/// optional timeout.
///
/// Cancellation and timeout abort only the wait. A signature produced
/// before the call is unaffected and stays valid for resubmission, since
/// signing never depends on chain state.
pub async fn await_chain<T, F>(
    operation: F,
    timeout: Option<Duration>,
    cancel: &CancellationToken,
) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    debug!(?timeout, "waiting on chain operation");

    let guarded = async {
        match timeout {
            Some(limit) => match tokio::time::timeout(limit, operation).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(?limit, "chain operation timed out");
                    Err(GatewayError::TimedOut(limit))
                }
            },
            None => operation.await,
        }
    };

    tokio::select! {
        _ = cancel.cancelled() => {
            warn!("chain operation cancelled");
            Err(GatewayError::Cancelled)
        }
        result = guarded => result,
    }
}
