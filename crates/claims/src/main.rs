use alloy_primitives::keccak256;
use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use claims_signer::{ClaimSigner, Destination, MessageFormat, to_ascii_hex};

#[derive(Parser)]
struct Args {
    /// Hex-encoded 32-byte Ethereum private key.
    #[clap(long, env = "CLAIMS_SIGNING_KEY", conflicts_with = "seed")]
    key: Option<String>,
    /// Derive the key from a seed string instead (testing only).
    #[clap(long, env = "CLAIMS_SIGNING_SEED")]
    seed: Option<String>,
    /// Destination account: index, SS58 address, or raw text.
    #[clap(long)]
    destination: String,
    /// Extra message payload, hex-encoded.
    #[clap(long, default_value = "")]
    extra: String,
    /// Override the chain's claim prefix text.
    #[clap(long)]
    prefix: Option<String>,
    /// Emit the result as JSON instead of line-oriented text.
    #[clap(long)]
    json: bool,
}

#[derive(Serialize)]
struct SignedClaim {
    destination: String,
    account_bytes: String,
    message_length: usize,
    digest: String,
    signature: String,
    signer_address: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let signer = match (&args.key, &args.seed) {
        (Some(key), _) => ClaimSigner::from_hex(key).context("loading private key")?,
        (None, Some(seed)) => ClaimSigner::from_seed(seed).context("deriving key from seed")?,
        (None, None) => {
            bail!("provide --key or --seed (or CLAIMS_SIGNING_KEY / CLAIMS_SIGNING_SEED)")
        }
    };

    let destination = Destination::resolve(&args.destination)?;
    let extra = hex::decode(args.extra.strip_prefix("0x").unwrap_or(&args.extra))
        .context("decoding --extra hex")?;

    let format = match args.prefix {
        Some(prefix) => MessageFormat::new(prefix.into_bytes()),
        None => MessageFormat::default(),
    };

    let account_bytes = destination.encode()?;
    let message = format.build(&to_ascii_hex(&account_bytes), &extra);
    let signature = signer.sign(&message)?;

    let output = SignedClaim {
        destination: format!("{destination:?}"),
        account_bytes: format!("0x{}", hex::encode(&account_bytes)),
        message_length: message.len(),
        digest: format!("0x{}", hex::encode(keccak256(&message))),
        signature: format!("0x{signature}"),
        signer_address: signer.address().to_string(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("destination:    {}", output.destination);
        println!("account bytes:  {}", output.account_bytes);
        println!("message length: {}", output.message_length);
        println!("keccak digest:  {}", output.digest);
        println!("signature:      {}", output.signature);
        println!("signer address: {}", output.signer_address);
    }

    Ok(())
}
