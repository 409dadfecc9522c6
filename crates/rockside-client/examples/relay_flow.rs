/*
[INPUT]:  ROCKSIDE_* environment variables
[OUTPUT]: Smart wallet listing, relay params, and JSON-RPC endpoint printed to stdout
[POS]:    Examples - end-to-end read-only walkthrough
[UPDATE]: When changing the client construction flow
*/

use rockside_client::*;
use tracing_subscriber::EnvFilter;

/// Example: list smart wallets and fetch relay params for the first one
///
/// Requires ROCKSIDE_BASE_URL, ROCKSIDE_NETWORK and one of
/// ROCKSIDE_APIKEY / ROCKSIDE_TOKEN.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match RocksideConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return;
        }
    };

    let client = match RocksideClient::from_config(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("JSON-RPC endpoint: {}", client.rpc_url());

    let identities = match client.get_identities().await {
        Ok(identities) => identities,
        Err(e) => {
            eprintln!("Failed to list smart wallets: {}", e);
            return;
        }
    };
    println!("Smart wallets: {:?}", identities);

    let eoas = match client.get_eoas().await {
        Ok(eoas) => eoas,
        Err(e) => {
            eprintln!("Failed to list EOAs: {}", e);
            return;
        }
    };

    if let (Some(identity), Some(signer)) = (identities.first(), eoas.first()) {
        match client.get_relay_params(identity, signer, 0).await {
            Ok(params) => println!("Relay nonce for {}: {}", identity, params.nonce),
            Err(e) => eprintln!("Failed to fetch relay params: {}", e),
        }
    }
}
