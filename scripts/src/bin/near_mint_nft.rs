use anyhow::Result;
use helpers::init_logging;
use helpers::near::{NearConfig, NearRunner};
use rand::Rng;
use serde_json::json;

const CONFIG: NearConfig = NearConfig {
    rpc_url: "https://rpc.testnet.near.org",
    signer_account: "collectibles.testnet",
    signer_secret_key: "ed25519:5ojJhHU2MaAs3rzgyKQMQKikP9H4GQZDWzGSTMrJsF1GQxCv4xY3o3oiFr5ZzXVwamYGsezH1k4BN981XiBBTmqi",
};

const NFT_CONTRACT: &str = "nft.collectibles.testnet";
const RECEIVER: &str = "collector.testnet";
const MINT_GAS: u64 = 100_000_000_000_000; // 100 TGas
const MINT_DEPOSIT: u128 = 10_000_000_000_000_000_000_000; // 0.01 NEAR, storage

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let runner = NearRunner::connect(&CONFIG)?;

    // Randomized id so re-running the script never collides with an
    // already-minted token.
    let token_id = format!("relic-{:06}", rand::rng().random_range(0..1_000_000));
    let args = json!({
        "token_id": token_id,
        "receiver_id": RECEIVER,
        "token_metadata": {
            "title": format!("Relic {token_id}"),
            "media": "ipfs://bafybeialrfps3l6qvhqkzaa/relics/preview.png",
            "copies": 1,
        },
    });

    let outcome = runner
        .function_call(NFT_CONTRACT, "nft_mint", args, MINT_GAS, MINT_DEPOSIT)
        .await?;

    println!(
        "Minted {token_id} for {RECEIVER} in {}",
        outcome.transaction_outcome.id
    );
    Ok(())
}
