use anyhow::Result;
use helpers::init_logging;
use helpers::near::{InitCall, NearConfig, NearRunner};
use serde_json::json;

const CONFIG: NearConfig = NearConfig {
    rpc_url: "https://rpc.testnet.near.org",
    signer_account: "collectibles.testnet",
    signer_secret_key: "ed25519:5ojJhHU2MaAs3rzgyKQMQKikP9H4GQZDWzGSTMrJsF1GQxCv4xY3o3oiFr5ZzXVwamYGsezH1k4BN981XiBBTmqi",
};

const WASM_PATH: &str = "artifacts/nft_contract.wasm";
const INIT_GAS: u64 = 50_000_000_000_000; // 50 TGas

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let runner = NearRunner::connect(&CONFIG)?;
    let code = tokio::fs::read(WASM_PATH).await?;
    tracing::info!(bytes = code.len(), path = WASM_PATH, "read contract artifact");

    let init = InitCall {
        method: "new",
        args: json!({
            "owner_id": CONFIG.signer_account,
            "metadata": {
                "spec": "nft-1.0.0",
                "name": "Aurora Relics",
                "symbol": "RELIC",
            },
        }),
        gas: INIT_GAS,
    };

    let outcome = runner.deploy_contract(code, Some(init)).await?;

    println!(
        "Deployed and initialized {} in {}",
        CONFIG.signer_account, outcome.transaction_outcome.id
    );
    Ok(())
}
