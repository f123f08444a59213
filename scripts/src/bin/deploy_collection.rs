use anyhow::Result;
use helpers::bytecode::COLLECTION_BYTECODE;
use helpers::evm::{EvmClient, EvmConfig};
use helpers::{init_logging, run_deploy, ArgValue, ContractSpec};

// Local devnet, anvil account #0.
const DEPLOYER_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

const COLLECTION_NAME: &str = "Aurora Relics";
const COLLECTION_SYMBOL: &str = "RELIC";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = EvmConfig {
        private_key: DEPLOYER_KEY.into(),
        ..Default::default()
    };
    let mut client = EvmClient::connect(&config).await?;

    let spec = ContractSpec {
        name: "NftCollection",
        bytecode: COLLECTION_BYTECODE,
    };
    let args = vec![
        ArgValue::Str(COLLECTION_NAME.into()),
        ArgValue::Str(COLLECTION_SYMBOL.into()),
    ];

    let handle = run_deploy(&mut client, &spec, &args).await?;

    println!("Deployed {} at {}", handle.name, handle.address);
    Ok(())
}
