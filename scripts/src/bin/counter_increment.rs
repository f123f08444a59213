use anyhow::Result;
use helpers::bytecode::COUNTER_BYTECODE;
use helpers::evm::{decode_uint, EvmClient, EvmConfig};
use helpers::{init_logging, run_deploy, run_invoke, CallSpec, ContractSpec};

// Local devnet, anvil account #0.
const DEPLOYER_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = EvmConfig {
        private_key: DEPLOYER_KEY.into(),
        ..Default::default()
    };
    let mut client = EvmClient::connect(&config).await?;

    let spec = ContractSpec {
        name: "Counter",
        bytecode: COUNTER_BYTECODE,
    };
    let handle = run_deploy(&mut client, &spec, &[]).await?;
    println!("Counter deployed at {}", handle.address);

    let receipt = run_invoke(&mut client, &handle, &CallSpec::new("increment", vec![])).await?;
    println!("Increment confirmed in {}", receipt.tx_hash);

    let raw = client
        .query(&handle, &CallSpec::new("current", vec![]))
        .await?;
    let value = decode_uint(&raw)?;
    println!("Counter now at {value}");
    Ok(())
}
