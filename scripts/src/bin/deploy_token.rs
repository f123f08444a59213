use anyhow::Result;
use helpers::bytecode::TOKEN_BYTECODE;
use helpers::evm::{EvmClient, EvmConfig};
use helpers::{init_logging, run_deploy, ArgValue, ContractSpec, U256};

// Local devnet, anvil account #0.
const DEPLOYER_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

const TOKEN_NAME: &str = "Demo Credits";
const TOKEN_SYMBOL: &str = "DMC";
const TOKEN_SUPPLY: u64 = 1_000_000;
const TOKEN_DECIMALS: u64 = 18;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = EvmConfig {
        private_key: DEPLOYER_KEY.into(),
        ..Default::default()
    };
    let mut client = EvmClient::connect(&config).await?;

    let initial_supply = U256::from(TOKEN_SUPPLY) * U256::from(10u64).pow(U256::from(TOKEN_DECIMALS));
    let spec = ContractSpec {
        name: "DemoToken",
        bytecode: TOKEN_BYTECODE,
    };
    let args = vec![
        ArgValue::Str(TOKEN_NAME.into()),
        ArgValue::Str(TOKEN_SYMBOL.into()),
        ArgValue::Uint(initial_supply),
    ];

    let handle = run_deploy(&mut client, &spec, &args).await?;

    println!(
        "Deployed {} ({TOKEN_SYMBOL}) at {} with supply {initial_supply}",
        handle.name, handle.address
    );
    Ok(())
}
