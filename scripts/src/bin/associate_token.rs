use anyhow::Result;
use helpers::evm::{EvmClient, EvmConfig};
use helpers::{
    find_event, init_logging, run_invoke, Address, ArgValue, CallSpec, ContractHandle, U256,
};

// Local devnet, anvil account #0.
const OPERATOR_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

// Pre-deployed token service and the token to associate with the caller.
const TOKEN_SERVICE: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
const TOKEN: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";

// Fee table for the association call.
const ASSOCIATE_FEE_WEI: u128 = 5_000_000_000_000_000; // 0.005 native
const ASSOCIATE_GAS_LIMIT: u64 = 800_000;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = EvmConfig {
        private_key: OPERATOR_KEY.into(),
        ..Default::default()
    };
    let mut client = EvmClient::connect(&config).await?;

    let service = ContractHandle {
        name: "TokenService",
        address: TOKEN_SERVICE.parse::<Address>()?,
    };
    let call = CallSpec::new("associate", vec![ArgValue::Address(TOKEN.parse::<Address>()?)])
        .with_value(U256::from(ASSOCIATE_FEE_WEI))
        .with_gas_limit(ASSOCIATE_GAS_LIMIT);

    let receipt = run_invoke(&mut client, &service, &call).await?;

    match find_event(&receipt, "Associated") {
        Some(event) => println!("{} confirmed in {}", event.name(), receipt.tx_hash),
        None => println!(
            "Association confirmed in {} but no Associated event was emitted",
            receipt.tx_hash
        ),
    }
    Ok(())
}
