use anyhow::Result;
use helpers::bytecode::COLLECTION_BYTECODE;
use helpers::evm::{EvmClient, EvmConfig};
use helpers::{
    find_event, init_logging, run_deploy_then_invoke, Address, ArgValue, CallSpec, ChainEvent,
    ContractSpec,
};

// Local devnet, anvil account #0.
const DEPLOYER_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

const COLLECTION_NAME: &str = "Aurora Relics";
const COLLECTION_SYMBOL: &str = "RELIC";
const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";
const TOKEN_URI: &str = "ipfs://bafybeialrfps3l6qvhqkzaa/relics/1.json";

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
    let constructor_args = vec![
        ArgValue::Str(COLLECTION_NAME.into()),
        ArgValue::Str(COLLECTION_SYMBOL.into()),
    ];
    let mint = CallSpec::new(
        "mint",
        vec![
            ArgValue::Address(RECIPIENT.parse::<Address>()?),
            ArgValue::Str(TOKEN_URI.into()),
        ],
    );

    let (handle, receipt) =
        run_deploy_then_invoke(&mut client, &spec, &constructor_args, &mint).await?;

    println!("Collection deployed at {}", handle.address);
    match find_event(&receipt, "Transfer") {
        Some(ChainEvent::Transfer { to, token_id, .. }) => {
            println!("Minted token {token_id} to {to} in {}", receipt.tx_hash);
        }
        Some(event) => {
            println!("Transfer lookup produced unexpected event {}", event.name());
        }
        None => {
            println!(
                "Mint confirmed in {} but no Transfer event was emitted",
                receipt.tx_hash
            );
        }
    }
    Ok(())
}
