//! EVM client: wallet-filled HTTP provider plus the `ContractClient`
//! sequencing the scripts drive.

use std::time::Duration;

use alloy::consensus::TxReceipt;
use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{keccak256, Bytes, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{Log, TransactionReceipt, TransactionRequest};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use alloy::sol_types::SolEvent;

use crate::artifacts::decode_hex;
use crate::error::OpFailure;
use crate::runner::{
    ArgValue, CallSpec, ChainEvent, ContractClient, ContractHandle, ContractSpec, PendingOp,
    Receipt,
};

sol! {
    event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
    event Minted(address indexed to, uint256 tokenId, string tokenUri);
    event Associated(address indexed account, address indexed token);
}

/// How long to poll for a receipt before giving up on the run.
#[derive(Debug, Clone)]
pub struct ConfirmPolicy {
    pub attempts: u32,
    pub poll_interval: Duration,
}

impl Default for ConfirmPolicy {
    fn default() -> Self {
        Self {
            attempts: 60,
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Connection parameters for a signing EVM client.
#[derive(Debug, Clone)]
pub struct EvmConfig {
    pub rpc_url: String,
    pub chain_id: u64,
    pub private_key: String,
    pub confirm: ConfirmPolicy,
}

impl Default for EvmConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".into(),
            chain_id: 31337,
            private_key: String::new(),
            confirm: ConfirmPolicy::default(),
        }
    }
}

pub struct EvmClient {
    provider: DynProvider,
    confirm: ConfirmPolicy,
    pending_deploy_name: Option<&'static str>,
}

impl EvmClient {
    /// Build a provider around the configured signer and check it is talking
    /// to the chain the script was written for.
    pub async fn connect(config: &EvmConfig) -> Result<Self, OpFailure> {
        let signer: PrivateKeySigner = config
            .private_key
            .parse()
            .map_err(|e| OpFailure::new("parse private key", e))?;
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(&config.rpc_url)
            .await
            .map_err(|e| OpFailure::new("connect provider", e))?
            .erased();

        let endpoint_chain = provider
            .get_chain_id()
            .await
            .map_err(|e| OpFailure::new("query chain id", e))?;
        if endpoint_chain != config.chain_id {
            return Err(OpFailure::new(
                "verify chain id",
                format!(
                    "endpoint reports chain {endpoint_chain}, script expects {}",
                    config.chain_id
                ),
            ));
        }

        Ok(Self {
            provider,
            confirm: config.confirm.clone(),
            pending_deploy_name: None,
        })
    }

    /// Read-only call against a deployed contract.
    pub async fn query(&self, handle: &ContractHandle, call: &CallSpec) -> Result<Bytes, OpFailure> {
        let tx = TransactionRequest::default()
            .with_to(handle.address)
            .with_input(calldata(call.method, &call.args));
        self.provider
            .call(tx)
            .await
            .map_err(|e| OpFailure::new("query", e))
    }

    async fn wait_receipt(
        &self,
        op: &'static str,
        hash: TxHash,
    ) -> Result<TransactionReceipt, OpFailure> {
        for _ in 0..self.confirm.attempts {
            let found = self
                .provider
                .get_transaction_receipt(hash)
                .await
                .map_err(|e| OpFailure::new(op, e))?;
            if let Some(receipt) = found {
                if !receipt.status() {
                    return Err(OpFailure::new(op, format!("transaction {hash} reverted")));
                }
                return Ok(receipt);
            }
            tokio::time::sleep(self.confirm.poll_interval).await;
        }
        Err(OpFailure::new(
            op,
            format!(
                "no receipt for {hash} after {} polls",
                self.confirm.attempts
            ),
        ))
    }
}

impl ContractClient for EvmClient {
    async fn deploy(
        &mut self,
        spec: &ContractSpec,
        args: &[ArgValue],
    ) -> Result<PendingOp, OpFailure> {
        let mut code = decode_hex(spec.bytecode)?;
        if !args.is_empty() {
            code.extend(encode_args(args));
        }
        let tx = TransactionRequest::default().with_deploy_code(code);
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| OpFailure::new("deploy", e))?;
        let hash = *pending.tx_hash();
        tracing::info!(contract = spec.name, tx = %hash, "deployment submitted");
        self.pending_deploy_name = Some(spec.name);
        Ok(PendingOp {
            id: hash.to_string(),
        })
    }

    async fn confirm_deploy(&mut self, pending: PendingOp) -> Result<ContractHandle, OpFailure> {
        let hash = parse_op_hash("confirm deploy", &pending)?;
        let receipt = self.wait_receipt("confirm deploy", hash).await?;
        let address = receipt.contract_address.ok_or_else(|| {
            OpFailure::new("confirm deploy", format!("receipt for {hash} has no address"))
        })?;
        Ok(ContractHandle {
            name: self.pending_deploy_name.take().unwrap_or("contract"),
            address,
        })
    }

    async fn invoke(
        &mut self,
        handle: &ContractHandle,
        call: &CallSpec,
    ) -> Result<PendingOp, OpFailure> {
        let mut tx = TransactionRequest::default()
            .with_to(handle.address)
            .with_input(calldata(call.method, &call.args));
        if let Some(value) = call.value {
            tx = tx.with_value(value);
        }
        if let Some(gas_limit) = call.gas_limit {
            tx = tx.with_gas_limit(gas_limit);
        }
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| OpFailure::new("invoke", e))?;
        let hash = *pending.tx_hash();
        tracing::info!(method = call.method, contract = %handle.address, tx = %hash, "call submitted");
        Ok(PendingOp {
            id: hash.to_string(),
        })
    }

    async fn confirm_invoke(&mut self, pending: PendingOp) -> Result<Receipt, OpFailure> {
        let hash = parse_op_hash("confirm invoke", &pending)?;
        let receipt = self.wait_receipt("confirm invoke", hash).await?;
        Ok(Receipt {
            tx_hash: pending.id,
            gas_used: receipt.gas_used as u64,
            events: decode_events(&receipt),
        })
    }
}

fn parse_op_hash(op: &'static str, pending: &PendingOp) -> Result<TxHash, OpFailure> {
    pending
        .id
        .parse::<TxHash>()
        .map_err(|e| OpFailure::new(op, e))
}

/// 4-byte selector derived from the method name and the argument types.
fn selector(method: &str, args: &[ArgValue]) -> [u8; 4] {
    let types: Vec<&str> = args.iter().map(ArgValue::sol_type_name).collect();
    let signature = format!("{}({})", method, types.join(","));
    let digest = keccak256(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

fn calldata(method: &str, args: &[ArgValue]) -> Bytes {
    let mut data = selector(method, args).to_vec();
    data.extend(encode_args(args));
    Bytes::from(data)
}

fn encode_args(args: &[ArgValue]) -> Vec<u8> {
    let values: Vec<DynSolValue> = args.iter().map(to_sol_value).collect();
    DynSolValue::Tuple(values).abi_encode_params()
}

fn to_sol_value(arg: &ArgValue) -> DynSolValue {
    match arg {
        ArgValue::Address(address) => DynSolValue::Address(*address),
        ArgValue::Uint(value) => DynSolValue::Uint(*value, 256),
        ArgValue::Uint64(value) => DynSolValue::Uint(U256::from(*value), 64),
        ArgValue::Str(value) => DynSolValue::String(value.clone()),
        ArgValue::Bytes(value) => DynSolValue::Bytes(value.clone()),
        ArgValue::Bool(value) => DynSolValue::Bool(*value),
    }
}

/// Decode a single ABI-encoded uint256 return value.
pub fn decode_uint(data: &[u8]) -> Result<U256, OpFailure> {
    let value = DynSolType::Uint(256)
        .abi_decode(data)
        .map_err(|e| OpFailure::new("decode uint256", e))?;
    match value.as_uint() {
        Some((value, _)) => Ok(value),
        None => Err(OpFailure::new("decode uint256", "return value is not a uint")),
    }
}

fn decode_events(receipt: &TransactionReceipt) -> Vec<ChainEvent> {
    receipt.inner.logs().iter().map(decode_log).collect()
}

fn decode_log(log: &Log) -> ChainEvent {
    let topic0 = log.topic0().copied();
    if topic0 == Some(Transfer::SIGNATURE_HASH) {
        if let Ok(event) = Transfer::decode_log(&log.inner) {
            return ChainEvent::Transfer {
                from: event.data.from,
                to: event.data.to,
                token_id: event.data.tokenId,
            };
        }
    }
    if topic0 == Some(Minted::SIGNATURE_HASH) {
        if let Ok(event) = Minted::decode_log(&log.inner) {
            return ChainEvent::Minted {
                to: event.data.to,
                token_id: event.data.tokenId,
                token_uri: event.data.tokenUri.clone(),
            };
        }
    }
    if topic0 == Some(Associated::SIGNATURE_HASH) {
        if let Ok(event) = Associated::decode_log(&log.inner) {
            return ChainEvent::Associated {
                account: event.data.account,
                token: event.data.token,
            };
        }
    }
    ChainEvent::Other {
        name: topic0
            .map(|topic| topic.to_string())
            .unwrap_or_else(|| "anonymous".into()),
    }
}
