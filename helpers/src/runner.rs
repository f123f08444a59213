//! The one-shot runner every deployment script instantiates: fixed
//! parameters in, ordered confirmed operations out.

use alloy::primitives::{Address, U256};

use crate::error::OpFailure;

/// A deployable contract: display name plus creation bytecode (hex).
#[derive(Debug, Clone)]
pub struct ContractSpec {
    pub name: &'static str,
    pub bytecode: &'static str,
}

/// A typed constructor or call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Address(Address),
    Uint(U256),
    Uint64(u64),
    Str(String),
    Bytes(Vec<u8>),
    Bool(bool),
}

impl ArgValue {
    /// Solidity type name, used when deriving a call signature.
    pub fn sol_type_name(&self) -> &'static str {
        match self {
            ArgValue::Address(_) => "address",
            ArgValue::Uint(_) => "uint256",
            ArgValue::Uint64(_) => "uint64",
            ArgValue::Str(_) => "string",
            ArgValue::Bytes(_) => "bytes",
            ArgValue::Bool(_) => "bool",
        }
    }
}

/// One method invocation, with optional attached value and gas override.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSpec {
    pub method: &'static str,
    pub args: Vec<ArgValue>,
    pub value: Option<U256>,
    pub gas_limit: Option<u64>,
}

impl CallSpec {
    pub fn new(method: &'static str, args: Vec<ArgValue>) -> Self {
        Self {
            method,
            args,
            value: None,
            gas_limit: None,
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }
}

/// Opaque handle for a submitted-but-unconfirmed operation (a transaction
/// hash on every chain the scripts target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOp {
    pub id: String,
}

/// A confirmed deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractHandle {
    pub name: &'static str,
    pub address: Address,
}

/// Confirmation of an invocation, carrying the events it emitted in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub tx_hash: String,
    pub gas_used: u64,
    pub events: Vec<ChainEvent>,
}

/// Decoded receipt events, one variant per event the scripts inspect.
/// Anything unrecognized lands in `Other` with its raw identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainEvent {
    Transfer {
        from: Address,
        to: Address,
        token_id: U256,
    },
    Minted {
        to: Address,
        token_id: U256,
        token_uri: String,
    },
    Associated {
        account: Address,
        token: Address,
    },
    Other {
        name: String,
    },
}

impl ChainEvent {
    pub fn name(&self) -> &str {
        match self {
            ChainEvent::Transfer { .. } => "Transfer",
            ChainEvent::Minted { .. } => "Minted",
            ChainEvent::Associated { .. } => "Associated",
            ChainEvent::Other { name } => name,
        }
    }
}

/// Linear scan for the first event with the given name. Zero matches is a
/// regular outcome, not an error.
pub fn find_event<'a>(receipt: &'a Receipt, name: &str) -> Option<&'a ChainEvent> {
    receipt.events.iter().find(|event| event.name() == name)
}

/// The collaborator contract every chain client implements: submit an
/// operation, then confirm it before the next one is issued.
#[allow(async_fn_in_trait)]
pub trait ContractClient {
    async fn deploy(
        &mut self,
        spec: &ContractSpec,
        args: &[ArgValue],
    ) -> Result<PendingOp, OpFailure>;

    async fn confirm_deploy(&mut self, pending: PendingOp) -> Result<ContractHandle, OpFailure>;

    async fn invoke(
        &mut self,
        handle: &ContractHandle,
        call: &CallSpec,
    ) -> Result<PendingOp, OpFailure>;

    async fn confirm_invoke(&mut self, pending: PendingOp) -> Result<Receipt, OpFailure>;
}

/// Deploy and wait for the deployment to land.
pub async fn run_deploy<C: ContractClient>(
    client: &mut C,
    spec: &ContractSpec,
    args: &[ArgValue],
) -> Result<ContractHandle, OpFailure> {
    let pending = client.deploy(spec, args).await?;
    client.confirm_deploy(pending).await
}

/// Invoke a method on a deployed contract and wait for its receipt.
pub async fn run_invoke<C: ContractClient>(
    client: &mut C,
    handle: &ContractHandle,
    call: &CallSpec,
) -> Result<Receipt, OpFailure> {
    let pending = client.invoke(handle, call).await?;
    client.confirm_invoke(pending).await
}

/// Deploy, then thread the fresh address into a follow-up invocation.
pub async fn run_deploy_then_invoke<C: ContractClient>(
    client: &mut C,
    spec: &ContractSpec,
    args: &[ArgValue],
    call: &CallSpec,
) -> Result<(ContractHandle, Receipt), OpFailure> {
    let handle = run_deploy(client, spec, args).await?;
    let receipt = run_invoke(client, &handle, call).await?;
    Ok((handle, receipt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt_with(events: Vec<ChainEvent>) -> Receipt {
        Receipt {
            tx_hash: "0xabc".into(),
            gas_used: 21_000,
            events,
        }
    }

    #[test]
    fn find_event_returns_first_match_in_order() {
        let receipt = receipt_with(vec![
            ChainEvent::Other {
                name: "Approval".into(),
            },
            ChainEvent::Transfer {
                from: Address::ZERO,
                to: Address::repeat_byte(0x11),
                token_id: U256::from(1),
            },
            ChainEvent::Transfer {
                from: Address::ZERO,
                to: Address::repeat_byte(0x22),
                token_id: U256::from(2),
            },
        ]);

        match find_event(&receipt, "Transfer") {
            Some(ChainEvent::Transfer { token_id, .. }) => assert_eq!(*token_id, U256::from(1)),
            other => panic!("expected the first Transfer, got {other:?}"),
        }
    }

    #[test]
    fn find_event_with_no_match_is_none() {
        let receipt = receipt_with(vec![ChainEvent::Other {
            name: "Paused".into(),
        }]);
        assert!(find_event(&receipt, "Transfer").is_none());
    }

    #[test]
    fn find_event_matches_other_by_raw_name() {
        let receipt = receipt_with(vec![ChainEvent::Other {
            name: "Paused".into(),
        }]);
        assert!(find_event(&receipt, "Paused").is_some());
    }

    #[test]
    fn call_spec_builders_set_overrides() {
        let call = CallSpec::new("associate", vec![])
            .with_value(U256::from(5))
            .with_gas_limit(800_000);
        assert_eq!(call.value, Some(U256::from(5)));
        assert_eq!(call.gas_limit, Some(800_000));
    }
}
