//! One-shot signed NEAR transactions over JSON-RPC.

use near_crypto::{InMemorySigner, PublicKey, SecretKey, Signer};
use near_jsonrpc_client::{methods, JsonRpcClient};
use near_jsonrpc_primitives::types::query::QueryResponseKind;
use near_primitives::hash::CryptoHash;
use near_primitives::transaction::{
    Action, DeployContractAction, FunctionCallAction, Transaction, TransactionV0,
};
use near_primitives::types::{AccountId, BlockReference, Finality};
use near_primitives::views::{FinalExecutionOutcomeView, FinalExecutionStatus, QueryRequest};

use crate::error::OpFailure;

/// Connection parameters for a signing NEAR client.
#[derive(Debug, Clone)]
pub struct NearConfig {
    pub rpc_url: &'static str,
    pub signer_account: &'static str,
    pub signer_secret_key: &'static str,
}

/// An initializer call bundled into a contract deployment transaction.
pub struct InitCall {
    pub method: &'static str,
    pub args: serde_json::Value,
    pub gas: u64,
}

pub struct NearRunner {
    client: JsonRpcClient,
    account_id: AccountId,
    public_key: PublicKey,
    signer: Signer,
}

impl NearRunner {
    pub fn connect(config: &NearConfig) -> Result<Self, OpFailure> {
        let account_id: AccountId = config
            .signer_account
            .parse()
            .map_err(|e| OpFailure::new("parse signer account", e))?;
        let secret_key: SecretKey = config
            .signer_secret_key
            .parse()
            .map_err(|e| OpFailure::new("parse signer key", e))?;
        let public_key = secret_key.public_key();
        let signer = InMemorySigner::from_secret_key(account_id.clone(), secret_key);
        Ok(Self {
            client: JsonRpcClient::connect(config.rpc_url),
            account_id,
            public_key,
            signer,
        })
    }

    /// Sign and broadcast a single function call, awaiting final execution.
    pub async fn function_call(
        &self,
        receiver: &str,
        method: &str,
        args: serde_json::Value,
        gas: u64,
        deposit: u128,
    ) -> Result<FinalExecutionOutcomeView, OpFailure> {
        let receiver_id: AccountId = receiver
            .parse()
            .map_err(|e| OpFailure::new("parse receiver account", e))?;
        let action = Action::FunctionCall(Box::new(FunctionCallAction {
            method_name: method.to_string(),
            args: args.to_string().into_bytes(),
            gas,
            deposit,
        }));
        self.broadcast("function call", receiver_id, vec![action])
            .await
    }

    /// Deploy compiled WASM to the signer account, optionally invoking its
    /// initializer in the same transaction.
    pub async fn deploy_contract(
        &self,
        code: Vec<u8>,
        init: Option<InitCall>,
    ) -> Result<FinalExecutionOutcomeView, OpFailure> {
        let mut actions = vec![Action::DeployContract(DeployContractAction { code })];
        if let Some(init) = init {
            actions.push(Action::FunctionCall(Box::new(FunctionCallAction {
                method_name: init.method.to_string(),
                args: init.args.to_string().into_bytes(),
                gas: init.gas,
                deposit: 0,
            })));
        }
        self.broadcast("deploy contract", self.account_id.clone(), actions)
            .await
    }

    /// Nonce and recent block hash for the signer's access key.
    async fn access_key_state(&self) -> Result<(u64, CryptoHash), OpFailure> {
        let response = self
            .client
            .call(methods::query::RpcQueryRequest {
                block_reference: BlockReference::Finality(Finality::Final),
                request: QueryRequest::ViewAccessKey {
                    account_id: self.account_id.clone(),
                    public_key: self.public_key.clone(),
                },
            })
            .await
            .map_err(|e| OpFailure::new("query access key", e))?;
        match response.kind {
            QueryResponseKind::AccessKey(access_key) => Ok((access_key.nonce, response.block_hash)),
            _ => Err(OpFailure::new(
                "query access key",
                "unexpected query response kind",
            )),
        }
    }

    async fn broadcast(
        &self,
        op: &'static str,
        receiver_id: AccountId,
        actions: Vec<Action>,
    ) -> Result<FinalExecutionOutcomeView, OpFailure> {
        let (nonce, block_hash) = self.access_key_state().await?;
        let transaction = Transaction::V0(TransactionV0 {
            signer_id: self.account_id.clone(),
            public_key: self.public_key.clone(),
            nonce: nonce + 1,
            receiver_id,
            block_hash,
            actions,
        });
        tracing::info!(signer = %self.account_id, op, "broadcasting transaction");
        let outcome = self
            .client
            .call(methods::broadcast_tx_commit::RpcBroadcastTxCommitRequest {
                signed_transaction: transaction.sign(&self.signer),
            })
            .await
            .map_err(|e| OpFailure::new(op, e))?;

        if let FinalExecutionStatus::Failure(error) = &outcome.status {
            return Err(OpFailure::new(op, format!("{error:?}")));
        }
        if !matches!(outcome.status, FinalExecutionStatus::SuccessValue(_)) {
            return Err(OpFailure::new(
                op,
                format!("terminal status missing: {:?}", outcome.status),
            ));
        }
        Ok(outcome)
    }
}
