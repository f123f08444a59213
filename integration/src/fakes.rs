//! Recording stand-ins for the external chain clients.

use helpers::{
    Address, ArgValue, CallSpec, ChainEvent, ContractClient, ContractHandle, ContractSpec,
    OpFailure, PendingOp, Receipt,
};

/// A fake chain client that journals every call in order and can be
/// scripted to fail a step or emit a fixed set of receipt events.
#[derive(Default)]
pub struct FakeContractClient {
    pub journal: Vec<String>,
    pub fail_deploy: bool,
    pub fail_invoke: bool,
    pub receipt_events: Vec<ChainEvent>,
    pub ops: u64,
}

impl FakeContractClient {
    pub fn with_events(events: Vec<ChainEvent>) -> Self {
        Self {
            receipt_events: events,
            ..Default::default()
        }
    }

    /// Deterministic address, so tests can assert that a deployment is
    /// threaded into the follow-up call.
    pub fn deployed_address() -> Address {
        Address::repeat_byte(0x42)
    }

    fn next_op(&mut self) -> PendingOp {
        self.ops += 1;
        PendingOp {
            id: format!("op-{}", self.ops),
        }
    }
}

impl ContractClient for FakeContractClient {
    async fn deploy(
        &mut self,
        spec: &ContractSpec,
        args: &[ArgValue],
    ) -> Result<PendingOp, OpFailure> {
        self.journal.push(format!("deploy {} {:?}", spec.name, args));
        if self.fail_deploy {
            return Err(OpFailure::new("deploy", "injected failure"));
        }
        Ok(self.next_op())
    }

    async fn confirm_deploy(&mut self, pending: PendingOp) -> Result<ContractHandle, OpFailure> {
        self.journal.push(format!("confirm_deploy {}", pending.id));
        Ok(ContractHandle {
            name: "fake",
            address: Self::deployed_address(),
        })
    }

    async fn invoke(
        &mut self,
        handle: &ContractHandle,
        call: &CallSpec,
    ) -> Result<PendingOp, OpFailure> {
        self.journal.push(format!(
            "invoke {}@{} {:?} value={:?} gas={:?}",
            call.method, handle.address, call.args, call.value, call.gas_limit
        ));
        if self.fail_invoke {
            return Err(OpFailure::new("invoke", "injected failure"));
        }
        Ok(self.next_op())
    }

    async fn confirm_invoke(&mut self, pending: PendingOp) -> Result<Receipt, OpFailure> {
        self.journal.push(format!("confirm_invoke {}", pending.id));
        Ok(Receipt {
            tx_hash: pending.id,
            gas_used: 21_000,
            events: self.receipt_events.clone(),
        })
    }
}
