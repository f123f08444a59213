//! Shared helpers for the deployment and interaction scripts.

pub mod artifacts;
pub mod bytecode;
pub mod error;
pub mod evm;
pub mod icp;
pub mod logging;
pub mod near;
pub mod runner;
pub mod ton;

// Re-export the primitives and runner surface the scripts use most.
pub use alloy::primitives::{Address, U256};
pub use error::OpFailure;
pub use logging::init_logging;
pub use runner::{
    find_event, run_deploy, run_deploy_then_invoke, run_invoke, ArgValue, CallSpec, ChainEvent,
    ContractClient, ContractHandle, ContractSpec, PendingOp, Receipt,
};
