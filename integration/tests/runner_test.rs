use helpers::{
    find_event, run_deploy_then_invoke, run_invoke, ArgValue, CallSpec, ChainEvent, ContractHandle,
    ContractSpec, U256,
};
use integration::fakes::FakeContractClient;

fn collection_spec() -> ContractSpec {
    ContractSpec {
        name: "NftCollection",
        bytecode: "6080",
    }
}

#[tokio::test]
async fn deploy_then_mint_runs_in_order() -> anyhow::Result<()> {
    let mut client = FakeContractClient::default();
    let args = vec![
        ArgValue::Str("Aurora Relics".into()),
        ArgValue::Str("RELIC".into()),
    ];
    let mint = CallSpec::new(
        "mint",
        vec![
            ArgValue::Address(FakeContractClient::deployed_address()),
            ArgValue::Str("ipfs://relics/1.json".into()),
        ],
    );

    let (handle, receipt) =
        run_deploy_then_invoke(&mut client, &collection_spec(), &args, &mint).await?;

    assert_eq!(handle.address, FakeContractClient::deployed_address());
    assert_eq!(receipt.tx_hash, "op-2");
    assert_eq!(
        client.journal,
        vec![
            format!("deploy NftCollection {args:?}"),
            "confirm_deploy op-1".to_string(),
            format!(
                "invoke mint@{} {:?} value={:?} gas={:?}",
                handle.address, mint.args, mint.value, mint.gas_limit
            ),
            "confirm_invoke op-2".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn invoke_forwards_value_and_gas_overrides() -> anyhow::Result<()> {
    let mut client = FakeContractClient::default();
    let service = ContractHandle {
        name: "TokenService",
        address: FakeContractClient::deployed_address(),
    };
    let call = CallSpec::new(
        "associate",
        vec![ArgValue::Address(FakeContractClient::deployed_address())],
    )
    .with_value(U256::from(5_000_000_000_000_000u64))
    .with_gas_limit(800_000);

    run_invoke(&mut client, &service, &call).await?;

    assert_eq!(
        client.journal[0],
        format!(
            "invoke associate@{} {:?} value={:?} gas={:?}",
            service.address, call.args, call.value, call.gas_limit
        )
    );
    Ok(())
}

#[tokio::test]
async fn deploy_failure_prevents_the_mint() {
    let mut client = FakeContractClient {
        fail_deploy: true,
        ..Default::default()
    };
    let mint = CallSpec::new("mint", vec![]);

    let result = run_deploy_then_invoke(&mut client, &collection_spec(), &[], &mint).await;

    let error = result.expect_err("deploy failure must abort the run");
    assert_eq!(error.op, "deploy");
    // Only the failed deploy attempt is journaled; the mint never happens.
    assert_eq!(client.journal.len(), 1);
    assert!(client.journal[0].starts_with("deploy "));
}

#[tokio::test]
async fn invoke_failure_surfaces_after_successful_deploy() {
    let mut client = FakeContractClient {
        fail_invoke: true,
        ..Default::default()
    };
    let mint = CallSpec::new("mint", vec![]);

    let result = run_deploy_then_invoke(&mut client, &collection_spec(), &[], &mint).await;

    let error = result.expect_err("invoke failure must abort the run");
    assert_eq!(error.op, "invoke");
    assert_eq!(client.journal.len(), 3); // deploy, confirm_deploy, failed invoke
}

#[tokio::test]
async fn missing_event_is_a_distinguishable_outcome() -> anyhow::Result<()> {
    let mut client = FakeContractClient::with_events(vec![ChainEvent::Other {
        name: "Paused".into(),
    }]);
    let mint = CallSpec::new("mint", vec![]);

    let (_, receipt) =
        run_deploy_then_invoke(&mut client, &collection_spec(), &[], &mint).await?;

    // The lookup comes back empty without failing the run.
    assert!(find_event(&receipt, "Transfer").is_none());
    Ok(())
}

#[tokio::test]
async fn emitted_event_is_found_with_its_arguments() -> anyhow::Result<()> {
    let recipient = FakeContractClient::deployed_address();
    let mut client = FakeContractClient::with_events(vec![
        ChainEvent::Other {
            name: "Approval".into(),
        },
        ChainEvent::Transfer {
            from: helpers::Address::ZERO,
            to: recipient,
            token_id: U256::from(7),
        },
    ]);
    let mint = CallSpec::new("mint", vec![]);

    let (_, receipt) =
        run_deploy_then_invoke(&mut client, &collection_spec(), &[], &mint).await?;

    match find_event(&receipt, "Transfer") {
        Some(ChainEvent::Transfer { to, token_id, .. }) => {
            assert_eq!(*to, recipient);
            assert_eq!(*token_id, U256::from(7));
        }
        other => panic!("expected the Transfer event, got {other:?}"),
    }
    Ok(())
}
