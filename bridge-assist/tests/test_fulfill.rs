//! Integration tests for the inbound `fulfill` flow: signature consensus,
//! replay protection, fee math, and domain separation.

use cosmwasm_std::{Addr, Binary, Uint128};
use cw_multi_test::Executor;

use bridge_assist::msg::{ExecuteMsg, FulfillTx, IsFulfilledResponse, QueryMsg};

mod helpers;
use helpers::{
    bridge_setup, contract_bridge, contract_cw20, default_instantiate, instantiate_token, setup,
    token_balance, Relayer, FEE_WALLET, NEAR_CHAIN, NEAR_RATE, OWNER, USER,
};

const NEAR_ADDRESS: &str = "gotbit.testnet";

fn fulfill_tx(to_user: &str, amount: u128, nonce: u64) -> FulfillTx {
    FulfillTx {
        amount: Uint128::new(amount),
        from_user: NEAR_ADDRESS.to_string(),
        to_user: to_user.to_string(),
        from_chain: NEAR_CHAIN.to_string(),
        nonce,
    }
}

#[test]
fn fulfill_releases_scaled_amount_once() {
    let (mut app, bridge, token, relayer) = setup();
    let chain_id = app.block_info().chain_id;

    // 10 * 10^9 in converted units, released at rate 10^9
    let tx = fulfill_tx(USER, 10_000_000_000, 0);
    let signature = relayer.sign_fulfill(&chain_id, &bridge, &tx);

    app.execute_contract(
        Addr::unchecked(USER),
        bridge.clone(),
        &ExecuteMsg::Fulfill {
            tx: tx.clone(),
            signatures: vec![signature.clone()],
        },
        &[],
    )
    .unwrap();

    assert_eq!(
        token_balance(&app, &token, USER),
        10_000_000_000 * NEAR_RATE
    );

    let res: IsFulfilledResponse = app
        .wrap()
        .query_wasm_smart(&bridge, &QueryMsg::IsFulfilled { tx: tx.clone() })
        .unwrap();
    assert!(res.fulfilled);

    // second identical submission hits the replay set
    let err = app
        .execute_contract(
            Addr::unchecked(USER),
            bridge.clone(),
            &ExecuteMsg::Fulfill {
                tx,
                signatures: vec![signature],
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Signature already fulfilled"));
}

#[test]
fn fulfill_multiple_users() {
    let (mut app, bridge, token, relayer) = setup();
    let chain_id = app.block_info().chain_id;

    let cases = [
        ("user", 10_000_000_000u128, 0u64),
        ("usera", 777_000_000_000, 1),
        ("userb", 999_000_000_000, 2),
    ];
    for (user, amount, nonce) in cases {
        let tx = fulfill_tx(user, amount, nonce);
        let signature = relayer.sign_fulfill(&chain_id, &bridge, &tx);
        app.execute_contract(
            Addr::unchecked(user),
            bridge.clone(),
            &ExecuteMsg::Fulfill {
                tx,
                signatures: vec![signature],
            },
            &[],
        )
        .unwrap();
        assert_eq!(token_balance(&app, &token, user), amount * NEAR_RATE);
    }
}

#[test]
fn fulfill_validation_errors() {
    let (mut app, bridge, _token, relayer) = setup();
    let chain_id = app.block_info().chain_id;

    let tx = fulfill_tx(USER, 10_000_000_000, 0);
    let signature = relayer.sign_fulfill(&chain_id, &bridge, &tx);

    // unknown source chain
    let mut wrong_chain = tx.clone();
    wrong_chain.from_chain = "UNKNOWN CHAIN".to_string();
    let err = app
        .execute_contract(
            Addr::unchecked(USER),
            bridge.clone(),
            &ExecuteMsg::Fulfill {
                tx: wrong_chain,
                signatures: vec![signature.clone()],
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Not supported fromChain"));

    // a valid signature from a non-relayer key aborts at its index
    let outsider = Relayer::new(9);
    let fake_signature = outsider.sign_fulfill(&chain_id, &bridge, &tx);
    let err = app
        .execute_contract(
            Addr::unchecked(USER),
            bridge.clone(),
            &ExecuteMsg::Fulfill {
                tx: tx.clone(),
                signatures: vec![fake_signature],
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Bad signature at index 0"));

    // a malformed signature recovers no signer, so consensus falls short
    let err = app
        .execute_contract(
            Addr::unchecked(USER),
            bridge.clone(),
            &ExecuteMsg::Fulfill {
                tx: tx.clone(),
                signatures: vec![Binary::from(vec![0u8])],
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Not enough relayers"));

    // empty signature list
    let err = app
        .execute_contract(
            Addr::unchecked(USER),
            bridge.clone(),
            &ExecuteMsg::Fulfill {
                tx: tx.clone(),
                signatures: vec![],
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Bad signatures length"));

    // more signatures than relayers
    let err = app
        .execute_contract(
            Addr::unchecked(USER),
            bridge.clone(),
            &ExecuteMsg::Fulfill {
                tx,
                signatures: vec![signature.clone(), signature],
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Too many signatures"));
}

#[test]
fn consensus_requires_distinct_relayers() {
    let mut app = cw_multi_test::App::default();
    let relayers: Vec<Relayer> = (1u8..=3).map(Relayer::new).collect();

    let cw20_code = app.store_code(contract_cw20());
    let bridge_code = app.store_code(contract_bridge());
    let token = instantiate_token(&mut app, cw20_code, OWNER, 1_000_000_000_000_000_000_000_000);

    // 3 relayers, threshold 2
    let bridge = app
        .instantiate_contract(
            bridge_code,
            Addr::unchecked(OWNER),
            &default_instantiate(
                &token,
                relayers.iter().map(|r| r.address()).collect(),
                2,
            ),
            &[],
            "bridge-assist",
            None,
        )
        .unwrap();
    bridge_setup(&mut app, &bridge, &token);

    let chain_id = app.block_info().chain_id;
    let tx = fulfill_tx(USER, 10_000_000_000, 0);

    // one signature is below threshold
    let err = app
        .execute_contract(
            Addr::unchecked(USER),
            bridge.clone(),
            &ExecuteMsg::Fulfill {
                tx: tx.clone(),
                signatures: vec![relayers[0].sign_fulfill(&chain_id, &bridge, &tx)],
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Not enough relayers"));

    // the same relayer twice counts once
    let err = app
        .execute_contract(
            Addr::unchecked(USER),
            bridge.clone(),
            &ExecuteMsg::Fulfill {
                tx: tx.clone(),
                signatures: vec![
                    relayers[0].sign_fulfill(&chain_id, &bridge, &tx),
                    relayers[0].sign_fulfill(&chain_id, &bridge, &tx),
                ],
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Not enough relayers"));

    // two distinct relayers reach consensus
    app.execute_contract(
        Addr::unchecked(USER),
        bridge.clone(),
        &ExecuteMsg::Fulfill {
            tx: tx.clone(),
            signatures: vec![
                relayers[0].sign_fulfill(&chain_id, &bridge, &tx),
                relayers[2].sign_fulfill(&chain_id, &bridge, &tx),
            ],
        },
        &[],
    )
    .unwrap();
    assert_eq!(
        token_balance(&app, &token, USER),
        10_000_000_000 * NEAR_RATE
    );
}

#[test]
fn fulfill_takes_fee_with_truncating_split() {
    let (mut app, bridge, token, relayer) = setup();
    let chain_id = app.block_info().chain_id;

    // 10% fee on fulfill
    app.execute_contract(
        Addr::unchecked(OWNER),
        bridge.clone(),
        &ExecuteMsg::SetFee {
            fee_send: 1000,
            fee_fulfill: 1000,
        },
        &[],
    )
    .unwrap();

    let tx = fulfill_tx(USER, 10, 0);
    let signature = relayer.sign_fulfill(&chain_id, &bridge, &tx);
    app.execute_contract(
        Addr::unchecked(USER),
        bridge.clone(),
        &ExecuteMsg::Fulfill {
            tx,
            signatures: vec![signature],
        },
        &[],
    )
    .unwrap();

    let local = 10 * NEAR_RATE;
    let fee = local * 1000 / 10_000;
    assert_eq!(token_balance(&app, &token, USER), local - fee);
    assert_eq!(token_balance(&app, &token, FEE_WALLET), fee);
}

#[test]
fn signature_is_bound_to_one_instance() {
    let (mut app, bridge1, token, relayer) = setup();
    let bridge_code = app.store_code(contract_bridge());

    let bridge2 = app
        .instantiate_contract(
            bridge_code,
            Addr::unchecked(OWNER),
            &default_instantiate(&token, vec![relayer.address()], 1),
            &[],
            "bridge-assist-2",
            None,
        )
        .unwrap();
    bridge_setup(&mut app, &bridge2, &token);

    let chain_id = app.block_info().chain_id;
    let tx = fulfill_tx(USER, 10_000_000_000, 0);
    let signature = relayer.sign_fulfill(&chain_id, &bridge1, &tx);

    // valid on the instance it was signed for
    app.execute_contract(
        Addr::unchecked(USER),
        bridge1.clone(),
        &ExecuteMsg::Fulfill {
            tx: tx.clone(),
            signatures: vec![signature.clone()],
        },
        &[],
    )
    .unwrap();

    // rejected on every other instance
    let err = app
        .execute_contract(
            Addr::unchecked(USER),
            bridge2.clone(),
            &ExecuteMsg::Fulfill {
                tx,
                signatures: vec![signature],
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Bad signature at index 0"));
}

#[test]
fn fulfill_is_paused_with_the_bridge() {
    let (mut app, bridge, _token, relayer) = setup();
    let chain_id = app.block_info().chain_id;

    app.execute_contract(
        Addr::unchecked(OWNER),
        bridge.clone(),
        &ExecuteMsg::Pause {},
        &[],
    )
    .unwrap();

    let tx = fulfill_tx(USER, 10_000_000_000, 0);
    let signature = relayer.sign_fulfill(&chain_id, &bridge, &tx);
    let err = app
        .execute_contract(
            Addr::unchecked(USER),
            bridge.clone(),
            &ExecuteMsg::Fulfill {
                tx,
                signatures: vec![signature],
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Pausable: paused"));
}
