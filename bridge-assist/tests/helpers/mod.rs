//! Shared test setup: multi-test app, CW20 token, bridge instance, and
//! k256-backed relayer keys producing real recoverable signatures.
#![allow(dead_code)]

use cosmwasm_std::{Addr, Binary, Empty, Uint128};
use cw20::Cw20Coin;
use cw_multi_test::{App, Contract, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use bridge_assist::hash::{fulfill_digest, keccak256};
use bridge_assist::msg::{ExecuteMsg, FulfillTx, InstantiateMsg};

pub const OWNER: &str = "owner";
pub const USER: &str = "user";
pub const FEE_WALLET: &str = "feewallet";

/// Default per-send limit: 100 tokens at 18 decimals
pub const DEFAULT_LIMIT_PER_SEND: u128 = 100_000_000_000_000_000_000;

/// NEAR-style exchange rate: 10^9
pub const NEAR_RATE: u128 = 1_000_000_000;

pub const NEAR_CHAIN: &str = "NEAR";
pub const AVAX_CHAIN: &str = "AVAX";

/// An off-chain relayer key. Addresses are derived the Ethereum way:
/// keccak256 of the uncompressed public key, last 20 bytes.
pub struct Relayer {
    key: SigningKey,
}

impl Relayer {
    pub fn new(seed: u8) -> Self {
        assert!(seed != 0, "zero scalar is not a valid key");
        let mut bytes = [0u8; 32];
        bytes[31] = seed;
        Self {
            key: SigningKey::from_bytes(&bytes.into()).unwrap(),
        }
    }

    pub fn address(&self) -> String {
        let pubkey = self.key.verifying_key().to_encoded_point(false);
        let hash = keccak256(&pubkey.as_bytes()[1..]);
        format!("0x{}", hex::encode(&hash[12..]))
    }

    pub fn sign_digest(&self, digest: &[u8; 32]) -> Binary {
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(digest).unwrap();
        let mut out = Vec::with_capacity(65);
        out.extend_from_slice(&signature.to_bytes());
        out.push(27 + recovery_id.to_byte());
        Binary::from(out)
    }

    /// Sign a fulfill payload for one specific instance on one chain.
    pub fn sign_fulfill(&self, chain_id: &str, instance: &Addr, tx: &FulfillTx) -> Binary {
        let digest = fulfill_digest(chain_id, instance.as_str(), tx);
        self.sign_digest(&digest)
    }
}

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge_assist::contract::execute,
        bridge_assist::contract::instantiate,
        bridge_assist::contract::query,
    )
    .with_reply(bridge_assist::contract::reply);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

/// A CW20 that skims one unit off every transfer-from, for exercising the
/// non-conforming token detection.
pub fn contract_tax_cw20() -> Box<dyn Contract<Empty>> {
    fn execute(
        deps: cosmwasm_std::DepsMut,
        env: cosmwasm_std::Env,
        info: cosmwasm_std::MessageInfo,
        msg: cw20_base::msg::ExecuteMsg,
    ) -> Result<cosmwasm_std::Response, cw20_base::ContractError> {
        let msg = match msg {
            cw20_base::msg::ExecuteMsg::TransferFrom {
                owner,
                recipient,
                amount,
            } => cw20_base::msg::ExecuteMsg::TransferFrom {
                owner,
                recipient,
                amount: amount - Uint128::one(),
            },
            other => other,
        };
        cw20_base::contract::execute(deps, env, info, msg)
    }
    let contract = ContractWrapper::new(
        execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub fn instantiate_token(app: &mut App, code_id: u64, holder: &str, supply: u128) -> Addr {
    app.instantiate_contract(
        code_id,
        Addr::unchecked(OWNER),
        &cw20_base::msg::InstantiateMsg {
            name: "Bridged Token".to_string(),
            symbol: "BRT".to_string(),
            decimals: 18,
            initial_balances: vec![Cw20Coin {
                address: holder.to_string(),
                amount: Uint128::new(supply),
            }],
            mint: None,
            marketing: None,
        },
        &[],
        "token",
        None,
    )
    .unwrap()
}

/// Default bridge instantiate message: zero fees, one relayer, 1-of-1.
pub fn default_instantiate(token: &Addr, relayers: Vec<String>, threshold: u32) -> InstantiateMsg {
    InstantiateMsg {
        token: token.to_string(),
        limit_per_send: Uint128::new(DEFAULT_LIMIT_PER_SEND),
        fee_wallet: FEE_WALLET.to_string(),
        fee_send: 0,
        fee_fulfill: 0,
        owner: OWNER.to_string(),
        relayers,
        relayer_consensus_threshold: threshold,
    }
}

/// Deploy token + bridge, grant the owner the manager role, register the
/// NEAR and AVAX chains at rate 10^9, and seed the bridge with liquidity.
pub fn setup() -> (App, Addr, Addr, Relayer) {
    let mut app = App::default();
    let relayer = Relayer::new(1);

    let cw20_code = app.store_code(contract_cw20());
    let bridge_code = app.store_code(contract_bridge());

    let token = instantiate_token(&mut app, cw20_code, OWNER, 1_000_000_000_000_000_000_000_000);

    let bridge = app
        .instantiate_contract(
            bridge_code,
            Addr::unchecked(OWNER),
            &default_instantiate(&token, vec![relayer.address()], 1),
            &[],
            "bridge-assist",
            None,
        )
        .unwrap();

    bridge_setup(&mut app, &bridge, &token);

    (app, bridge, token, relayer)
}

/// Post-deploy configuration shared by most tests.
pub fn bridge_setup(app: &mut App, bridge: &Addr, token: &Addr) {
    app.execute_contract(
        Addr::unchecked(OWNER),
        bridge.clone(),
        &ExecuteMsg::GrantRole {
            role: common::MANAGER_ROLE.to_string(),
            account: OWNER.to_string(),
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        Addr::unchecked(OWNER),
        bridge.clone(),
        &ExecuteMsg::AddChains {
            chains: vec![NEAR_CHAIN.to_string(), AVAX_CHAIN.to_string()],
            exchange_rates_pow: vec![9, 9],
        },
        &[],
    )
    .unwrap();

    // bridge liquidity for fulfills
    app.execute_contract(
        Addr::unchecked(OWNER),
        token.clone(),
        &cw20::Cw20ExecuteMsg::Transfer {
            recipient: bridge.to_string(),
            amount: Uint128::new(500_000_000_000_000_000_000_000),
        },
        &[],
    )
    .unwrap();
}

/// CW20 balance lookup.
pub fn token_balance(app: &App, token: &Addr, account: &str) -> u128 {
    let res: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance.u128()
}

/// Give `account` tokens and approve the bridge to pull `amount` of them.
pub fn fund_and_approve(app: &mut App, token: &Addr, bridge: &Addr, account: &str, amount: u128) {
    app.execute_contract(
        Addr::unchecked(OWNER),
        token.clone(),
        &cw20::Cw20ExecuteMsg::Transfer {
            recipient: account.to_string(),
            amount: Uint128::new(amount),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        Addr::unchecked(account),
        token.clone(),
        &cw20::Cw20ExecuteMsg::IncreaseAllowance {
            spender: bridge.to_string(),
            amount: Uint128::new(amount),
            expires: None,
        },
        &[],
    )
    .unwrap();
}
