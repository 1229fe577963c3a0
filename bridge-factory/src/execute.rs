//! Execute message handlers for the Bridge Factory contract.

use cosmwasm_std::{
    to_json_binary, Addr, DepsMut, MessageInfo, Reply, Response, StdError, Storage, SubMsg,
    Uint128, WasmMsg,
};

use common::{
    assert_role, grant_role as ac_grant_role, revoke_role as ac_revoke_role, CREATOR_ROLE,
    DEFAULT_ADMIN_ROLE,
};

use crate::error::ContractError;
use crate::state::{
    BridgeInfo, ADD_REMOVE_LIMIT_PER_TIME, BRIDGES, BRIDGE_ASSIST_CODE_ID, BRIDGE_COUNT,
    BRIDGE_INDEX, BY_TOKEN, BY_TOKEN_COUNT, BY_TOKEN_INDEX, INSTANTIATE_BRIDGE_REPLY_ID,
    PENDING_TOKEN,
};

// ============================================================================
// Registry primitives
// ============================================================================

/// Append an instance to the global list and the per-token index.
/// Callers must have checked for duplicates.
fn register_bridge(storage: &mut dyn Storage, bridge: &Addr, token: &Addr) -> Result<(), ContractError> {
    let count = BRIDGE_COUNT.load(storage)?;
    BRIDGES.save(
        storage,
        count,
        &BridgeInfo {
            bridge: bridge.clone(),
            token: token.clone(),
        },
    )?;
    BRIDGE_INDEX.save(storage, bridge, &count)?;
    BRIDGE_COUNT.save(storage, &(count + 1))?;

    let token_count = BY_TOKEN_COUNT.may_load(storage, token)?.unwrap_or(0);
    BY_TOKEN.save(storage, (token, token_count), bridge)?;
    BY_TOKEN_INDEX.save(storage, (token, bridge), &token_count)?;
    BY_TOKEN_COUNT.save(storage, token, &(token_count + 1))?;

    Ok(())
}

/// Swap-remove an instance from both indexes.
fn unregister_bridge(storage: &mut dyn Storage, bridge: &Addr, index: u64) -> Result<(), ContractError> {
    let info = BRIDGES.load(storage, index)?;

    let last = BRIDGE_COUNT.load(storage)? - 1;
    if index != last {
        let moved = BRIDGES.load(storage, last)?;
        BRIDGE_INDEX.save(storage, &moved.bridge, &index)?;
        BRIDGES.save(storage, index, &moved)?;
    }
    BRIDGES.remove(storage, last);
    BRIDGE_INDEX.remove(storage, bridge);
    BRIDGE_COUNT.save(storage, &last)?;

    let token = &info.token;
    let token_index = BY_TOKEN_INDEX.load(storage, (token, bridge))?;
    let token_last = BY_TOKEN_COUNT.load(storage, token)? - 1;
    if token_index != token_last {
        let moved = BY_TOKEN.load(storage, (token, token_last))?;
        BY_TOKEN_INDEX.save(storage, (token, &moved), &token_index)?;
        BY_TOKEN.save(storage, (token, token_index), &moved)?;
    }
    BY_TOKEN.remove(storage, (token, token_last));
    BY_TOKEN_INDEX.remove(storage, (token, bridge));
    BY_TOKEN_COUNT.save(storage, token, &token_last)?;

    Ok(())
}

// ============================================================================
// Creation
// ============================================================================

#[allow(clippy::too_many_arguments)]
pub fn execute_create_bridge_assist(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    limit_per_send: Uint128,
    fee_wallet: String,
    fee_send: u16,
    fee_fulfill: u16,
    owner: String,
    relayers: Vec<String>,
    relayer_consensus_threshold: u32,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, CREATOR_ROLE, &info.sender)?;

    let token = deps
        .api
        .addr_validate(&token)
        .map_err(|_| ContractError::InvalidToken)?;

    let code_id = BRIDGE_ASSIST_CODE_ID.load(deps.storage)?;
    PENDING_TOKEN.save(deps.storage, &token)?;

    // The clone runs its own full validation on these fields.
    let instantiate = WasmMsg::Instantiate {
        admin: None,
        code_id,
        msg: to_json_binary(&bridge_assist::msg::InstantiateMsg {
            token: token.to_string(),
            limit_per_send,
            fee_wallet,
            fee_send,
            fee_fulfill,
            owner,
            relayers,
            relayer_consensus_threshold,
        })?,
        funds: vec![],
        label: "bridge-assist".to_string(),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(
            instantiate,
            INSTANTIATE_BRIDGE_REPLY_ID,
        ))
        .add_attribute("method", "create_bridge_assist")
        .add_attribute("token", token))
}

/// Finish creation once the clone exists: read its address from the
/// instantiate event and register it.
pub fn reply_bridge_instantiated(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let token = PENDING_TOKEN
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingBridge)?;
    PENDING_TOKEN.remove(deps.storage);

    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    let bridge = result
        .events
        .iter()
        .find(|event| event.ty == "instantiate")
        .and_then(|event| {
            event
                .attributes
                .iter()
                .find(|attr| attr.key == "_contract_address")
        })
        .map(|attr| attr.value.clone())
        .ok_or_else(|| StdError::generic_err("instantiate event missing contract address"))?;
    let bridge = deps.api.addr_validate(&bridge)?;

    if BRIDGE_INDEX.has(deps.storage, &bridge) {
        return Err(ContractError::BridgeAlreadyRegistered {
            bridge: bridge.to_string(),
        });
    }
    register_bridge(deps.storage, &bridge, &token)?;

    Ok(Response::new()
        .add_attribute("method", "bridge_assist_created")
        .add_attribute("bridge", bridge)
        .add_attribute("token", token))
}

// ============================================================================
// Batch registration
// ============================================================================

pub fn execute_add_bridge_assists(
    deps: DepsMut,
    info: MessageInfo,
    bridges: Vec<String>,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;

    if bridges.is_empty() {
        return Err(ContractError::ZeroLengthArray);
    }
    if bridges.len() > ADD_REMOVE_LIMIT_PER_TIME {
        return Err(ContractError::ArrayLengthExceedsLimit);
    }

    let count = bridges.len();
    for (index, raw) in bridges.into_iter().enumerate() {
        let bridge = deps
            .api
            .addr_validate(&raw)
            .map_err(|_| ContractError::InvalidBridgeAtIndex { index })?;

        // Registering as we go makes this also catch duplicates inside the
        // batch itself.
        if BRIDGE_INDEX.has(deps.storage, &bridge) {
            return Err(ContractError::DuplicateBridgeAtIndex { index });
        }

        let config: bridge_assist::msg::ConfigResponse = deps
            .querier
            .query_wasm_smart(&bridge, &bridge_assist::msg::QueryMsg::Config {})
            .map_err(|_| ContractError::NoTokenAtIndex { index })?;

        register_bridge(deps.storage, &bridge, &config.token)?;
    }

    Ok(Response::new()
        .add_attribute("method", "add_bridge_assists")
        .add_attribute("added", count.to_string()))
}

pub fn execute_remove_bridge_assists(
    deps: DepsMut,
    info: MessageInfo,
    bridges: Vec<String>,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;

    if bridges.is_empty() {
        return Err(ContractError::ZeroLengthArray);
    }
    if bridges.len() > ADD_REMOVE_LIMIT_PER_TIME {
        return Err(ContractError::ArrayLengthExceedsLimit);
    }

    let count = bridges.len();
    for (index, raw) in bridges.into_iter().enumerate() {
        // Anything that is not a currently registered address is "not found",
        // malformed input included.
        let bridge = match deps.api.addr_validate(&raw) {
            Ok(addr) => addr,
            Err(_) => return Err(ContractError::BridgeNotFoundAtIndex { index }),
        };
        let bridge_index = BRIDGE_INDEX
            .may_load(deps.storage, &bridge)?
            .ok_or(ContractError::BridgeNotFoundAtIndex { index })?;
        unregister_bridge(deps.storage, &bridge, bridge_index)?;
    }

    Ok(Response::new()
        .add_attribute("method", "remove_bridge_assists")
        .add_attribute("removed", count.to_string()))
}

// ============================================================================
// Configuration
// ============================================================================

pub fn execute_change_implementation(
    deps: DepsMut,
    info: MessageInfo,
    code_id: u64,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;

    if code_id == 0 {
        return Err(ContractError::ZeroImplementation);
    }
    BRIDGE_ASSIST_CODE_ID.save(deps.storage, &code_id)?;

    Ok(Response::new()
        .add_attribute("method", "change_bridge_assist_implementation")
        .add_attribute("bridge_assist_code_id", code_id.to_string()))
}

pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: String,
    account: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;

    let account = deps.api.addr_validate(&account)?;
    ac_grant_role(deps.storage, &role, &account)?;

    Ok(Response::new()
        .add_attribute("method", "grant_role")
        .add_attribute("role", role)
        .add_attribute("account", account))
}

pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: String,
    account: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;

    let account = deps.api.addr_validate(&account)?;
    ac_revoke_role(deps.storage, &role, &account);

    Ok(Response::new()
        .add_attribute("method", "revoke_role")
        .add_attribute("role", role)
        .add_attribute("account", account))
}
