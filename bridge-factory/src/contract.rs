//! Bridge Factory Contract - Entry Points

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdError, StdResult,
};
use cw2::set_contract_version;

use common::{grant_role, DEFAULT_ADMIN_ROLE};

use crate::error::ContractError;
use crate::execute::{
    execute_add_bridge_assists, execute_change_implementation, execute_create_bridge_assist,
    execute_grant_role, execute_remove_bridge_assists, execute_revoke_role,
    reply_bridge_instantiated,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_bridge_by_token, query_bridges_by_token, query_bridges_by_token_length,
    query_created_bridge_info, query_created_bridges_info, query_created_bridges_length,
    query_has_role, query_implementation,
};
use crate::state::{
    BRIDGE_ASSIST_CODE_ID, BRIDGE_COUNT, CONTRACT_NAME, CONTRACT_VERSION,
    INSTANTIATE_BRIDGE_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.bridge_assist_code_id == 0 {
        return Err(ContractError::ZeroImplementation);
    }
    let owner = deps
        .api
        .addr_validate(&msg.owner)
        .map_err(|_| ContractError::InvalidOwner)?;

    BRIDGE_ASSIST_CODE_ID.save(deps.storage, &msg.bridge_assist_code_id)?;
    BRIDGE_COUNT.save(deps.storage, &0u64)?;
    grant_role(deps.storage, DEFAULT_ADMIN_ROLE, &owner)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute(
            "bridge_assist_code_id",
            msg.bridge_assist_code_id.to_string(),
        )
        .add_attribute("owner", owner))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateBridgeAssist {
            token,
            limit_per_send,
            fee_wallet,
            fee_send,
            fee_fulfill,
            owner,
            relayers,
            relayer_consensus_threshold,
        } => execute_create_bridge_assist(
            deps,
            info,
            token,
            limit_per_send,
            fee_wallet,
            fee_send,
            fee_fulfill,
            owner,
            relayers,
            relayer_consensus_threshold,
        ),
        ExecuteMsg::AddBridgeAssists { bridges } => {
            execute_add_bridge_assists(deps, info, bridges)
        }
        ExecuteMsg::RemoveBridgeAssists { bridges } => {
            execute_remove_bridge_assists(deps, info, bridges)
        }
        ExecuteMsg::ChangeBridgeAssistImplementation {
            bridge_assist_code_id,
        } => execute_change_implementation(deps, info, bridge_assist_code_id),
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_BRIDGE_REPLY_ID => reply_bridge_instantiated(deps, msg),
        id => Err(StdError::generic_err(format!("unknown reply id: {id}")).into()),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::BridgeAssistImplementation {} => to_json_binary(&query_implementation(deps)?),
        QueryMsg::CreatedBridgesLength {} => to_json_binary(&query_created_bridges_length(deps)?),
        QueryMsg::CreatedBridgesInfo { offset, limit } => {
            to_json_binary(&query_created_bridges_info(deps, offset, limit)?)
        }
        QueryMsg::CreatedBridgeInfo { index } => {
            to_json_binary(&query_created_bridge_info(deps, index)?)
        }
        QueryMsg::BridgesByTokenLength { token } => {
            to_json_binary(&query_bridges_by_token_length(deps, token)?)
        }
        QueryMsg::BridgesByToken {
            token,
            offset,
            limit,
        } => to_json_binary(&query_bridges_by_token(deps, token, offset, limit)?),
        QueryMsg::BridgeByToken { token, index } => {
            to_json_binary(&query_bridge_by_token(deps, token, index)?)
        }
        QueryMsg::HasRole { role, account } => to_json_binary(&query_has_role(deps, role, account)?),
    }
}
