//! Query handlers for the Bridge Factory contract.
//!
//! Pagination is strict: a zero limit and an out-of-range window are
//! distinct errors, and single-index lookups fail with "Invalid index".

use cosmwasm_std::{Addr, Deps, StdError, StdResult};

use common::has_role;

use crate::msg::{
    BridgeByTokenResponse, BridgesByTokenLengthResponse, BridgesByTokenResponse,
    CreatedBridgesLengthResponse, CreatedBridgesResponse, HasRoleResponse, ImplementationResponse,
};
use crate::state::{
    BridgeInfo, BRIDGES, BRIDGE_ASSIST_CODE_ID, BRIDGE_COUNT, BY_TOKEN, BY_TOKEN_COUNT,
};

/// Validate an (offset, limit) window against a collection length, returning
/// the exclusive end.
fn checked_window(offset: u64, limit: u64, length: u64) -> StdResult<u64> {
    if limit == 0 {
        return Err(StdError::generic_err("Limit: zero"));
    }
    offset
        .checked_add(limit)
        .filter(|end| *end <= length)
        .ok_or_else(|| StdError::generic_err("Invalid offset-limit"))
}

pub fn query_implementation(deps: Deps) -> StdResult<ImplementationResponse> {
    Ok(ImplementationResponse {
        bridge_assist_code_id: BRIDGE_ASSIST_CODE_ID.load(deps.storage)?,
    })
}

pub fn query_created_bridges_length(deps: Deps) -> StdResult<CreatedBridgesLengthResponse> {
    Ok(CreatedBridgesLengthResponse {
        length: BRIDGE_COUNT.load(deps.storage)?,
    })
}

pub fn query_created_bridges_info(
    deps: Deps,
    offset: u64,
    limit: u64,
) -> StdResult<CreatedBridgesResponse> {
    let length = BRIDGE_COUNT.load(deps.storage)?;
    let end = checked_window(offset, limit, length)?;

    let bridges = (offset..end)
        .map(|index| BRIDGES.load(deps.storage, index))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(CreatedBridgesResponse { bridges })
}

pub fn query_created_bridge_info(deps: Deps, index: u64) -> StdResult<BridgeInfo> {
    let length = BRIDGE_COUNT.load(deps.storage)?;
    if index >= length {
        return Err(StdError::generic_err("Invalid index"));
    }
    BRIDGES.load(deps.storage, index)
}

pub fn query_bridges_by_token_length(
    deps: Deps,
    token: String,
) -> StdResult<BridgesByTokenLengthResponse> {
    let token = validate_token(deps, &token)?;
    Ok(BridgesByTokenLengthResponse {
        length: BY_TOKEN_COUNT.may_load(deps.storage, &token)?.unwrap_or(0),
    })
}

pub fn query_bridges_by_token(
    deps: Deps,
    token: String,
    offset: u64,
    limit: u64,
) -> StdResult<BridgesByTokenResponse> {
    let token = validate_token(deps, &token)?;
    let length = BY_TOKEN_COUNT.may_load(deps.storage, &token)?.unwrap_or(0);
    let end = checked_window(offset, limit, length)?;

    let bridges = (offset..end)
        .map(|index| BY_TOKEN.load(deps.storage, (&token, index)))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(BridgesByTokenResponse { bridges })
}

pub fn query_bridge_by_token(
    deps: Deps,
    token: String,
    index: u64,
) -> StdResult<BridgeByTokenResponse> {
    let token = validate_token(deps, &token)?;
    let length = BY_TOKEN_COUNT.may_load(deps.storage, &token)?.unwrap_or(0);
    if index >= length {
        return Err(StdError::generic_err("Invalid index"));
    }
    Ok(BridgeByTokenResponse {
        bridge: BY_TOKEN.load(deps.storage, (&token, index))?,
    })
}

pub fn query_has_role(deps: Deps, role: String, account: String) -> StdResult<HasRoleResponse> {
    let account = deps.api.addr_validate(&account)?;
    Ok(HasRoleResponse {
        has_role: has_role(deps.storage, &role, &account),
    })
}

fn validate_token(deps: Deps, token: &str) -> StdResult<Addr> {
    deps.api
        .addr_validate(token)
        .map_err(|_| StdError::generic_err("Token: invalid address"))
}
