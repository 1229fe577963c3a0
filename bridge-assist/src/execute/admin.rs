//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause (gates `send`/`fulfill` only)
//! - Asset recovery sweep
//! - Role management

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use common::{assert_role, grant_role, revoke_role, AssetInfo, DEFAULT_ADMIN_ROLE, MANAGER_ROLE};

use crate::error::ContractError;
use crate::state::CONFIG;

pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    assert_role(deps.storage, MANAGER_ROLE, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }
    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "pause"))
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    assert_role(deps.storage, MANAGER_ROLE, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    if !config.paused {
        return Err(ContractError::NotPaused);
    }
    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

/// Sweep any asset held by the instance, independent of the bridge token.
/// Recovery path for stuck funds and reserved fees.
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, MANAGER_ROLE, &info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let msg = asset.transfer_msg(recipient.as_str(), amount)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "withdraw")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: String,
    account: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;

    let account = deps.api.addr_validate(&account)?;
    grant_role(deps.storage, &role, &account)?;

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
    revoke_role(deps.storage, &role, &account);

    Ok(Response::new()
        .add_attribute("method", "revoke_role")
        .add_attribute("role", role)
        .add_attribute("account", account))
}
