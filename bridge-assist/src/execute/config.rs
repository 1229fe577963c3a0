//! Configuration management handlers.
//!
//! This module handles:
//! - Fee rates and fee wallet
//! - Per-send limit
//! - Chain registry (add/remove)
//! - Relayer set replacement

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use common::{assert_role, MANAGER_ROLE};

use crate::error::ContractError;
use crate::relayers::validate_relayer_set;
use crate::state::{CHAINS, CONFIG, FEE_DENOMINATOR, RELAYERS, RELAYER_CONSENSUS_THRESHOLD};

pub fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee_send: u16,
    fee_fulfill: u16,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, MANAGER_ROLE, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;

    if fee_send as u128 >= FEE_DENOMINATOR || fee_fulfill as u128 >= FEE_DENOMINATOR {
        return Err(ContractError::FeeTooHigh);
    }
    if fee_send == config.fee_send && fee_fulfill == config.fee_fulfill {
        return Err(ContractError::FeeRepeat);
    }

    config.fee_send = fee_send;
    config.fee_fulfill = fee_fulfill;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee")
        .add_attribute("fee_send", fee_send.to_string())
        .add_attribute("fee_fulfill", fee_fulfill.to_string()))
}

pub fn execute_set_fee_wallet(
    deps: DepsMut,
    info: MessageInfo,
    fee_wallet: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, MANAGER_ROLE, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;

    let fee_wallet = deps
        .api
        .addr_validate(&fee_wallet)
        .map_err(|_| ContractError::InvalidFeeWallet)?;
    if fee_wallet == config.fee_wallet {
        return Err(ContractError::FeeWalletRepeat);
    }

    config.fee_wallet = fee_wallet.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_wallet")
        .add_attribute("fee_wallet", fee_wallet))
}

pub fn execute_set_limit_per_send(
    deps: DepsMut,
    info: MessageInfo,
    limit_per_send: Uint128,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, MANAGER_ROLE, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;

    if limit_per_send == config.limit_per_send {
        return Err(ContractError::LimitPerSendRepeat);
    }

    config.limit_per_send = limit_per_send;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_limit_per_send")
        .add_attribute("limit_per_send", limit_per_send.to_string()))
}

/// Register chains. Rates come in as powers of ten; a registered rate is
/// immutable until the chain is removed and re-added.
pub fn execute_add_chains(
    deps: DepsMut,
    info: MessageInfo,
    chains: Vec<String>,
    exchange_rates_pow: Vec<u32>,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, MANAGER_ROLE, &info.sender)?;

    if chains.is_empty() || chains.len() != exchange_rates_pow.len() {
        return Err(ContractError::BadInput);
    }

    for (chain, pow) in chains.iter().zip(exchange_rates_pow.iter()) {
        if CHAINS.has(deps.storage, chain) {
            return Err(ContractError::ChainAlreadyRegistered {
                chain: chain.clone(),
            });
        }
        let rate = Uint128::new(10)
            .checked_pow(*pow)
            .map_err(|_| ContractError::ExchangeRateOverflow { pow: *pow })?;
        CHAINS.save(deps.storage, chain, &rate)?;
    }

    Ok(Response::new()
        .add_attribute("method", "add_chains")
        .add_attribute("chains", chains.join(",")))
}

pub fn execute_remove_chains(
    deps: DepsMut,
    info: MessageInfo,
    chains: Vec<String>,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, MANAGER_ROLE, &info.sender)?;

    if chains.is_empty() {
        return Err(ContractError::BadInput);
    }

    for chain in &chains {
        if !CHAINS.has(deps.storage, chain) {
            return Err(ContractError::ChainNotRegistered {
                chain: chain.clone(),
            });
        }
        CHAINS.remove(deps.storage, chain);
    }

    Ok(Response::new()
        .add_attribute("method", "remove_chains")
        .add_attribute("chains", chains.join(",")))
}

/// Replace the whole relayer set and threshold; validation matches
/// instantiation.
pub fn execute_set_relayers(
    deps: DepsMut,
    info: MessageInfo,
    relayers: Vec<String>,
    threshold: u32,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, MANAGER_ROLE, &info.sender)?;

    let normalized = validate_relayer_set(&relayers, threshold)?;
    let count = normalized.len();
    RELAYERS.save(deps.storage, &normalized)?;
    RELAYER_CONSENSUS_THRESHOLD.save(deps.storage, &threshold)?;

    Ok(Response::new()
        .add_attribute("method", "set_relayers")
        .add_attribute("relayer_count", count.to_string())
        .add_attribute("relayer_consensus_threshold", threshold.to_string()))
}
