//! Outbound transfer handler.
//!
//! `send` pulls the bridge token from the caller and records the transfer
//! locally for relayers to observe; nothing crosses the chain in this call.
//! The pull goes out as a submessage so the reply can compare the actual
//! balance delta against the requested amount and reject non-conforming
//! (fee-on-transfer, deflationary) tokens.

use cosmwasm_std::{
    to_json_binary, Addr, DepsMut, Env, MessageInfo, QuerierWrapper, Response, StdResult, SubMsg,
    Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::state::{
    PendingSend, Transaction, CHAINS, CONFIG, FEE_DENOMINATOR, NONCE, PENDING_SEND, STATS,
    TRANSACTIONS, TRANSACTION_COUNT,
};

/// Reply id for the transfer-from submessage
pub const SEND_REPLY_ID: u64 = 1;

/// CW20 balance of `account` on `token`
pub fn query_token_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    account: &Addr,
) -> StdResult<Uint128> {
    let res: cw20::BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(res.balance)
}

pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    to_user: String,
    to_chain: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    let exchange_rate = CHAINS
        .may_load(deps.storage, &to_chain)?
        .ok_or(ContractError::ChainNotSupported)?;

    if to_user.is_empty() {
        return Err(ContractError::EmptyToUser);
    }

    // Rate is a power of ten, never zero
    if !(amount % exchange_rate).is_zero() {
        return Err(ContractError::AmountNotDivisible);
    }
    let converted = amount / exchange_rate;
    if converted.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if converted <= Uint128::new(FEE_DENOMINATOR) {
        return Err(ContractError::AmountTooSmall);
    }

    if amount > config.limit_per_send {
        return Err(ContractError::AmountOverLimit);
    }

    let balance_before = query_token_balance(&deps.querier, &config.token, &env.contract.address)?;
    PENDING_SEND.save(
        deps.storage,
        &PendingSend {
            sender: info.sender.clone(),
            amount,
            to_user: to_user.clone(),
            to_chain: to_chain.clone(),
            exchange_rate,
            balance_before,
        },
    )?;

    let pull = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(pull, SEND_REPLY_ID))
        .add_attribute("method", "send")
        .add_attribute("from_user", info.sender)
        .add_attribute("to_user", to_user)
        .add_attribute("to_chain", to_chain)
        .add_attribute("amount", amount.to_string()))
}

/// Finalize a `send` after the token pull succeeded.
///
/// Any error here unwinds the pull and every prior write in the same call.
pub fn reply_send(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let pending = PENDING_SEND
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingSend)?;
    PENDING_SEND.remove(deps.storage);

    let config = CONFIG.load(deps.storage)?;

    let balance_after = query_token_balance(&deps.querier, &config.token, &env.contract.address)?;
    let received = balance_after
        .checked_sub(pending.balance_before)
        .map_err(|_| ContractError::NonConformingToken)?;
    if received != pending.amount {
        return Err(ContractError::NonConformingToken);
    }

    // The fee stays reserved in the instance; the record carries the net
    // amount in converted units.
    let fee = pending
        .amount
        .multiply_ratio(config.fee_send as u128, FEE_DENOMINATOR);
    let recorded = (pending.amount - fee) / pending.exchange_rate;

    let nonce = NONCE.load(deps.storage)?;
    let position = TRANSACTION_COUNT
        .may_load(deps.storage, &pending.sender)?
        .unwrap_or(0);

    let tx = Transaction {
        amount: recorded,
        timestamp: env.block.time,
        from_chain: env.block.chain_id.clone(),
        to_chain: pending.to_chain,
        nonce,
        from_user: pending.sender.clone(),
        to_user: pending.to_user,
    };
    TRANSACTIONS.save(deps.storage, (&pending.sender, position), &tx)?;
    TRANSACTION_COUNT.save(deps.storage, &pending.sender, &(position + 1))?;
    NONCE.save(deps.storage, &(nonce + 1))?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_sends += 1;
    stats.fees_collected += fee;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_attribute("method", "send_recorded")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("from_chain", tx.from_chain)
        .add_attribute("to_chain", tx.to_chain)
        .add_attribute("from_user", tx.from_user)
        .add_attribute("to_user", tx.to_user)
        .add_attribute("amount", tx.amount.to_string())
        .add_attribute("fee", fee.to_string()))
}
