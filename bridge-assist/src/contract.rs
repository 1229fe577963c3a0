//! Bridge Assist Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdError, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use common::{grant_role, DEFAULT_ADMIN_ROLE};

use crate::error::ContractError;
use crate::execute::{
    execute_add_chains, execute_fulfill, execute_grant_role, execute_pause, execute_remove_chains,
    execute_revoke_role, execute_send, execute_set_fee, execute_set_fee_wallet,
    execute_set_limit_per_send, execute_set_relayers, execute_unpause, execute_withdraw,
    reply_send, SEND_REPLY_ID,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_config, query_exchange_rate, query_has_role, query_is_fulfilled, query_relayers,
    query_stats, query_supported_chains, query_transaction_digest, query_user_transactions,
    query_user_transactions_amount, query_user_transactions_slice,
};
use crate::relayers::validate_relayer_set;
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FEE_DENOMINATOR, NONCE, RELAYERS,
    RELAYER_CONSENSUS_THRESHOLD, STATS,
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

    let token = deps
        .api
        .addr_validate(&msg.token)
        .map_err(|_| ContractError::InvalidToken)?;
    let fee_wallet = deps
        .api
        .addr_validate(&msg.fee_wallet)
        .map_err(|_| ContractError::InvalidFeeWallet)?;
    let owner = deps
        .api
        .addr_validate(&msg.owner)
        .map_err(|_| ContractError::InvalidOwner)?;

    if msg.fee_send as u128 >= FEE_DENOMINATOR {
        return Err(ContractError::FeeSendTooHigh);
    }
    if msg.fee_fulfill as u128 >= FEE_DENOMINATOR {
        return Err(ContractError::FeeFulfillTooHigh);
    }

    let relayers = validate_relayer_set(&msg.relayers, msg.relayer_consensus_threshold)?;
    let relayer_count = relayers.len();

    let config = Config {
        token,
        limit_per_send: msg.limit_per_send,
        fee_wallet,
        fee_send: msg.fee_send,
        fee_fulfill: msg.fee_fulfill,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    NONCE.save(deps.storage, &0u64)?;
    RELAYERS.save(deps.storage, &relayers)?;
    RELAYER_CONSENSUS_THRESHOLD.save(deps.storage, &msg.relayer_consensus_threshold)?;
    STATS.save(
        deps.storage,
        &Stats {
            total_sends: 0,
            total_fulfills: 0,
            fees_collected: Uint128::zero(),
        },
    )?;

    grant_role(deps.storage, DEFAULT_ADMIN_ROLE, &owner)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("token", config.token)
        .add_attribute("owner", owner)
        .add_attribute("relayer_count", relayer_count.to_string())
        .add_attribute(
            "relayer_consensus_threshold",
            msg.relayer_consensus_threshold.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::Send {
            amount,
            to_user,
            to_chain,
        } => execute_send(deps, env, info, amount, to_user, to_chain),
        ExecuteMsg::Fulfill { tx, signatures } => execute_fulfill(deps, env, info, tx, signatures),

        // Configuration
        ExecuteMsg::SetFee {
            fee_send,
            fee_fulfill,
        } => execute_set_fee(deps, info, fee_send, fee_fulfill),
        ExecuteMsg::SetFeeWallet { fee_wallet } => execute_set_fee_wallet(deps, info, fee_wallet),
        ExecuteMsg::SetLimitPerSend { limit_per_send } => {
            execute_set_limit_per_send(deps, info, limit_per_send)
        }
        ExecuteMsg::AddChains {
            chains,
            exchange_rates_pow,
        } => execute_add_chains(deps, info, chains, exchange_rates_pow),
        ExecuteMsg::RemoveChains { chains } => execute_remove_chains(deps, info, chains),
        ExecuteMsg::SetRelayers {
            relayers,
            relayer_consensus_threshold,
        } => execute_set_relayers(deps, info, relayers, relayer_consensus_threshold),

        // Admin operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::Withdraw {
            asset,
            recipient,
            amount,
        } => execute_withdraw(deps, info, asset, recipient, amount),
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        SEND_REPLY_ID => reply_send(deps, env),
        id => Err(StdError::generic_err(format!("unknown reply id: {id}")).into()),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Relayers {} => to_json_binary(&query_relayers(deps)?),
        QueryMsg::SupportedChains {} => to_json_binary(&query_supported_chains(deps)?),
        QueryMsg::ExchangeRate { chain } => to_json_binary(&query_exchange_rate(deps, chain)?),
        QueryMsg::UserTransactionsAmount { user } => {
            to_json_binary(&query_user_transactions_amount(deps, user)?)
        }
        QueryMsg::UserTransactions { user } => to_json_binary(&query_user_transactions(deps, user)?),
        QueryMsg::UserTransactionsSlice {
            user,
            offset,
            limit,
        } => to_json_binary(&query_user_transactions_slice(deps, user, offset, limit)?),
        QueryMsg::IsFulfilled { tx } => to_json_binary(&query_is_fulfilled(deps, env, tx)?),
        QueryMsg::TransactionDigest { tx } => {
            to_json_binary(&query_transaction_digest(env, tx)?)
        }
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::HasRole { role, account } => {
            to_json_binary(&query_has_role(deps, role, account)?)
        }
    }
}
