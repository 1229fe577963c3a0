//! Query handlers for the Bridge Assist contract.

use cosmwasm_std::{Binary, Deps, Env, Order, StdError, StdResult};

use common::has_role;

use crate::hash::fulfill_digest;
use crate::msg::{
    ChainEntry, ConfigResponse, ExchangeRateResponse, FulfillTx, HasRoleResponse,
    IsFulfilledResponse, RelayersResponse, SupportedChainsResponse, TransactionDigestResponse,
    TransactionsResponse, UserTransactionsAmountResponse,
};
use crate::state::{
    Stats, CHAINS, CONFIG, FULFILLED, NONCE, RELAYERS, RELAYER_CONSENSUS_THRESHOLD, STATS,
    TRANSACTIONS, TRANSACTION_COUNT,
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let nonce = NONCE.load(deps.storage)?;
    Ok(ConfigResponse {
        token: config.token,
        limit_per_send: config.limit_per_send,
        fee_wallet: config.fee_wallet,
        fee_send: config.fee_send,
        fee_fulfill: config.fee_fulfill,
        paused: config.paused,
        nonce,
    })
}

pub fn query_relayers(deps: Deps) -> StdResult<RelayersResponse> {
    Ok(RelayersResponse {
        relayers: RELAYERS.load(deps.storage)?,
        relayer_consensus_threshold: RELAYER_CONSENSUS_THRESHOLD.load(deps.storage)?,
    })
}

pub fn query_supported_chains(deps: Deps) -> StdResult<SupportedChainsResponse> {
    let chains = CHAINS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| {
            let (chain, exchange_rate) = item?;
            Ok(ChainEntry {
                chain,
                exchange_rate,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(SupportedChainsResponse { chains })
}

pub fn query_exchange_rate(deps: Deps, chain: String) -> StdResult<ExchangeRateResponse> {
    let exchange_rate = CHAINS
        .may_load(deps.storage, &chain)?
        .ok_or_else(|| StdError::generic_err("Chain is not supported"))?;
    Ok(ExchangeRateResponse { exchange_rate })
}

pub fn query_user_transactions_amount(
    deps: Deps,
    user: String,
) -> StdResult<UserTransactionsAmountResponse> {
    let user = deps.api.addr_validate(&user)?;
    let amount = TRANSACTION_COUNT
        .may_load(deps.storage, &user)?
        .unwrap_or(0);
    Ok(UserTransactionsAmountResponse { amount })
}

pub fn query_user_transactions(deps: Deps, user: String) -> StdResult<TransactionsResponse> {
    let user = deps.api.addr_validate(&user)?;
    let count = TRANSACTION_COUNT
        .may_load(deps.storage, &user)?
        .unwrap_or(0);
    let transactions = (0..count)
        .map(|position| TRANSACTIONS.load(deps.storage, (&user, position)))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(TransactionsResponse { transactions })
}

/// Slice of a user's outbound log. `limit` must be non-zero and the range
/// must lie fully inside the log.
pub fn query_user_transactions_slice(
    deps: Deps,
    user: String,
    offset: u64,
    limit: u64,
) -> StdResult<TransactionsResponse> {
    let user = deps.api.addr_validate(&user)?;
    let count = TRANSACTION_COUNT
        .may_load(deps.storage, &user)?
        .unwrap_or(0);

    if limit == 0 {
        return Err(StdError::generic_err("zero limit"));
    }
    let end = offset
        .checked_add(limit)
        .filter(|end| *end <= count)
        .ok_or_else(|| StdError::generic_err("bad offset/limit"))?;

    let transactions = (offset..end)
        .map(|position| TRANSACTIONS.load(deps.storage, (&user, position)))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(TransactionsResponse { transactions })
}

pub fn query_is_fulfilled(deps: Deps, env: Env, tx: FulfillTx) -> StdResult<IsFulfilledResponse> {
    let digest = fulfill_digest(&env.block.chain_id, env.contract.address.as_str(), &tx);
    Ok(IsFulfilledResponse {
        fulfilled: FULFILLED.has(deps.storage, &digest),
    })
}

pub fn query_transaction_digest(env: Env, tx: FulfillTx) -> StdResult<TransactionDigestResponse> {
    let digest = fulfill_digest(&env.block.chain_id, env.contract.address.as_str(), &tx);
    Ok(TransactionDigestResponse {
        digest: Binary::from(digest.to_vec()),
    })
}

pub fn query_stats(deps: Deps) -> StdResult<Stats> {
    STATS.load(deps.storage)
}

pub fn query_has_role(deps: Deps, role: String, account: String) -> StdResult<HasRoleResponse> {
    let account = deps.api.addr_validate(&account)?;
    Ok(HasRoleResponse {
        has_role: has_role(deps.storage, &role, &account),
    })
}
