//! Inbound release handler.
//!
//! `fulfill` verifies multi-relayer signature consensus over an attestation
//! payload, marks the attestation applied, and releases the scaled amount
//! (minus the fulfill fee) to the recipient.

use cosmwasm_std::{Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, StdError};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, fulfill_digest};
use crate::msg::FulfillTx;
use crate::relayers::recover_signer;
use crate::state::{
    CHAINS, CONFIG, FEE_DENOMINATOR, FULFILLED, RELAYERS, RELAYER_CONSENSUS_THRESHOLD, STATS,
};
use common::AssetInfo;

pub fn execute_fulfill(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    tx: FulfillTx,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    let exchange_rate = CHAINS
        .may_load(deps.storage, &tx.from_chain)?
        .ok_or(ContractError::FromChainNotSupported)?;

    let relayers = RELAYERS.load(deps.storage)?;
    if signatures.is_empty() {
        return Err(ContractError::BadSignaturesLength);
    }
    if signatures.len() > relayers.len() {
        return Err(ContractError::TooManySignatures);
    }

    let digest = fulfill_digest(&env.block.chain_id, env.contract.address.as_str(), &tx);

    // Fixed-size scan: recover each signer, reject unknown signers outright,
    // count each known relayer at most once. Malformed signatures recover no
    // signer and do not count.
    let threshold = RELAYER_CONSENSUS_THRESHOLD.load(deps.storage)?;
    let mut signers: Vec<String> = Vec::with_capacity(signatures.len());
    for (index, signature) in signatures.iter().enumerate() {
        let Some(signer) = recover_signer(deps.api, &digest, signature.as_slice()) else {
            continue;
        };
        if !relayers.contains(&signer) {
            return Err(ContractError::BadSignatureAt { index });
        }
        if !signers.contains(&signer) {
            signers.push(signer);
        }
    }
    if (signers.len() as u32) < threshold {
        return Err(ContractError::NotEnoughRelayers);
    }

    // Replay check comes after signature validation so consensus errors
    // surface first when both conditions hold.
    if FULFILLED.has(deps.storage, &digest) {
        return Err(ContractError::AlreadyFulfilled);
    }
    FULFILLED.save(deps.storage, &digest, &env.block.height)?;

    let to_user = deps.api.addr_validate(&tx.to_user)?;

    let local_amount = tx
        .amount
        .checked_mul(exchange_rate)
        .map_err(StdError::overflow)?;
    let fee = local_amount.multiply_ratio(config.fee_fulfill as u128, FEE_DENOMINATOR);
    let payout = local_amount - fee;

    let token = AssetInfo::Cw20 {
        contract_addr: config.token.to_string(),
    };
    let mut messages: Vec<CosmosMsg> = vec![token.transfer_msg(to_user.as_str(), payout)?];
    if !fee.is_zero() {
        messages.push(token.transfer_msg(config.fee_wallet.as_str(), fee)?);
    }

    let mut stats = STATS.load(deps.storage)?;
    stats.total_fulfills += 1;
    stats.fees_collected += fee;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "fulfill")
        .add_attribute("digest", bytes32_to_hex(&digest))
        .add_attribute("from_chain", tx.from_chain)
        .add_attribute("from_user", tx.from_user)
        .add_attribute("to_user", to_user)
        .add_attribute("nonce", tx.nonce.to_string())
        .add_attribute("amount", local_amount.to_string())
        .add_attribute("fee", fee.to_string())
        .add_attribute("relayer_consensus", format!("{}/{}", signers.len(), relayers.len())))
}
