//! Asset abstraction over native denoms and CW20 tokens.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, BankMsg, Coin, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

/// A transferable asset: either a native bank denom or a CW20 contract.
#[cw_serde]
pub enum AssetInfo {
    Native { denom: String },
    Cw20 { contract_addr: String },
}

impl AssetInfo {
    /// Build the message transferring `amount` of this asset to `recipient`.
    pub fn transfer_msg(&self, recipient: &str, amount: Uint128) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            })),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            })),
        }
    }
}
