//! Message types for the Bridge Factory contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::BridgeInfo;

// ============================================================================
// Instantiate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    /// Code id of the bridge-assist implementation new instances share
    pub bridge_assist_code_id: u64,
    /// Receives the registry admin role
    pub owner: String,
}

// ============================================================================
// Execute
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Instantiate a new bridge-assist from the current implementation and
    /// register it. The new instance address is returned in the
    /// `create_bridge_assist` event.
    ///
    /// Authorization: Creator
    CreateBridgeAssist {
        token: String,
        limit_per_send: Uint128,
        fee_wallet: String,
        fee_send: u16,
        fee_fulfill: u16,
        /// Receives the administrative role on the new instance
        owner: String,
        relayers: Vec<String>,
        relayer_consensus_threshold: u32,
    },

    /// Batch-register pre-existing instances (e.g. created before this
    /// registry existed). At most 100 entries per call; all-or-nothing.
    ///
    /// Authorization: Default admin
    AddBridgeAssists { bridges: Vec<String> },

    /// Batch-unregister instances. At most 100 entries per call;
    /// all-or-nothing.
    ///
    /// Authorization: Default admin
    RemoveBridgeAssists { bridges: Vec<String> },

    /// Point the factory at a new implementation code id. Already-created
    /// instances are unaffected.
    ///
    /// Authorization: Default admin
    ChangeBridgeAssistImplementation { bridge_assist_code_id: u64 },

    /// Grant a role to an account.
    ///
    /// Authorization: Default admin
    GrantRole { role: String, account: String },

    /// Revoke a role from an account.
    ///
    /// Authorization: Default admin
    RevokeRole { role: String, account: String },
}

// ============================================================================
// Query
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current implementation code id
    #[returns(ImplementationResponse)]
    BridgeAssistImplementation {},

    /// Number of registered instances
    #[returns(CreatedBridgesLengthResponse)]
    CreatedBridgesLength {},

    /// Page of the registry; `limit` must be non-zero and `offset + limit`
    /// must not exceed the registry length
    #[returns(CreatedBridgesResponse)]
    CreatedBridgesInfo { offset: u64, limit: u64 },

    /// Single registry entry by index
    #[returns(BridgeInfo)]
    CreatedBridgeInfo { index: u64 },

    /// Number of registered instances for a token
    #[returns(BridgesByTokenLengthResponse)]
    BridgesByTokenLength { token: String },

    /// Page of the per-token index; same offset/limit validation
    #[returns(BridgesByTokenResponse)]
    BridgesByToken {
        token: String,
        offset: u64,
        limit: u64,
    },

    /// Single per-token entry by index
    #[returns(BridgeByTokenResponse)]
    BridgeByToken { token: String, index: u64 },

    /// Role membership check
    #[returns(HasRoleResponse)]
    HasRole { role: String, account: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ImplementationResponse {
    pub bridge_assist_code_id: u64,
}

#[cw_serde]
pub struct CreatedBridgesLengthResponse {
    pub length: u64,
}

#[cw_serde]
pub struct CreatedBridgesResponse {
    pub bridges: Vec<BridgeInfo>,
}

#[cw_serde]
pub struct BridgesByTokenLengthResponse {
    pub length: u64,
}

#[cw_serde]
pub struct BridgesByTokenResponse {
    pub bridges: Vec<Addr>,
}

#[cw_serde]
pub struct BridgeByTokenResponse {
    pub bridge: Addr,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}
