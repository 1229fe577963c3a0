//! State definitions for the Bridge Factory contract.
//!
//! The factory keeps an ordered, index-addressable registry of bridge
//! instances (both factory-created and externally registered) plus a
//! per-token index supporting multiple instances per token. Removal is
//! swap-remove so both indexes stay dense.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// One registered bridge instance
#[cw_serde]
pub struct BridgeInfo {
    pub bridge: Addr,
    pub token: Addr,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-factory";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "1.0.0";

/// Cap on batch add/remove size, bounding worst-case work per call
pub const ADD_REMOVE_LIMIT_PER_TIME: usize = 100;

/// Reply id for bridge-assist instantiation
pub const INSTANTIATE_BRIDGE_REPLY_ID: u64 = 1;

// ============================================================================
// Storage
// ============================================================================

/// Code id new instances are instantiated from. Changing it never affects
/// already-created instances.
pub const BRIDGE_ASSIST_CODE_ID: Item<u64> = Item::new("bridge_assist_code_id");

/// Ordered registry of instances
/// Key: dense index, Value: BridgeInfo
pub const BRIDGES: Map<u64, BridgeInfo> = Map::new("bridges");

/// Number of registered instances
pub const BRIDGE_COUNT: Item<u64> = Item::new("bridge_count");

/// Membership and reverse lookup: instance address -> index in `BRIDGES`
pub const BRIDGE_INDEX: Map<&Addr, u64> = Map::new("bridge_index");

/// Per-token ordered index
/// Key: (token, dense index), Value: instance address
pub const BY_TOKEN: Map<(&Addr, u64), Addr> = Map::new("by_token");

/// Number of instances per token
pub const BY_TOKEN_COUNT: Map<&Addr, u64> = Map::new("by_token_count");

/// Reverse lookup: (token, instance address) -> index in `BY_TOKEN`
pub const BY_TOKEN_INDEX: Map<(&Addr, &Addr), u64> = Map::new("by_token_index");

/// Token of the instance currently being instantiated, consumed by the reply
pub const PENDING_TOKEN: Item<Addr> = Item::new("pending_token");
