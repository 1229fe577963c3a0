//! State definitions for the Bridge Assist contract.
//!
//! One instance is deployed per token/route. All configuration, the chain
//! registry, the per-user outbound log, and the replay-protection set live
//! here.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// CW20 token this instance bridges
    pub token: Addr,
    /// Maximum raw amount accepted per outbound `send`
    pub limit_per_send: Uint128,
    /// Destination for collected fees
    pub fee_wallet: Addr,
    /// Outbound fee in basis points (0-9999)
    pub fee_send: u16,
    /// Inbound fee in basis points (0-9999)
    pub fee_fulfill: u16,
    /// Whether `send`/`fulfill` are currently paused
    pub paused: bool,
}

/// One recorded outbound transfer.
///
/// `amount` is stored in converted units (raw amount minus the send fee,
/// divided by the destination chain's exchange rate), which is what the
/// destination side releases.
#[cw_serde]
pub struct Transaction {
    /// Amount in converted (destination) units
    pub amount: Uint128,
    /// Block time at which the transfer was recorded
    pub timestamp: Timestamp,
    /// Chain this instance runs on
    pub from_chain: String,
    /// Destination chain name
    pub to_chain: String,
    /// Global outbound nonce assigned to this transfer
    pub nonce: u64,
    /// Sender on this chain
    pub from_user: Addr,
    /// Recipient on the destination chain (foreign address format)
    pub to_user: String,
}

/// Transient record between the `send` entry point and its transfer reply.
///
/// The balance snapshot lets the reply handler detect fee-on-transfer tokens
/// by comparing the actual balance delta against the requested amount.
#[cw_serde]
pub struct PendingSend {
    pub sender: Addr,
    pub amount: Uint128,
    pub to_user: String,
    pub to_chain: String,
    pub exchange_rate: Uint128,
    pub balance_before: Uint128,
}

/// Running counters over the instance lifetime
#[cw_serde]
pub struct Stats {
    pub total_sends: u64,
    pub total_fulfills: u64,
    /// Fees accrued in local token units, both directions
    pub fees_collected: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-assist";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "1.0.0";

/// Fee denominator: fees are expressed in basis points (1/10000)
pub const FEE_DENOMINATOR: u128 = 10_000;

/// Upper bound on the relayer set size
pub const MAX_RELAYERS: usize = 100;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Outbound nonce counter; equals the number of outbound records ever created
pub const NONCE: Item<u64> = Item::new("nonce");

/// Relayer set: distinct secp256k1-derived addresses, lowercase 0x-hex
pub const RELAYERS: Item<Vec<String>> = Item::new("relayers");

/// Minimum number of distinct relayer signatures required on `fulfill`
pub const RELAYER_CONSENSUS_THRESHOLD: Item<u32> = Item::new("relayer_consensus_threshold");

/// Chain registry: chain name -> exchange-rate scaling factor (power of ten).
/// Presence means the chain is supported. A registered rate is immutable;
/// remove-then-re-add is the only way to change it.
pub const CHAINS: Map<&str, Uint128> = Map::new("chains");

/// Per-user outbound log, append-only
/// Key: (user, position in the user's log), Value: Transaction
pub const TRANSACTIONS: Map<(&Addr, u64), Transaction> = Map::new("transactions");

/// Number of outbound records per user
pub const TRANSACTION_COUNT: Map<&Addr, u64> = Map::new("transaction_count");

/// Replay-protection set: attestation digest -> block height at fulfillment.
/// Nothing is ever removed.
pub const FULFILLED: Map<&[u8], u64> = Map::new("fulfilled");

/// In-flight outbound transfer awaiting its transfer-from reply
pub const PENDING_SEND: Item<PendingSend> = Item::new("pending_send");

/// Lifetime counters
pub const STATS: Item<Stats> = Item::new("stats");
