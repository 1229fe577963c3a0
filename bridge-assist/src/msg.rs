//! Message types for the Bridge Assist contract.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::{Stats, Transaction};

// ============================================================================
// Instantiate
// ============================================================================

/// Instantiate message. Instantiation runs exactly once per instance by
/// platform construction; the factory forwards these fields verbatim.
#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 token this instance bridges
    pub token: String,
    /// Maximum raw amount accepted per outbound `send`
    pub limit_per_send: Uint128,
    /// Destination for collected fees
    pub fee_wallet: String,
    /// Outbound fee in basis points (0-9999)
    pub fee_send: u16,
    /// Inbound fee in basis points (0-9999)
    pub fee_fulfill: u16,
    /// Receives the administrative role on this instance
    pub owner: String,
    /// Relayer addresses (0x-prefixed 20-byte hex), 1..=100, distinct
    pub relayers: Vec<String>,
    /// Required number of distinct relayer signatures, 1..=|relayers|
    pub relayer_consensus_threshold: u32,
}

// ============================================================================
// Execute
// ============================================================================

/// Inbound attestation payload, in converted (canonical) units.
///
/// Relayers sign the domain-separated digest over these fields; see
/// [`crate::hash::fulfill_digest`].
#[cw_serde]
pub struct FulfillTx {
    /// Amount in converted units (scaled up by the fromChain rate on release)
    pub amount: Uint128,
    /// Sender on the source chain (foreign address format)
    pub from_user: String,
    /// Recipient on this chain
    pub to_user: String,
    /// Source chain name; must be registered here
    pub from_chain: String,
    /// Source-side outbound nonce
    pub nonce: u64,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Initiate an outbound transfer: pulls `amount` of the bridge token from
    /// the caller and records it for relayers to observe. No cross-chain
    /// message is emitted.
    ///
    /// Authorization: Anyone (requires a CW20 allowance for this contract)
    Send {
        /// Raw amount; must divide evenly by the destination chain's rate
        amount: Uint128,
        /// Recipient on the destination chain
        to_user: String,
        /// Destination chain name; must be registered
        to_chain: String,
    },

    /// Apply an inbound attestation: verifies relayer consensus over `tx`,
    /// then releases the scaled amount (minus the fulfill fee) to `tx.to_user`.
    ///
    /// Authorization: Anyone (consensus comes from the signatures)
    Fulfill {
        tx: FulfillTx,
        /// 65-byte r||s||v recoverable secp256k1 signatures over the digest
        signatures: Vec<Binary>,
    },

    /// Update both fee rates; at least one must change.
    ///
    /// Authorization: Manager
    SetFee { fee_send: u16, fee_fulfill: u16 },

    /// Change the fee destination; must differ from the current one.
    ///
    /// Authorization: Manager
    SetFeeWallet { fee_wallet: String },

    /// Change the per-send limit; must differ from the current one.
    ///
    /// Authorization: Manager
    SetLimitPerSend { limit_per_send: Uint128 },

    /// Register chains with exchange rates given as powers of ten.
    /// All-or-nothing; a registered rate is immutable.
    ///
    /// Authorization: Manager
    AddChains {
        chains: Vec<String>,
        exchange_rates_pow: Vec<u32>,
    },

    /// Unregister chains. All-or-nothing. Re-adding a removed chain is the
    /// only way its rate ever changes.
    ///
    /// Authorization: Manager
    RemoveChains { chains: Vec<String> },

    /// Replace the whole relayer set and consensus threshold.
    ///
    /// Authorization: Manager
    SetRelayers {
        relayers: Vec<String>,
        relayer_consensus_threshold: u32,
    },

    /// Stop `send`/`fulfill`. Admin operations stay available.
    ///
    /// Authorization: Manager
    Pause {},

    /// Resume `send`/`fulfill`.
    ///
    /// Authorization: Manager
    Unpause {},

    /// Sweep any asset held by this instance, independent of the bridge
    /// token. Recovery path for stuck funds.
    ///
    /// Authorization: Manager
    Withdraw {
        asset: AssetInfo,
        recipient: String,
        amount: Uint128,
    },

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
    /// Contract configuration and current nonce
    #[returns(ConfigResponse)]
    Config {},

    /// Relayer set and consensus threshold
    #[returns(RelayersResponse)]
    Relayers {},

    /// All registered chains with their exchange rates
    #[returns(SupportedChainsResponse)]
    SupportedChains {},

    /// Exchange rate for one chain; errors if not registered
    #[returns(ExchangeRateResponse)]
    ExchangeRate { chain: String },

    /// Number of outbound records for a user
    #[returns(UserTransactionsAmountResponse)]
    UserTransactionsAmount { user: String },

    /// Full outbound log for a user
    #[returns(TransactionsResponse)]
    UserTransactions { user: String },

    /// Slice of a user's outbound log; `limit` must be non-zero and
    /// `offset + limit` must not exceed the log length
    #[returns(TransactionsResponse)]
    UserTransactionsSlice {
        user: String,
        offset: u64,
        limit: u64,
    },

    /// Whether an attestation payload was already applied
    #[returns(IsFulfilledResponse)]
    IsFulfilled { tx: FulfillTx },

    /// The digest relayers must sign for a payload on this instance
    #[returns(TransactionDigestResponse)]
    TransactionDigest { tx: FulfillTx },

    /// Lifetime counters
    #[returns(Stats)]
    Stats {},

    /// Role membership check
    #[returns(HasRoleResponse)]
    HasRole { role: String, account: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
    pub limit_per_send: Uint128,
    pub fee_wallet: Addr,
    pub fee_send: u16,
    pub fee_fulfill: u16,
    pub paused: bool,
    pub nonce: u64,
}

#[cw_serde]
pub struct RelayersResponse {
    pub relayers: Vec<String>,
    pub relayer_consensus_threshold: u32,
}

#[cw_serde]
pub struct ChainEntry {
    pub chain: String,
    pub exchange_rate: Uint128,
}

#[cw_serde]
pub struct SupportedChainsResponse {
    pub chains: Vec<ChainEntry>,
}

#[cw_serde]
pub struct ExchangeRateResponse {
    pub exchange_rate: Uint128,
}

#[cw_serde]
pub struct UserTransactionsAmountResponse {
    pub amount: u64,
}

#[cw_serde]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[cw_serde]
pub struct IsFulfilledResponse {
    pub fulfilled: bool,
}

#[cw_serde]
pub struct TransactionDigestResponse {
    pub digest: Binary,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}
