//! Error types for the Bridge Assist contract.
//!
//! Every validation failure carries a distinct, machine-checkable variant;
//! callers are expected to match on the message, so wording is part of the
//! contract surface.

use common::AccessControlError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    AccessControl(#[from] AccessControlError),

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid token address")]
    InvalidToken,

    #[error("Invalid fee wallet address")]
    InvalidFeeWallet,

    #[error("Invalid owner address")]
    InvalidOwner,

    #[error("Fee send is too high")]
    FeeSendTooHigh,

    #[error("Fee fulfill is too high")]
    FeeFulfillTooHigh,

    #[error("Fee is too high")]
    FeeTooHigh,

    #[error("Fee numerator repeats")]
    FeeRepeat,

    #[error("Fee wallet repeats")]
    FeeWalletRepeat,

    #[error("Limit per send repeats")]
    LimitPerSendRepeat,

    // ========================================================================
    // Pause Errors
    // ========================================================================

    #[error("Pausable: paused")]
    Paused,

    #[error("Pausable: not paused")]
    NotPaused,

    // ========================================================================
    // Chain Registry Errors
    // ========================================================================

    #[error("Chain is not supported")]
    ChainNotSupported,

    #[error("Not supported fromChain")]
    FromChainNotSupported,

    #[error("Chain is already in the list: {chain}")]
    ChainAlreadyRegistered { chain: String },

    #[error("Chain is not in the list yet: {chain}")]
    ChainNotRegistered { chain: String },

    #[error("Exchange rate overflow: 10^{pow}")]
    ExchangeRateOverflow { pow: u32 },

    #[error("bad input")]
    BadInput,

    // ========================================================================
    // Send Errors
    // ========================================================================

    #[error("Field toUser is empty")]
    EmptyToUser,

    #[error("Amount is not divisible by exchange rate")]
    AmountNotDivisible,

    #[error("Amount = 0")]
    ZeroAmount,

    #[error("amount < fee denominator")]
    AmountTooSmall,

    #[error("Amount is more than limit")]
    AmountOverLimit,

    #[error("bad token")]
    NonConformingToken,

    #[error("No pending send")]
    NoPendingSend,

    // ========================================================================
    // Relayer Set Errors
    // ========================================================================

    #[error("No relayers")]
    NoRelayers,

    #[error("Too many relayers")]
    TooManyRelayers,

    #[error("Invalid relayer address at index: {index}")]
    InvalidRelayer { index: usize },

    #[error("Zero relayer at index: {index}")]
    ZeroRelayer { index: usize },

    #[error("Duplicate relayer at index: {index}")]
    DuplicateRelayers { index: usize },

    #[error("Consensus threshold is zero (0-of-N)")]
    ZeroThreshold,

    #[error("Consensus threshold exceeds relayer count (N-of-N)")]
    ThresholdTooHigh,

    // ========================================================================
    // Consensus Errors
    // ========================================================================

    #[error("Bad signatures length")]
    BadSignaturesLength,

    #[error("Too many signatures")]
    TooManySignatures,

    #[error("Bad signature at index {index}")]
    BadSignatureAt { index: usize },

    #[error("Not enough relayers")]
    NotEnoughRelayers,

    #[error("Signature already fulfilled")]
    AlreadyFulfilled,
}
