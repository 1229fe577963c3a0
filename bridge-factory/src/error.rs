//! Error types for the Bridge Factory contract.
//!
//! Batch operations report the first offending array index so callers can
//! correct exactly one entry and resubmit.

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

    #[error("Bridge-assist implementation: zero code id")]
    ZeroImplementation,

    #[error("Invalid owner address")]
    InvalidOwner,

    #[error("Invalid token address")]
    InvalidToken,

    // ========================================================================
    // Batch Registry Errors
    // ========================================================================

    #[error("Zero length array")]
    ZeroLengthArray,

    #[error("Array length exceeds limit")]
    ArrayLengthExceedsLimit,

    #[error("Invalid bridge address at index: {index}")]
    InvalidBridgeAtIndex { index: usize },

    #[error("Bridge duplicate at index: {index}")]
    DuplicateBridgeAtIndex { index: usize },

    #[error("No token for bridge at index: {index}")]
    NoTokenAtIndex { index: usize },

    #[error("Bridge not found at index: {index}")]
    BridgeNotFoundAtIndex { index: usize },

    // ========================================================================
    // Creation Errors
    // ========================================================================

    #[error("Bridge already registered: {bridge}")]
    BridgeAlreadyRegistered { bridge: String },

    #[error("No pending bridge instantiation")]
    NoPendingBridge,
}
