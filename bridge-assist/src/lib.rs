//! Bridge Assist Contract - Per-Token Cross-Chain Transfer State Machine
//!
//! One instance is deployed per token/route, usually through the factory
//! contract sharing a single stored code id.
//!
//! # Outbound Flow (Send)
//! 1. User approves this contract on the bridge token and calls `Send`
//! 2. The contract pulls the tokens, verifies the exact balance delta, and
//!    records the transfer under the caller with a sequential nonce
//! 3. Relayers observe the recorded transfer and co-sign a fulfill payload
//!    for the destination chain
//!
//! # Inbound Flow (Fulfill)
//! 1. Anyone submits the payload plus relayer signatures to `Fulfill`
//! 2. The contract verifies that enough distinct registered relayers signed
//!    the domain-separated digest
//! 3. The amount is scaled by the source chain's exchange rate, the fulfill
//!    fee is routed to the fee wallet, and the rest goes to the recipient
//!
//! # Security
//! - M-of-N relayer signature consensus with duplicate-signer rejection
//! - Domain-separated digests: a signature is valid on exactly one instance
//!   on exactly one chain
//! - Replay protection keyed by the attestation digest
//! - Balance-delta verification against non-conforming tokens
//! - Emergency pause for transfers (admin operations stay available)

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod relayers;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{fulfill_digest, keccak256};
