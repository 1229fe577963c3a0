//! Bridge Factory Contract - Creates and Indexes Bridge-Assist Instances
//!
//! The factory holds a single bridge-assist code id (the shared
//! implementation) and instantiates independently configured instances from
//! it on demand. It also maintains a paginated registry over every known
//! instance - factory-created and externally registered alike - keyed
//! globally and per token.
//!
//! # Roles
//! - Creator: may create new instances
//! - Default admin: manages the registry, the implementation pointer, and
//!   role grants
//!
//! # Registry
//! Batch add/remove is capped per call so no single call does unbounded
//! work; every batch either applies in full or not at all.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
