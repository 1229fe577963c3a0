//! Common - Shared Types and Utilities for the Bridge Assist Contracts
//!
//! This package provides shared type definitions and utility functions
//! used across the Bridge Assist smart contracts.

pub mod access_control;
pub mod asset;

pub use access_control::{
    assert_role, grant_role, has_role, revoke_role, AccessControlError, CREATOR_ROLE,
    DEFAULT_ADMIN_ROLE, MANAGER_ROLE,
};
pub use asset::AssetInfo;
