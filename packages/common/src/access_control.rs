//! Role-based access control shared by the bridge contracts.
//!
//! Roles are data: an opaque role tag mapped to a set of member addresses,
//! checked with an explicit guard. Granting and revoking is itself guarded
//! by `DEFAULT_ADMIN_ROLE` in the contracts that use this module.

use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;
use thiserror::Error;

/// Administrative role: manages other roles and registry-level operations.
pub const DEFAULT_ADMIN_ROLE: &str = "default_admin";

/// Manager role: bridge instance configuration (fees, chains, relayers, pause).
pub const MANAGER_ROLE: &str = "manager";

/// Creator role: may create new bridge instances through the factory.
pub const CREATOR_ROLE: &str = "creator";

/// Role membership storage.
/// Key: (role tag, member address), Value: member flag
pub const ROLE_MEMBERS: Map<(&str, &Addr), bool> = Map::new("role_members");

#[derive(Error, Debug, PartialEq)]
pub enum AccessControlError {
    #[error("AccessControl: account {account} is missing role {role}")]
    MissingRole { account: String, role: String },
}

/// Grant `role` to `account`. Idempotent.
pub fn grant_role(storage: &mut dyn Storage, role: &str, account: &Addr) -> StdResult<()> {
    ROLE_MEMBERS.save(storage, (role, account), &true)
}

/// Revoke `role` from `account`. Idempotent.
pub fn revoke_role(storage: &mut dyn Storage, role: &str, account: &Addr) {
    ROLE_MEMBERS.remove(storage, (role, account));
}

/// Whether `account` currently holds `role`.
pub fn has_role(storage: &dyn Storage, role: &str, account: &Addr) -> bool {
    ROLE_MEMBERS.has(storage, (role, account))
}

/// Guard: fail unless `account` holds `role`.
pub fn assert_role(
    storage: &dyn Storage,
    role: &str,
    account: &Addr,
) -> Result<(), AccessControlError> {
    if has_role(storage, role, account) {
        return Ok(());
    }
    Err(AccessControlError::MissingRole {
        account: account.to_string(),
        role: role.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn grant_has_revoke_roundtrip() {
        let mut deps = mock_dependencies();
        let alice = Addr::unchecked("alice");

        assert!(!has_role(&deps.storage, MANAGER_ROLE, &alice));
        grant_role(deps.as_mut().storage, MANAGER_ROLE, &alice).unwrap();
        assert!(has_role(&deps.storage, MANAGER_ROLE, &alice));
        assert!(assert_role(&deps.storage, MANAGER_ROLE, &alice).is_ok());

        revoke_role(deps.as_mut().storage, MANAGER_ROLE, &alice);
        assert!(!has_role(&deps.storage, MANAGER_ROLE, &alice));
    }

    #[test]
    fn roles_are_independent() {
        let mut deps = mock_dependencies();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");

        grant_role(deps.as_mut().storage, DEFAULT_ADMIN_ROLE, &alice).unwrap();

        assert!(!has_role(&deps.storage, MANAGER_ROLE, &alice));
        assert!(!has_role(&deps.storage, DEFAULT_ADMIN_ROLE, &bob));

        let err = assert_role(&deps.storage, DEFAULT_ADMIN_ROLE, &bob).unwrap_err();
        assert_eq!(
            err.to_string(),
            "AccessControl: account bob is missing role default_admin"
        );
    }
}
