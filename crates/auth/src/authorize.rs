//! Pure authorization checks.
//!
//! Authorization is a separate gate from authentication: a valid principal
//! may still lack the elevated role required for destructive operations.

use thiserror::Error;

use crate::Principal;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: elevated role required")]
    Forbidden,
}

/// Require the elevated (admin) capability.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn require_elevated(principal: &Principal) -> Result<(), AuthzError> {
    if principal.is_elevated() {
        Ok(())
    } else {
        Err(AuthzError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PrincipalId, Role};

    #[test]
    fn admin_role_grants_elevated() {
        let p = Principal::new(PrincipalId::new(), vec![Role::admin()]);
        assert!(require_elevated(&p).is_ok());
    }

    #[test]
    fn plain_principal_is_forbidden() {
        let p = Principal::new(PrincipalId::new(), vec![Role::new("clerk")]);
        assert_eq!(require_elevated(&p), Err(AuthzError::Forbidden));
    }

    #[test]
    fn no_roles_is_forbidden() {
        let p = Principal::new(PrincipalId::new(), vec![]);
        assert_eq!(require_elevated(&p), Err(AuthzError::Forbidden));
    }
}
