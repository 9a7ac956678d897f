use rentora_auth::Principal;

/// Principal context for a request (authenticated identity + roles).
///
/// Inserted by the auth middleware and threaded **explicitly** into handlers
/// and authorization checks; there is no ambient current-user state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}
