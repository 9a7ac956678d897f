//! `rentora-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it resolves a
//! presented credential into a [`Principal`] and gates operations by role.
//! Authentication and authorization are independent checks — an operation may
//! require "any authenticated principal" or "authenticated + elevated".

pub mod authorize;
pub mod claims;
pub mod jwt;
pub mod principal;
pub mod roles;

pub use authorize::{require_elevated, AuthzError};
pub use claims::{validate_claims, JwtClaims, TokenValidationError};
pub use jwt::{Hs256JwtValidator, JwtValidator};
pub use principal::{Principal, PrincipalId};
pub use roles::Role;
