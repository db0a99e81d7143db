//! Bearer token verification.
//!
//! Sign-up and sign-in happen at the hosted identity provider; this service
//! only verifies the HS256 access tokens it issues.
//!
//! - [`jwt`] -- claims, configuration, token validation.

pub mod jwt;
