//! # brewhub-auth
//!
//! Actor identity for the recipe API. Access tokens are HS256 JWTs whose
//! `sub` claim is the acting user's ID. Tokens are normally minted by the
//! identity service; [`JwtEncoder`] exists for the admin CLI and tests.

pub mod jwt;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
