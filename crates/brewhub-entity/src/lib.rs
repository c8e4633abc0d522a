//! # brewhub-entity
//!
//! Domain entity models for BrewHub. Every struct in this crate represents
//! a database table row or a domain value object. Database entities derive
//! `sqlx::FromRow`; API-facing entities serialize with camelCase keys.

pub mod recipe;
pub mod version;
