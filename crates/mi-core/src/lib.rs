//! # mi-core
//!
//! Wire types for the micro-integrator management API.
//!
//! This crate provides the types shared between the REST client and the CLI:
//! - Entity structs deserialized from management API responses
//! - Trigger kind enum with lossless round-tripping of unknown server values

pub mod entities;
pub mod enums;
